use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Sample {
    name: String,
    count: u32,
}

fn sample() -> Sample {
    Sample {
        name: "a".to_owned(),
        count: 2,
    }
}

/// Port whose every call fails, like storage disabled by the browser.
struct DisabledStorage;

impl StoragePort for DisabledStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_clones_share_state() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set_item("k", "v").expect("set");
    assert_eq!(other.get_item("k").expect("get").as_deref(), Some("v"));
    assert_eq!(other.len(), 1);
}

#[test]
fn memory_storage_remove_absent_key_succeeds() {
    let storage = MemoryStorage::new();
    storage.remove_item("missing").expect("remove");
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_rejects_writes_when_asked() {
    let storage = MemoryStorage::new();
    storage.set_reject_writes(true);
    let err = storage.set_item("k", "v").expect_err("quota");
    assert!(matches!(err, StorageError::QuotaExceeded(ref key) if key == "k"));
    assert_eq!(storage.raw("k"), None);
}

// =============================================================
// JsonStore
// =============================================================

#[test]
fn write_then_read_returns_value() {
    let store = JsonStore::new(MemoryStorage::new());
    assert!(store.write("sample", &sample()));
    assert_eq!(store.read::<Sample>("sample"), Some(sample()));
}

#[test]
fn read_missing_key_is_none() {
    let store = JsonStore::new(MemoryStorage::new());
    assert_eq!(store.read::<Sample>("sample"), None);
    assert!(store.try_read::<Sample>("sample").expect("read").is_none());
}

#[test]
fn malformed_json_falls_back_to_default() {
    let storage = MemoryStorage::new();
    storage.insert_raw("list", "{not json");
    let store = JsonStore::new(storage);
    assert_eq!(store.read_or::<Vec<u32>>("list", Vec::new()), Vec::<u32>::new());
    assert!(matches!(
        store.try_read::<Vec<u32>>("list"),
        Err(StorageError::Json(_))
    ));
}

#[test]
fn structurally_incompatible_blob_is_treated_as_absent() {
    let storage = MemoryStorage::new();
    storage.insert_raw("sample", r#"{"unexpected": true}"#);
    let store = JsonStore::new(storage);
    assert_eq!(store.read::<Sample>("sample"), None);
}

#[test]
fn rejected_write_returns_false() {
    let storage = MemoryStorage::new();
    storage.set_reject_writes(true);
    let store = JsonStore::new(storage);
    assert!(!store.write("sample", &sample()));
    assert!(!store.remove("sample"));
}

#[test]
fn disabled_storage_degrades_without_errors() {
    let store = JsonStore::new(DisabledStorage);
    assert_eq!(store.read::<Sample>("sample"), None);
    assert_eq!(store.read_or("count", 7_u32), 7);
    assert!(!store.write("sample", &sample()));
    assert!(matches!(
        store.try_write("sample", &sample()),
        Err(StorageError::Unavailable)
    ));
}

#[test]
fn borrowed_port_writes_through() {
    let storage = MemoryStorage::new();
    assert!(JsonStore::new(&storage).write("n", &5_u32));
    assert_eq!(storage.raw("n").as_deref(), Some("5"));
}
