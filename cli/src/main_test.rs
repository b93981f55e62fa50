use super::*;

fn property() -> Property {
    Property {
        id: 4,
        title: "Harbor Loft".to_owned(),
        price: 450_000.0,
        address: "12 Pier Rd, Portland, ME".to_owned(),
        property_type: "condo".to_owned(),
        bedrooms: 1.0,
        bathrooms: 1.5,
        square_feet: 1_120.0,
        year_built: Some(2008),
        description: "Top floor.".to_owned(),
        features: vec!["Balcony".to_owned(), "Elevator".to_owned()],
        images: vec!["a.jpg".to_owned(), "b.jpg".to_owned()],
    }
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn list_flags_parse_into_filter_args() {
    let cli = Cli::try_parse_from([
        "homehub",
        "--catalog",
        "homes.json",
        "list",
        "--price-min",
        "100000",
        "--type",
        "house",
        "--json",
    ])
    .unwrap();

    assert_eq!(cli.catalog.as_deref(), Some(Path::new("homes.json")));
    let Command::List(args) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(args.filters.price_min, Some(100_000.0));
    assert_eq!(args.filters.property_type.as_deref(), Some("house"));
    assert!(args.json);
    assert!(args.search.is_none());
}

#[test]
fn update_requires_data() {
    assert!(Cli::try_parse_from(["homehub", "update", "3"]).is_err());
    assert!(Cli::try_parse_from(["homehub", "update", "3", "--data", "{}"]).is_ok());
}

// =============================================================
// Filter merging
// =============================================================

#[test]
fn empty_filter_args_are_detected() {
    assert!(FilterArgs::default().is_empty());
    let args = FilterArgs {
        bathrooms_min: Some(2.0),
        ..FilterArgs::default()
    };
    assert!(!args.is_empty());
}

#[test]
fn given_flags_override_and_others_keep_remembered_values() {
    let remembered = FilterCriteria {
        price_min: Some(100_000.0),
        location: Some("Springfield".to_owned()),
        ..FilterCriteria::default()
    };
    let args = FilterArgs {
        price_max: Some(400_000.0),
        location: Some("Shelbyville".to_owned()),
        ..FilterArgs::default()
    };

    let merged = args.merge_into(&remembered);
    assert_eq!(merged.price_min, Some(100_000.0));
    assert_eq!(merged.price_max, Some(400_000.0));
    assert_eq!(merged.location.as_deref(), Some("Shelbyville"));
}

#[test]
fn empty_text_flag_unsets_the_field() {
    let remembered = FilterCriteria {
        property_type: Some("house".to_owned()),
        ..FilterCriteria::default()
    };
    let args = FilterArgs {
        property_type: Some(String::new()),
        ..FilterArgs::default()
    };
    assert!(args.merge_into(&remembered).property_type.is_none());
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn row_shows_marker_and_formatted_fields() {
    let row = render_row(&property(), true);
    assert!(row.starts_with("* #4 $450K"));
    assert!(row.contains("1 bed | 1.5 baths | 1,120 sq ft"));

    assert!(render_row(&property(), false).starts_with("  #4"));
}

#[test]
fn detail_lists_address_lines_and_extras() {
    let detail = render_detail(&property(), false);
    let lines: Vec<_> = detail.lines().collect();
    assert_eq!(lines[0], "Harbor Loft");
    assert_eq!(lines[1], "$450K  (condo)");
    assert_eq!(lines[2], "12 Pier Rd");
    assert_eq!(lines[3], "Portland, ME");
    assert!(detail.contains("Built 2008"));
    assert!(detail.contains("Features: Balcony, Elevator"));
    assert!(detail.contains("Photos: 2 (cover a.jpg)"));
}

#[test]
fn detail_omits_missing_extras() {
    let bare = Property {
        address: "Lot 9".to_owned(),
        year_built: None,
        description: String::new(),
        features: Vec::new(),
        images: Vec::new(),
        ..property()
    };
    let detail = render_detail(&bare, true);
    assert!(detail.starts_with("Harbor Loft  [saved]"));
    assert!(!detail.contains("Built"));
    assert!(!detail.contains("Features"));
    assert!(!detail.contains("Photos"));
    assert_eq!(detail.lines().count(), 4);
}

// =============================================================
// Catalog source
// =============================================================

#[test]
fn missing_catalog_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let client = read_catalog(&dir.path().join("absent.json")).unwrap();
    assert!(client.is_empty());
}

#[test]
fn malformed_catalog_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{not json").unwrap();
    assert!(matches!(read_catalog(&path), Err(CliError::InvalidJson(_))));
}

#[tokio::test]
async fn catalog_mutations_are_written_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homes.json");
    fs::write(&path, serde_json::to_string(&vec![property()]).unwrap()).unwrap();

    let records = Records::Catalog {
        client: read_catalog(&path).unwrap(),
        path: path.clone(),
    };
    assert!(records.client().delete(4).await);
    records.persist().await.unwrap();

    assert!(read_catalog(&path).unwrap().is_empty());
}
