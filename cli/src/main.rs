mod file_storage;
mod rest_client;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use listings::format::{bathroom_text, bedroom_text, format_price, format_square_feet, split_address};
use listings::{
    FilterCriteria, InMemoryPropertyClient, ListingState, Property, PropertyClient, PropertyDraft,
    PropertyPatch, SavedRegistry, SavedState,
};
use tracing_subscriber::EnvFilter;

use crate::file_storage::FileStorage;
use crate::rest_client::RestPropertyClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to access catalog {path}: {source}")]
    CatalogIo {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("property {0} not found")]
    NotFound(i64),
    #[error("record store rejected {0}")]
    Rejected(&'static str),
    #[error("could not persist {0} to local storage")]
    NotPersisted(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "homehub", about = "Browse, filter and save HomeHub property listings")]
struct Cli {
    /// Directory holding saved properties and filter preferences.
    #[arg(long, env = "HOMEHUB_DATA_DIR", default_value = ".homehub")]
    data_dir: PathBuf,

    /// Record store base URL, used when no catalog file is given.
    #[arg(long, env = "HOMEHUB_BASE_URL", default_value = "http://127.0.0.1:3000/api")]
    base_url: String,

    /// JSON array of property records to use instead of the record store.
    #[arg(long, env = "HOMEHUB_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List properties matching the remembered filters plus any given here.
    List(ListArgs),
    /// Forget every remembered filter.
    ClearFilters,
    Show {
        id: i64,
    },
    Save {
        id: i64,
    },
    Unsave {
        id: i64,
    },
    /// Saved properties, most recently saved first.
    Saved {
        #[arg(long)]
        json: bool,
    },
    ClearSaved,
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    price_min: Option<f64>,
    #[arg(long)]
    price_max: Option<f64>,
    #[arg(long)]
    bedrooms_min: Option<f64>,
    #[arg(long)]
    bathrooms_min: Option<f64>,
    #[arg(long = "type")]
    property_type: Option<String>,
}

impl FilterArgs {
    fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.bedrooms_min.is_none()
            && self.bathrooms_min.is_none()
            && self.property_type.is_none()
    }

    /// `base` with every flag given on the command line overriding its field.
    fn merge_into(&self, base: &FilterCriteria) -> FilterCriteria {
        let mut criteria = base.clone();
        if let Some(location) = &self.location {
            criteria.location = Some(location.clone()).filter(|l| !l.is_empty());
        }
        if let Some(kind) = &self.property_type {
            criteria.property_type = Some(kind.clone()).filter(|k| !k.is_empty());
        }
        criteria.price_min = self.price_min.or(criteria.price_min);
        criteria.price_max = self.price_max.or(criteria.price_max);
        criteria.bedrooms_min = self.bedrooms_min.or(criteria.bedrooms_min);
        criteria.bathrooms_min = self.bathrooms_min.or(criteria.bathrooms_min);
        criteria
    }
}

#[derive(Args, Debug)]
struct ListArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// One-off search term, like the `?search=` URL parameter.
    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    json: bool,
}

/// Where property records come from.
enum Records {
    Catalog {
        path: PathBuf,
        client: InMemoryPropertyClient,
    },
    Rest(RestPropertyClient),
}

impl Records {
    fn open(cli: &Cli) -> Result<Self, CliError> {
        match &cli.catalog {
            Some(path) => Ok(Self::Catalog {
                client: read_catalog(path)?,
                path: path.clone(),
            }),
            None => Ok(Self::Rest(RestPropertyClient::new(&cli.base_url)?)),
        }
    }

    fn client(&self) -> &dyn PropertyClient {
        match self {
            Self::Catalog { client, .. } => client as &dyn PropertyClient,
            Self::Rest(client) => client,
        }
    }

    /// Write catalog mutations back to disk. The record store persists its own.
    async fn persist(&self) -> Result<(), CliError> {
        let Self::Catalog { path, client } = self else {
            return Ok(());
        };
        let raw = serde_json::to_string_pretty(&client.get_all().await)?;
        fs::write(path, raw).map_err(|source| CliError::CatalogIo {
            path: path.display().to_string(),
            source,
        })
    }
}

/// A missing catalog file is an empty catalog.
fn read_catalog(path: &Path) -> Result<InMemoryPropertyClient, CliError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(InMemoryPropertyClient::from_json(&raw)?),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(InMemoryPropertyClient::default()),
        Err(source) => Err(CliError::CatalogIo {
            path: path.display().to_string(),
            source,
        }),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_tracing();
    let cli = Cli::parse();
    let storage = FileStorage::new(&cli.data_dir);
    let records = Records::open(&cli)?;
    tracing::debug!(data_dir = %storage.dir().display(), "opened local storage");

    match cli.command {
        Command::List(args) => run_list(&storage, &records, &args).await,
        Command::ClearFilters => run_clear_filters(&storage),
        Command::Show { id } => run_show(&storage, &records, id).await,
        Command::Save { id } => run_save(&storage, id),
        Command::Unsave { id } => run_unsave(&storage, id),
        Command::Saved { json } => run_saved(&storage, &records, json).await,
        Command::ClearSaved => run_clear_saved(&storage),
        Command::Create { data } => run_create(&records, &data).await,
        Command::Update { id, data } => run_update(&records, id, &data).await,
        Command::Delete { id } => run_delete(&records, id).await,
    }
}

async fn run_list(storage: &FileStorage, records: &Records, args: &ListArgs) -> Result<(), CliError> {
    let mut state = ListingState::new(storage, args.search.as_deref());
    state.load(records.client()).await;

    if !args.filters.is_empty() {
        let criteria = args.filters.merge_into(&state.criteria);
        if !state.set_criteria(criteria) {
            eprintln!("warning: filters applied but not remembered");
        }
    }

    if args.json {
        return print_json(&state.visible);
    }

    let pills = state.active_filters();
    if !pills.is_empty() {
        let labels: Vec<_> = pills.into_iter().map(|pill| pill.label).collect();
        println!("Filters: {}", labels.join("; "));
    }
    println!("{} properties found", state.visible_count());

    let saved = SavedRegistry::new(storage);
    for property in &state.visible {
        println!("{}", render_row(property, saved.is_saved(property.id)));
    }
    Ok(())
}

fn run_clear_filters(storage: &FileStorage) -> Result<(), CliError> {
    let mut state = ListingState::new(storage, None);
    if !state.clear_filters() {
        return Err(CliError::NotPersisted("cleared filters"));
    }
    println!("Filters cleared");
    Ok(())
}

async fn run_show(storage: &FileStorage, records: &Records, id: i64) -> Result<(), CliError> {
    let property = records
        .client()
        .get_by_id(id)
        .await
        .ok_or(CliError::NotFound(id))?;
    let saved = SavedRegistry::new(storage).is_saved(id);
    println!("{}", render_detail(&property, saved));
    Ok(())
}

fn run_save(storage: &FileStorage, id: i64) -> Result<(), CliError> {
    let registry = SavedRegistry::new(storage);
    if registry.save(id) {
        println!("Saved #{id}");
    } else if registry.is_saved(id) {
        println!("#{id} is already saved");
    } else {
        return Err(CliError::NotPersisted("saved property"));
    }
    Ok(())
}

fn run_unsave(storage: &FileStorage, id: i64) -> Result<(), CliError> {
    if !SavedRegistry::new(storage).remove(id) {
        return Err(CliError::NotPersisted("saved properties"));
    }
    println!("Removed #{id} from saved properties");
    Ok(())
}

async fn run_saved(storage: &FileStorage, records: &Records, json: bool) -> Result<(), CliError> {
    let mut state = SavedState::new(storage);
    state.load(records.client()).await;

    if json {
        return print_json(&state.items);
    }
    let count = state.items.len();
    println!("{count} {} saved", if count == 1 { "property" } else { "properties" });
    for property in &state.items {
        println!("{}", render_row(property, true));
    }
    Ok(())
}

fn run_clear_saved(storage: &FileStorage) -> Result<(), CliError> {
    if !SavedRegistry::new(storage).clear_all() {
        return Err(CliError::NotPersisted("cleared saved properties"));
    }
    println!("All saved properties cleared");
    Ok(())
}

async fn run_create(records: &Records, data: &str) -> Result<(), CliError> {
    let draft: PropertyDraft = serde_json::from_str(data)?;
    let created = records
        .client()
        .create(draft)
        .await
        .ok_or(CliError::Rejected("create"))?;
    records.persist().await?;
    print_json(&created)
}

async fn run_update(records: &Records, id: i64, data: &str) -> Result<(), CliError> {
    let patch: PropertyPatch = serde_json::from_str(data)?;
    let updated = records
        .client()
        .update(id, patch)
        .await
        .ok_or(CliError::NotFound(id))?;
    records.persist().await?;
    print_json(&updated)
}

async fn run_delete(records: &Records, id: i64) -> Result<(), CliError> {
    if !records.client().delete(id).await {
        return Err(CliError::NotFound(id));
    }
    records.persist().await?;
    println!("Deleted #{id}");
    Ok(())
}

fn render_row(property: &Property, saved: bool) -> String {
    let marker = if saved { '*' } else { ' ' };
    format!(
        "{marker} #{} {} | {} | {} | {} | {} | {}",
        property.id,
        format_price(property.price),
        bedroom_text(property.bedrooms),
        bathroom_text(property.bathrooms),
        format_square_feet(property.square_feet),
        property.title,
        property.address,
    )
}

fn render_detail(property: &Property, saved: bool) -> String {
    let address = split_address(&property.address);
    let mut lines = vec![
        format!("{}{}", property.title, if saved { "  [saved]" } else { "" }),
        format!("{}  ({})", format_price(property.price), property.property_type),
        address.street,
    ];
    if !address.city_state.is_empty() {
        lines.push(address.city_state);
    }
    lines.push(format!(
        "{}, {}, {}",
        bedroom_text(property.bedrooms),
        bathroom_text(property.bathrooms),
        format_square_feet(property.square_feet)
    ));
    if let Some(year) = property.year_built {
        lines.push(format!("Built {year}"));
    }
    if !property.description.is_empty() {
        lines.push(String::new());
        lines.push(property.description.clone());
    }
    if !property.features.is_empty() {
        lines.push(format!("Features: {}", property.features.join(", ")));
    }
    if let Some(cover) = property.cover_image() {
        lines.push(format!("Photos: {} (cover {cover})", property.images.len()));
    }
    lines.join("\n")
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
