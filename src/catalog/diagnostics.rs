//! Store diagnostics probe

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::StoreConfig;
use crate::error::{truncate_chars, MAX_DIAGNOSTIC_CHARS};
use crate::store::{DocumentStore, StoreStatus};

/// Most collection names reported by the probe
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Snapshot of store connectivity. Never carries raw connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn set_indicator(present: bool) -> String {
    let text = if present { "Set" } else { "Not Set" };
    text.to_string()
}

/// Probe the store. Each field is filled independently; a failing
/// sub-check only changes its own text.
pub async fn probe(store: &dyn DocumentStore, config: &StoreConfig) -> Diagnostics {
    let mut diagnostics = Diagnostics {
        backend: "Running".to_string(),
        database: "Not Available".to_string(),
        database_url: set_indicator(config.url().is_some()),
        database_name: set_indicator(config.name().is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match store.status() {
        StoreStatus::Available { .. } => {
            diagnostics.database = "Available".to_string();
            diagnostics.connection_status = "Connected".to_string();

            match store.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_REPORTED_COLLECTIONS);
                    diagnostics.collections = names;
                    diagnostics.database = "Connected & Working".to_string();
                }
                Err(e) => {
                    warn!(error = %e, "Diagnostics could not list collections");
                    diagnostics.database = format!(
                        "Connected but Error: {}",
                        truncate_chars(&e.to_string(), MAX_DIAGNOSTIC_CHARS)
                    );
                }
            }
        }
        StoreStatus::Unavailable { reason } if config.is_configured() => {
            diagnostics.database =
                format!("Error: {}", truncate_chars(&reason, MAX_DIAGNOSTIC_CHARS));
        }
        StoreStatus::Unavailable { .. } => {}
    }

    diagnostics
}
