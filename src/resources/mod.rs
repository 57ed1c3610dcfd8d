/// Read-only resources exposed by the directory
/// 
/// Each resource is a fixed URI rendering part of the store (or process
/// metadata) as text. Contents are computed on every read.

pub mod status;

pub use status::*;

use crate::storage::{DirectoryStorage, StorageError};

/// URI of the full user listing
pub const USERS_URI: &str = "users://all";
/// URI of the full project listing
pub const PROJECTS_URI: &str = "projects://all";
/// URI of the process status report
pub const STATUS_URI: &str = "system://status";

/// Content type tag for the JSON listings
pub const JSON_MIME_TYPE: &str = "application/json";
/// Content type tag for the status report
pub const TEXT_MIME_TYPE: &str = "text/plain";

/// Rendered contents of one resource read
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceText {
    pub mime_type: &'static str,
    pub text: String,
}

/// Render every user as pretty-printed JSON
pub fn read_users<S: DirectoryStorage>(storage: &S) -> Result<ResourceText, StorageError> {
    Ok(ResourceText {
        mime_type: JSON_MIME_TYPE,
        text: serde_json::to_string_pretty(&storage.list_users())?,
    })
}

/// Render every project as pretty-printed JSON
pub fn read_projects<S: DirectoryStorage>(storage: &S) -> Result<ResourceText, StorageError> {
    Ok(ResourceText {
        mime_type: JSON_MIME_TYPE,
        text: serde_json::to_string_pretty(&storage.list_projects(None))?,
    })
}

/// Render the status report from fresh process metadata
pub fn read_status<S: DirectoryStorage>(
    storage: &S,
    clock: &dyn ProcessClock,
) -> Result<ResourceText, StorageError> {
    let report = StatusReport::collect(storage, clock);
    
    Ok(ResourceText {
        mime_type: TEXT_MIME_TYPE,
        text: report.to_string(),
    })
}
