// Dashboard domain model
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DASHBOARD_SUFFIX: &str = ".json";

/// A dashboard definition file found in the import directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardFile {
    pub path: PathBuf,
    pub name: String,
}

impl DashboardFile {
    pub fn new(path: PathBuf) -> Self {
        let name = Self::base_name(&path);
        Self { path, name }
    }

    /// True when the file name ends with `.json` (case-sensitive)
    pub fn is_dashboard_name(file_name: &str) -> bool {
        file_name.ends_with(DASHBOARD_SUFFIX)
    }

    fn base_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned())
    }
}

/// Payload for `POST /api/dashboards/db`
#[derive(Debug, Clone, Serialize)]
pub struct ImportRequest {
    pub dashboard: serde_json::Value,
    #[serde(rename = "folderId")]
    pub folder_id: i64,
    pub overwrite: bool,
}

impl ImportRequest {
    pub fn new(dashboard: serde_json::Value, folder_id: i64) -> Self {
        Self {
            dashboard,
            folder_id,
            overwrite: true,
        }
    }
}
