// Import service - Use case for pushing a directory of dashboards
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::{DashboardFile, ImportRequest};
use crate::domain::import::{ImportOutcome, ImportResponse};
use crate::infrastructure::error::ImportError;
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct ImportService {
    repository: Arc<dyn DashboardRepository>,
    folder_id: i64,
}

impl ImportService {
    pub fn new(repository: Arc<dyn DashboardRepository>, folder_id: i64) -> Self {
        Self {
            repository,
            folder_id,
        }
    }

    /// Import every `*.json` file directly inside `dir`, one at a time.
    ///
    /// `on_outcome` is called as soon as each file finishes. A failing file
    /// never stops the loop; only an unreadable directory or a failing
    /// `on_outcome` aborts the run.
    pub async fn import_directory<F>(
        &self,
        dir: &Path,
        mut on_outcome: F,
    ) -> anyhow::Result<Vec<ImportOutcome>>
    where
        F: FnMut(&ImportOutcome) -> anyhow::Result<()>,
    {
        let files = list_dashboard_files(dir).await?;
        tracing::debug!("Found {} dashboard files in {}", files.len(), dir.display());

        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            let outcome = self.import_file(&file).await;
            tracing::debug!("Finished {}", outcome.file());
            on_outcome(&outcome)?;
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Import a single dashboard file, folding every failure into the outcome
    pub async fn import_file(&self, file: &DashboardFile) -> ImportOutcome {
        match self.try_import(file).await {
            Ok(response) => ImportOutcome::from_response(file.name.clone(), response),
            Err(e) => {
                tracing::warn!("Import of {} failed: {}", file.path.display(), e);
                ImportOutcome::Failed {
                    file: file.name.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn try_import(&self, file: &DashboardFile) -> Result<ImportResponse, ImportError> {
        let content = tokio::fs::read_to_string(&file.path)
            .await
            .map_err(|source| ImportError::Read {
                path: file.path.clone(),
                source,
            })?;

        let dashboard: serde_json::Value =
            serde_json::from_str(&content).map_err(|source| ImportError::Parse {
                path: file.path.clone(),
                source,
            })?;

        let request = ImportRequest::new(dashboard, self.folder_id);
        self.repository.import_dashboard(&request).await
    }
}

/// Dashboard files directly inside `dir`, in directory listing order
async fn list_dashboard_files(dir: &Path) -> anyhow::Result<Vec<DashboardFile>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read dashboards directory {}", dir.display()))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to list dashboards directory {}", dir.display()))?
    {
        let name = entry.file_name();
        if !DashboardFile::is_dashboard_name(&name.to_string_lossy()) {
            continue;
        }

        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if is_dir {
            tracing::debug!("Skipping directory {}", entry.path().display());
            continue;
        }

        files.push(DashboardFile::new(entry.path()));
    }

    Ok(files)
}
