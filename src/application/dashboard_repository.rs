// Repository trait for the remote dashboards API
use crate::domain::dashboard::ImportRequest;
use crate::domain::import::ImportResponse;
use crate::infrastructure::error::ImportError;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Create or overwrite a dashboard. Non-success statuses are returned
    /// as a response, only transport failures are errors.
    async fn import_dashboard(&self, request: &ImportRequest) -> Result<ImportResponse, ImportError>;
}
