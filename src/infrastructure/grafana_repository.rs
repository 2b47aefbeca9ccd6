// Grafana HTTP API repository implementation
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::ImportRequest;
use crate::domain::import::ImportResponse;
use crate::infrastructure::config::ImporterConfig;
use crate::infrastructure::error::ImportError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

const DASHBOARDS_DB_PATH: &str = "/api/dashboards/db";

#[derive(Debug, Clone)]
pub struct GrafanaRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GrafanaRepository {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn from_config(config: &ImporterConfig) -> Self {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    fn dashboards_url(&self) -> String {
        format!("{}{}", self.base_url, DASHBOARDS_DB_PATH)
    }
}

#[async_trait]
impl DashboardRepository for GrafanaRepository {
    async fn import_dashboard(&self, request: &ImportRequest) -> Result<ImportResponse, ImportError> {
        let url = self.dashboards_url();
        tracing::debug!("POST {} (folderId={})", url, request.folder_id);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!("Grafana answered {} ({} bytes)", status, body.len());
        Ok(ImportResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_dashboards_url_trims_slash() {
        let repo = GrafanaRepository::new("https://example.grafana.net/".to_string(), "k".to_string());
        assert_eq!(repo.dashboards_url(), "https://example.grafana.net/api/dashboards/db");
    }

    #[tokio::test]
    async fn test_import_sends_payload_and_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/dashboards/db"))
            .and(header("Authorization", "Bearer test_key"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({
                "dashboard": {"title": "Nodes", "panels": []},
                "folderId": 3,
                "overwrite": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let repo = GrafanaRepository::new(mock_server.uri(), "test_key".to_string());
        let request = ImportRequest::new(serde_json::json!({"title": "Nodes", "panels": []}), 3);
        let response = repo.import_dashboard(&request).await.unwrap();

        assert_eq!(response.status, 200);
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/dashboards/db"))
            .respond_with(ResponseTemplate::new(404).set_body_string("folder not found"))
            .mount(&mock_server)
            .await;

        let repo = GrafanaRepository::new(mock_server.uri(), "test_key".to_string());
        let request = ImportRequest::new(serde_json::json!({}), 0);
        let response = repo.import_dashboard(&request).await.unwrap();

        assert_eq!(response, ImportResponse::new(404, "folder not found".to_string()));
    }

    #[tokio::test]
    async fn test_connection_failure_is_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let repo = GrafanaRepository::new(format!("http://127.0.0.1:{}", port), "test_key".to_string());
        let request = ImportRequest::new(serde_json::json!({}), 0);

        let err = repo.import_dashboard(&request).await.unwrap_err();
        assert!(matches!(err, ImportError::Request(_)));
    }
}
