// Import result domain models

/// Raw answer from the dashboards API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResponse {
    pub status: u16,
    pub body: String,
}

impl ImportResponse {
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 202)
    }
}

/// What happened to a single dashboard file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported { file: String },
    Rejected { file: String, status: u16, body: String },
    Failed { file: String, reason: String },
}

impl ImportOutcome {
    pub fn from_response(file: String, response: ImportResponse) -> Self {
        if response.is_success() {
            ImportOutcome::Imported { file }
        } else {
            ImportOutcome::Rejected {
                file,
                status: response.status,
                body: response.body,
            }
        }
    }

    pub fn file(&self) -> &str {
        match self {
            ImportOutcome::Imported { file }
            | ImportOutcome::Rejected { file, .. }
            | ImportOutcome::Failed { file, .. } => file,
        }
    }

    pub fn is_imported(&self) -> bool {
        matches!(self, ImportOutcome::Imported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        assert!(ImportResponse::new(200, String::new()).is_success());
        assert!(ImportResponse::new(202, String::new()).is_success());
        assert!(!ImportResponse::new(201, String::new()).is_success());
        assert!(!ImportResponse::new(404, String::new()).is_success());
        assert!(!ImportResponse::new(500, String::new()).is_success());
    }

    #[test]
    fn test_rejection_keeps_status_and_body() {
        let outcome = ImportOutcome::from_response(
            "b.json".to_string(),
            ImportResponse::new(500, "quota exceeded".to_string()),
        );

        assert_eq!(
            outcome,
            ImportOutcome::Rejected {
                file: "b.json".to_string(),
                status: 500,
                body: "quota exceeded".to_string(),
            }
        );
        assert_eq!(outcome.file(), "b.json");
        assert!(!outcome.is_imported());
    }
}
