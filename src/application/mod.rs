// Application layer - Import use case and repository seam
pub mod dashboard_repository;
pub mod import_service;
