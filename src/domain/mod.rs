// Domain layer - Dashboard files and import results
pub mod dashboard;
pub mod import;
