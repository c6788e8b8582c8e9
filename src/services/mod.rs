pub mod auth_service;
pub mod endpoints;
pub mod manager_service;
pub mod triage;

pub use auth_service::*;
pub use manager_service::*;
pub use triage::{apply_update, run_triage, ApiGateway, RequestUpdate, TriageOutcome};
