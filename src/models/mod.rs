pub mod auth;
pub mod envelope;
pub mod request;
pub mod user;

pub use auth::{LoginData, UserRole};
pub use envelope::{ApiEnvelope, PagedData};
pub use request::{BrandRequest, RequestTab, TriageAction};
pub use user::User;
