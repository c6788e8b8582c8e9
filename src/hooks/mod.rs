pub mod auth_context;
pub mod use_auth;
pub mod use_toast;

pub use auth_context::AuthProvider;
pub use use_auth::{use_auth, AuthHandle, AuthState};
pub use use_toast::{use_toast, Toast, ToastHandle, ToastLevel};
