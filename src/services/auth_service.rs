use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::auth::{LoginData, LoginRequest};
use crate::models::ApiEnvelope;
use crate::services::endpoints;

/// Perform login with email and password.
/// On success the caller persists the returned `LoginData` and populates
/// the auth context; this function only talks to the backend.
pub async fn perform_login(email: &str, password: &str) -> Result<LoginData, String> {
    let url = format!("{}{}", CONFIG.api_base_url(), endpoints::LOGIN);
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Logging in: {}", email);

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        ));
    }

    let envelope = response
        .json::<ApiEnvelope<Option<LoginData>>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !envelope.success {
        return Err(envelope
            .message
            .unwrap_or_else(|| "Email hoặc mật khẩu không đúng".to_string()));
    }

    envelope
        .data
        .ok_or_else(|| "Phản hồi đăng nhập không hợp lệ".to_string())
}
