// ============================================================================
// MANAGER SERVICE - authenticated REST calls for the triage workflows
// ============================================================================
// Stateless; every call reads the bearer credential from localStorage.
// Failures come back as Err(String) ready to be shown in a toast.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use std::collections::HashSet;

use crate::config::CONFIG;
use crate::models::{ApiEnvelope, BrandRequest, PagedData, User};
use crate::services::endpoints;
use crate::utils::constants::STORAGE_KEY_TOKEN;
use crate::utils::storage;

fn bearer_token() -> Result<String, String> {
    storage::get_item(STORAGE_KEY_TOKEN)
        .ok_or_else(|| "Bạn chưa đăng nhập hoặc phiên làm việc đã hết hạn".to_string())
}

fn with_auth(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder
        .header("Authorization", &format!("Bearer {}", token))
        .header("accept", "*/*")
}

/// A 401 evicts the stored credential; the session guard picks the rest up.
fn check_status(response: &Response) -> Result<(), String> {
    if response.status() == 401 {
        let _ = storage::remove_item(STORAGE_KEY_TOKEN);
        return Err("Phiên đăng nhập hết hạn, vui lòng đăng nhập lại".to_string());
    }
    if !response.ok() {
        return Err(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        ));
    }
    Ok(())
}

// --- brand requests ---------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrandRequestDto {
    id: i64,
    brand_id: i64,
    brand_name: String,
    email_customer: String,
    description: String,
    status: i32,
    status_name: String,
    created_at: String,
    updated_at: String,
    brand_status: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreProfileDto {
    store_profile_category_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrandRequestRow {
    brand_request: BrandRequestDto,
    #[serde(default)]
    store_profile: Option<StoreProfileDto>,
}

/// Fetch the full brand-request list (backend page size is large enough
/// that a single page covers it) and flatten it for the table.
pub async fn fetch_brand_requests() -> Result<Vec<BrandRequest>, String> {
    let token = bearer_token()?;
    let url = format!(
        "{}{}?page=1&pageSize=1000",
        CONFIG.api_base_url(),
        endpoints::GET_BRAND_REQUESTS
    );

    let response = with_auth(Request::get(&url), &token)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    check_status(&response)?;

    let envelope = response
        .json::<ApiEnvelope<Vec<BrandRequestRow>>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !envelope.success {
        return Err(envelope
            .message
            .unwrap_or_else(|| "Lỗi khi tải danh sách yêu cầu thương hiệu".to_string()));
    }

    // The backend occasionally repeats rows across pages; keep the first
    // occurrence of each id.
    let mut seen = HashSet::new();
    let requests: Vec<BrandRequest> = envelope
        .data
        .into_iter()
        .filter(|row| seen.insert(row.brand_request.id))
        .map(|row| {
            let category = row
                .store_profile
                .and_then(|p| p.store_profile_category_name)
                .unwrap_or_else(|| "Không xác định".to_string());
            let dto = row.brand_request;
            BrandRequest {
                id: dto.id.to_string(),
                brand: dto.brand_name,
                email: dto.email_customer,
                description: dto.description,
                status: dto.status,
                status_name: dto.status_name,
                created_at: dto.created_at,
                updated_at: dto.updated_at,
                store_profile_category_name: category,
                brand_status: dto.brand_status,
                brand_id: dto.brand_id,
            }
        })
        .collect();

    log::info!("✅ Fetched {} brand requests", requests.len());
    Ok(requests)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusUpdateResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Persist a new status (plus the current timestamp) for one request.
pub async fn update_brand_request_status(request_id: i64, status: i32) -> Result<(), String> {
    let token = bearer_token()?;
    let endpoint = endpoints::UPDATE_BRAND_REQUEST_STATUS.replace(":id", &request_id.to_string());
    let url = format!("{}{}", CONFIG.api_base_url(), endpoint);
    let body = serde_json::json!({
        "status": status,
        "updateAt": chrono::Utc::now().to_rfc3339(),
    });

    log::info!(
        "📝 Updating request {} to status {}",
        request_id,
        status
    );

    let response = with_auth(Request::put(&url), &token)
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    check_status(&response)?;

    let result = response
        .json::<StatusUpdateResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.success {
        Ok(())
    } else {
        Err(result.message.unwrap_or_else(|| "Không xác định".to_string()))
    }
}

/// Promote (or demote) the owning brand's status.
pub async fn update_brand_status(brand_id: i64, status: i32) -> Result<(), String> {
    let token = bearer_token()?;
    let endpoint = endpoints::UPDATE_BRAND_STATUS.replace(":id", &brand_id.to_string());
    let url = format!("{}{}", CONFIG.api_base_url(), endpoint);
    let body = serde_json::json!({ "status": status });

    log::info!("📝 Updating brand {} to status {}", brand_id, status);

    let response = with_auth(Request::put(&url), &token)
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    check_status(&response)?;

    let result = response
        .json::<StatusUpdateResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.success {
        Ok(())
    } else {
        Err(result.message.unwrap_or_else(|| "Không xác định".to_string()))
    }
}

// --- notification emails ----------------------------------------------------

async fn send_notification_email(path: &str, request_id: i64, note: &str) -> Result<(), String> {
    let token = bearer_token()?;
    let url = format!("{}{}", CONFIG.api_base_url(), path);
    let body = serde_json::json!({ "id": request_id, "note": note });

    let response = with_auth(Request::post(&url), &token)
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    check_status(&response)?;

    let result = response
        .json::<StatusUpdateResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.success {
        Ok(())
    } else {
        Err(result.message.unwrap_or_else(|| "Không xác định".to_string()))
    }
}

pub async fn send_accept_email(request_id: i64, note: &str) -> Result<(), String> {
    log::info!("📧 Sending acceptance email for request {}", request_id);
    send_notification_email(endpoints::SEND_ACCEPT_EMAIL, request_id, note).await
}

pub async fn send_reject_email(request_id: i64, note: &str) -> Result<(), String> {
    log::info!("📧 Sending rejection email for request {}", request_id);
    send_notification_email(endpoints::SEND_REJECT_EMAIL, request_id, note).await
}

// --- users ------------------------------------------------------------------

/// Fetch every user page by page and de-duplicate by id.
pub async fn fetch_users() -> Result<Vec<User>, String> {
    let token = bearer_token()?;
    let mut users: Vec<User> = Vec::new();
    let mut seen = HashSet::new();
    let mut page = 1;

    loop {
        let url = format!(
            "{}{}?page={}&pageSize=1000",
            CONFIG.api_base_url(),
            endpoints::GET_USERS,
            page
        );

        let response = with_auth(Request::get(&url), &token)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        check_status(&response)?;

        let envelope = response
            .json::<ApiEnvelope<PagedData<User>>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if !envelope.success {
            return Err(envelope
                .message
                .unwrap_or_else(|| "Lỗi khi tải danh sách nhân viên".to_string()));
        }

        let total_pages = envelope.data.total_page;
        for user in envelope.data.list_data {
            if seen.insert(user.id) {
                users.push(user);
            }
        }

        if page >= total_pages {
            break;
        }
        page += 1;
    }

    log::info!("✅ Fetched {} unique users", users.len());
    Ok(users)
}
