use serde::{Deserialize, Serialize};

/// Uniform response wrapper used by the SitePlus REST API.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
    #[serde(default)]
    pub total_count: i64,
}

/// Paged list payload carried inside an envelope's `data` field.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PagedData<T> {
    pub page: i32,
    pub total_page: i32,
    pub total_records: i64,
    pub list_data: Vec<T>,
}
