use serde::{Deserialize, Serialize};

/// Area-staff row shown in the secondary management table.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role_name: String,
    #[serde(default)]
    pub district_name: String,
    #[serde(default)]
    pub city_name: String,
    pub status: i32,
    pub status_name: String,
    #[serde(default)]
    pub created_at: String,
}

impl User {
    /// Label the working-status toggle flips to
    pub fn toggled_status_name(&self) -> &'static str {
        if self.status_name == "Đang làm" {
            "Tạm dừng"
        } else {
            "Đang làm"
        }
    }
}
