use serde::{Deserialize, Serialize};

/// Closed set of roles the backend issues.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UserRole {
    Customer,
    Admin,
    Manager,
    AreaManager,
}

impl UserRole {
    /// Role string as the backend and localStorage carry it
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "Customer",
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::AreaManager => "Area-Manager",
        }
    }

    pub fn parse(value: &str) -> Option<UserRole> {
        match value {
            "Customer" => Some(UserRole::Customer),
            "Admin" => Some(UserRole::Admin),
            "Manager" => Some(UserRole::Manager),
            "Area-Manager" => Some(UserRole::AreaManager),
            _ => None,
        }
    }
}

/// Payload returned by a successful login, persisted to localStorage
/// and loaded into the auth context.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    pub role: String,
    pub name: String,
    pub email: String,
    pub id: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_its_wire_string() {
        for role in [
            UserRole::Customer,
            UserRole::Admin,
            UserRole::Manager,
            UserRole::AreaManager,
        ] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn unknown_role_string_is_rejected() {
        assert_eq!(UserRole::parse("Super-Admin"), None);
        assert_eq!(UserRole::parse(""), None);
    }
}
