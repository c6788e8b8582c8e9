// ============================================================================
// SESSION GUARD - owns the authenticated-user state for the whole app
// ============================================================================
// Populated once from localStorage on mount, mutated by login/logout, and
// kept fresh by a 60-second expiry check on the stored token. Expired or
// undecodable tokens force a logout; nothing else may write these fields.
// ============================================================================

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::hooks::use_toast::{use_toast, ToastHandle};
use crate::models::auth::{LoginData, UserRole};
use crate::utils::constants::{
    SESSION_CHECK_INTERVAL_MS, SESSION_STORAGE_KEYS, STORAGE_KEY_EMAIL, STORAGE_KEY_NAME,
    STORAGE_KEY_ROLE, STORAGE_KEY_TOKEN, STORAGE_KEY_USER_ID, STORAGE_KEY_USER_NAME,
};
use crate::utils::{jwt, storage};

#[derive(Clone, PartialEq, Debug)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub role: Option<UserRole>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_id: Option<i64>,
    pub loading: bool,
}

impl AuthState {
    /// State before the storage read has happened; dependent UI must not
    /// render while this is the current state.
    pub fn booting() -> Self {
        Self {
            is_authenticated: false,
            role: None,
            user_name: None,
            user_email: None,
            user_id: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            loading: false,
            ..Self::booting()
        }
    }
}

/// What the periodic check concluded about the stored credential.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionVerdict {
    NoToken,
    Valid,
    Expired,
    Malformed,
}

/// Pure expiry decision: `exp` is in UNIX seconds, `now_ms` in milliseconds.
pub fn session_verdict(token: Option<&str>, now_ms: i64) -> SessionVerdict {
    let Some(token) = token else {
        return SessionVerdict::NoToken;
    };
    match jwt::decode_exp(token) {
        Ok(exp) => {
            if now_ms >= exp * 1000 {
                SessionVerdict::Expired
            } else {
                SessionVerdict::Valid
            }
        }
        Err(_) => SessionVerdict::Malformed,
    }
}

/// Context handle components consume. State is only writable through the
/// login/logout callbacks.
#[derive(Clone, PartialEq)]
pub struct AuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub login: Callback<LoginData>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("use_auth must be used within an AuthProvider")
}

/// Builds the session guard. Called exactly once, by the AuthProvider.
#[hook]
pub fn use_session_guard() -> AuthHandle {
    let state = use_state(AuthState::booting);
    let toast = use_toast();

    let logout = {
        let state = state.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            for key in SESSION_STORAGE_KEYS {
                let _ = storage::remove_item(key);
            }
            state.set(AuthState::signed_out());
            log::info!("👋 Logged out");
            toast.info("Logged out successfully");
        })
    };

    let login = {
        let state = state.clone();
        Callback::from(move |data: LoginData| {
            let _ = storage::set_item(STORAGE_KEY_TOKEN, &data.token);
            let _ = storage::set_item(STORAGE_KEY_ROLE, &data.role);
            let _ = storage::set_item(STORAGE_KEY_NAME, &data.name);
            let _ = storage::set_item(STORAGE_KEY_USER_NAME, &data.name);
            let _ = storage::set_item(STORAGE_KEY_EMAIL, &data.email);
            let _ = storage::set_item(STORAGE_KEY_USER_ID, &data.id.to_string());

            log::info!("✅ Logged in: {}", data.email);
            state.set(AuthState {
                is_authenticated: true,
                role: UserRole::parse(&data.role),
                user_name: Some(data.name.clone()),
                user_email: Some(data.email.clone()),
                user_id: Some(data.id),
                loading: false,
            });
        })
    };

    // Initialize from storage, once. Presence of a token is enough to be
    // considered authenticated here; only the periodic check below looks at
    // expiry, so a stale token survives until the first tick.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let token = storage::get_item(STORAGE_KEY_TOKEN);
            let role = storage::get_item(STORAGE_KEY_ROLE).and_then(|r| UserRole::parse(&r));
            let user_name = storage::get_item(STORAGE_KEY_NAME);
            let user_email = storage::get_item(STORAGE_KEY_EMAIL);
            let user_id =
                storage::get_item(STORAGE_KEY_USER_ID).and_then(|raw| raw.parse::<i64>().ok());

            state.set(AuthState {
                is_authenticated: token.is_some(),
                role,
                user_name,
                user_email,
                user_id,
                loading: false,
            });
            || ()
        });
    }

    // Expiry check: immediately on activation, then every 60 seconds until
    // the provider is torn down.
    {
        let logout = logout.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            let check = move || {
                check_token_expiry(&toast, &logout);
            };
            check();
            let interval = Interval::new(SESSION_CHECK_INTERVAL_MS, check);
            move || drop(interval)
        });
    }

    AuthHandle {
        state,
        login,
        logout,
    }
}

fn check_token_expiry(toast: &ToastHandle, logout: &Callback<()>) {
    let token = storage::get_item(STORAGE_KEY_TOKEN);
    match session_verdict(token.as_deref(), chrono::Utc::now().timestamp_millis()) {
        SessionVerdict::Expired => {
            toast.warning("Your session has expired. Please log in again to continue.");
            logout.emit(());
        }
        SessionVerdict::Malformed => {
            // Undecodable is treated exactly like expired, minus the warning
            log::error!("Token decode error, forcing logout");
            logout.emit(());
        }
        SessionVerdict::Valid | SessionVerdict::NoToken => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};

    fn token_with_exp(exp: i64) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp));
        format!("{}.{}.sig", header, payload)
    }

    #[test]
    fn missing_token_is_a_no_op() {
        assert_eq!(session_verdict(None, 1_700_000_000_000), SessionVerdict::NoToken);
    }

    #[test]
    fn token_expired_in_the_past_forces_logout() {
        let token = token_with_exp(1_700_000_000);
        let one_hour_later_ms = (1_700_000_000 + 3_600) * 1000;
        assert_eq!(
            session_verdict(Some(&token), one_hour_later_ms),
            SessionVerdict::Expired
        );
    }

    #[test]
    fn exactly_at_expiry_counts_as_expired() {
        let token = token_with_exp(1_700_000_000);
        assert_eq!(
            session_verdict(Some(&token), 1_700_000_000 * 1000),
            SessionVerdict::Expired
        );
    }

    #[test]
    fn future_expiry_is_valid() {
        let token = token_with_exp(1_700_000_000);
        assert_eq!(
            session_verdict(Some(&token), (1_700_000_000 - 60) * 1000),
            SessionVerdict::Valid
        );
    }

    #[test]
    fn malformed_token_is_fatal_but_does_not_panic() {
        assert_eq!(
            session_verdict(Some("garbage"), 0),
            SessionVerdict::Malformed
        );
        assert_eq!(
            session_verdict(Some("a.!!!.c"), 0),
            SessionVerdict::Malformed
        );
    }

    #[test]
    fn signed_out_state_is_idempotent() {
        // Logout twice in a row lands on the identical cleared state
        let once = AuthState::signed_out();
        let twice = AuthState::signed_out();
        assert_eq!(once, twice);
        assert!(!once.is_authenticated);
        assert!(once.role.is_none());
        assert!(once.user_id.is_none());
        assert!(!once.loading);
    }
}
