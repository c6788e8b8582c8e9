// ============================================================================
// CONSTANTS - storage keys, page sizes, session timing, default notes
// ============================================================================

/// localStorage keys for the persisted session.
/// All six are written on login and cleared together on logout.
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_ROLE: &str = "role";
pub const STORAGE_KEY_NAME: &str = "name";
pub const STORAGE_KEY_USER_NAME: &str = "userName";
pub const STORAGE_KEY_EMAIL: &str = "email";
/// Numeric user id, stored under a deliberately non-obvious key
pub const STORAGE_KEY_USER_ID: &str = "hint";

/// Every persisted session key, in the order logout clears them
pub const SESSION_STORAGE_KEYS: [&str; 6] = [
    STORAGE_KEY_TOKEN,
    STORAGE_KEY_ROLE,
    STORAGE_KEY_NAME,
    STORAGE_KEY_USER_NAME,
    STORAGE_KEY_EMAIL,
    STORAGE_KEY_USER_ID,
];

/// How often the session guard re-checks the token expiry
pub const SESSION_CHECK_INTERVAL_MS: u32 = 60_000;

/// Page size of the main brand-request table
pub const REQUESTS_PER_PAGE: usize = 10;
/// Page size of the secondary district/user tables
pub const USERS_PER_PAGE: usize = 5;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Note sent with the acceptance notification email
pub const ACCEPT_EMAIL_NOTE: &str =
    "Chúng tôi sẽ sớm liên hệ để hỗ trợ bạn với các bước tiếp theo.";

/// Pre-filled rejection note, editable by the manager before sending
pub const DEFAULT_REJECT_REASON: &str =
    "Rất tiếc, yêu cầu của bạn không đáp ứng được các tiêu chí hiện tại của chúng tôi.";
