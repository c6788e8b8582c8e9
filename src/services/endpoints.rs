// REST endpoint paths. Collaborator-owned; `:id`-style segments are
// substituted at the call site.

pub const LOGIN: &str = "/api/Auth/login";

pub const GET_BRAND_REQUESTS: &str = "/api/BrandRequest";
pub const UPDATE_BRAND_REQUEST_STATUS: &str = "/api/BrandRequest/UpdateStatus/:id";
pub const UPDATE_BRAND_STATUS: &str = "/api/Brand/StatusBrand/:id";

pub const SEND_ACCEPT_EMAIL: &str = "/api/Email/AcceptBrandRequest";
pub const SEND_REJECT_EMAIL: &str = "/api/Email/RejectBrandRequest";

pub const GET_USERS: &str = "/api/User";
