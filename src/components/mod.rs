pub mod admin_page;
pub mod app;
pub mod area_manager_page;
pub mod confirm_dialog;
pub mod home_page;
pub mod login_screen;
pub mod manager_page;
pub mod pagination;
pub mod request_table;
pub mod sidebar;
pub mod toast_host;
pub mod user_management;

pub use admin_page::AdminPage;
pub use app::App;
pub use area_manager_page::AreaManagerPage;
pub use confirm_dialog::ConfirmDialog;
pub use home_page::HomePage;
pub use login_screen::LoginScreen;
pub use manager_page::ManagerPage;
pub use pagination::Pagination;
pub use request_table::RequestTable;
pub use sidebar::{NavItem, Sidebar};
pub use toast_host::ToastProvider;
pub use user_management::UserManagement;
