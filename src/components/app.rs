use yew::prelude::*;

use crate::components::admin_page::AdminPage;
use crate::components::area_manager_page::AreaManagerPage;
use crate::components::home_page::HomePage;
use crate::components::login_screen::LoginScreen;
use crate::components::manager_page::ManagerPage;
use crate::components::toast_host::ToastProvider;
use crate::hooks::auth_context::AuthProvider;
use crate::hooks::use_auth;
use crate::models::auth::UserRole;

/// Root component: providers on the outside, role routing on the inside.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
        </ToastProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let auth = use_auth();

    // Storage has not been read yet; rendering anything would flash the
    // login screen at an already-authenticated user.
    if auth.state.loading {
        return Html::default();
    }

    if !auth.state.is_authenticated {
        return html! { <LoginScreen /> };
    }

    match auth.state.role {
        Some(UserRole::Manager) => html! { <ManagerPage /> },
        Some(UserRole::Admin) => html! { <AdminPage /> },
        Some(UserRole::AreaManager) => html! { <AreaManagerPage /> },
        Some(UserRole::Customer) | None => html! { <HomePage /> },
    }
}
