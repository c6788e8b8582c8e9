use yew::prelude::*;

use crate::components::sidebar::{NavItem, Sidebar};
use crate::components::user_management::UserManagement;
use crate::hooks::use_auth;

/// Area-manager dashboard: the staff roster scoped to the manager's area.
/// Scoping happens server-side from the bearer token, so the page reuses
/// the shared roster component as-is.
#[function_component(AreaManagerPage)]
pub fn area_manager_page() -> Html {
    let auth = use_auth();
    let section = use_state(|| 0usize);

    let items = vec![NavItem {
        label: AttrValue::Static("Nhân viên khu vực"),
    }];

    let on_select = {
        let section = section.clone();
        Callback::from(move |index: usize| section.set(index))
    };

    html! {
        <div class="page-layout">
            <Sidebar
                title="Quản lý khu vực"
                items={items}
                active={*section}
                on_select={on_select}
                on_logout={auth.logout.clone()}
            />
            <main class="page-content">
                <UserManagement />
            </main>
        </div>
    }
}
