use yew::prelude::*;

use crate::components::sidebar::{NavItem, Sidebar};
use crate::components::user_management::UserManagement;
use crate::hooks::use_auth;

/// Admin dashboard. Account administration only; triage belongs to the
/// manager role.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let auth = use_auth();
    let section = use_state(|| 0usize);

    let items = vec![NavItem {
        label: AttrValue::Static("Tài khoản"),
    }];

    let on_select = {
        let section = section.clone();
        Callback::from(move |index: usize| section.set(index))
    };

    html! {
        <div class="page-layout">
            <Sidebar
                title="Quản trị viên"
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
