use yew::prelude::*;

use crate::components::request_table::RequestTable;
use crate::components::sidebar::{NavItem, Sidebar};
use crate::components::user_management::UserManagement;
use crate::hooks::use_auth;

/// Manager dashboard: staff roster and the request triage table, switched
/// by the sidebar.
#[function_component(ManagerPage)]
pub fn manager_page() -> Html {
    let auth = use_auth();
    let section = use_state(|| 0usize);

    let items = vec![
        NavItem {
            label: AttrValue::Static("Nhân viên"),
        },
        NavItem {
            label: AttrValue::Static("Yêu cầu khảo sát"),
        },
    ];

    let on_select = {
        let section = section.clone();
        Callback::from(move |index: usize| section.set(index))
    };

    let user_name = auth
        .state
        .user_name
        .clone()
        .unwrap_or_else(|| "Quản lý".to_string());

    html! {
        <div class="page-layout">
            <Sidebar
                title="Quản lý"
                items={items}
                active={*section}
                on_select={on_select}
                on_logout={auth.logout.clone()}
            />
            <main class="page-content">
                <header class="page-header">
                    <h1>{format!("Xin chào, {}", user_name)}</h1>
                </header>
                {
                    match *section {
                        1 => html! { <RequestTable /> },
                        _ => html! { <UserManagement /> },
                    }
                }
            </main>
        </div>
    }
}
