use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::hooks::use_toast;
use crate::models::user::User;
use crate::services::manager_service;
use crate::utils::constants::USERS_PER_PAGE;
use crate::utils::pagination::{page_slice, total_pages};
use crate::utils::CancelToken;

/// Staff roster: paged list of accounts with an activate/suspend toggle.
/// The toggle is confirmed, then applied to the local row; the account
/// endpoints do the actual persistence server-side.
#[function_component(UserManagement)]
pub fn user_management() -> Html {
    let toast = use_toast();
    let users = use_state(Vec::<User>::new);
    let current_page = use_state(|| 1usize);
    let is_fetching = use_state(|| true);
    let toggle_target = use_state(|| Option::<i64>::None);

    let cancel = use_memo((), |_| CancelToken::new());

    {
        let cancel = cancel.clone();
        use_effect_with((), move |_| {
            move || (*cancel).cancel()
        });
    }

    {
        let users = users.clone();
        let is_fetching = is_fetching.clone();
        let toast = toast.clone();
        let cancel = cancel.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let fetched = manager_service::fetch_users().await;
                if cancel.is_cancelled() {
                    return;
                }
                match fetched {
                    Ok(rows) => {
                        log::info!("👥 Loaded {} users", rows.len());
                        users.set(rows);
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load users: {}", e);
                        toast.error(format!("Không thể tải danh sách nhân viên: {}", e));
                    }
                }
                is_fetching.set(false);
            });
        });
    }

    let on_request_toggle = {
        let toggle_target = toggle_target.clone();
        Callback::from(move |user_id: i64| toggle_target.set(Some(user_id)))
    };

    let on_cancel_toggle = {
        let toggle_target = toggle_target.clone();
        Callback::from(move |_| toggle_target.set(None))
    };

    let on_confirm_toggle = {
        let users = users.clone();
        let toggle_target = toggle_target.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let Some(user_id) = *toggle_target else {
                return;
            };
            let mut rows = (*users).clone();
            if let Some(user) = rows.iter_mut().find(|u| u.id == user_id) {
                let flipped = user.toggled_status_name();
                user.status = if user.status == 1 { 0 } else { 1 };
                user.status_name = flipped.to_string();
                toast.success(format!("Đã cập nhật trạng thái của {}", user.name));
            }
            users.set(rows);
            toggle_target.set(None);
        })
    };

    let on_page_change = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| current_page.set(page))
    };

    let pages = total_pages(users.len(), USERS_PER_PAGE);
    let visible = page_slice(&users, *current_page, USERS_PER_PAGE);

    html! {
        <div class="user-management">
            <h2 class="section-title">{"Quản lý nhân viên"}</h2>

            if *is_fetching {
                <div class="loading-state">{"Đang tải dữ liệu..."}</div>
            } else if users.is_empty() {
                <div class="empty-state">{"Không có nhân viên nào"}</div>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Tên"}</th>
                            <th>{"Khu vực"}</th>
                            <th>{"Số điện thoại"}</th>
                            <th>{"Email"}</th>
                            <th>{"Trạng thái"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().map(|user| {
                            let on_request_toggle = on_request_toggle.clone();
                            let user_id = user.id;
                            let onclick =
                                Callback::from(move |_: MouseEvent| on_request_toggle.emit(user_id));
                            let badge_class = if user.status == 1 {
                                "status-badge status-active"
                            } else {
                                "status-badge status-paused"
                            };
                            html! {
                                <tr key={user.id}>
                                    <td>{user.name.clone()}</td>
                                    <td>{format!("{}, {}", user.district_name, user.city_name)}</td>
                                    <td>{user.phone.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>
                                        <button class={badge_class} {onclick}>
                                            {user.status_name.clone()}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>

                <Pagination
                    page={*current_page}
                    total_pages={pages}
                    item_count={users.len()}
                    page_size={USERS_PER_PAGE}
                    on_change={on_page_change}
                />
            }

            <ConfirmDialog
                open={toggle_target.is_some()}
                title="Thay đổi trạng thái nhân viên"
                on_confirm={on_confirm_toggle}
                on_cancel={on_cancel_toggle}
            >
                <p>{"Bạn có chắc muốn thay đổi trạng thái làm việc của nhân viên này?"}</p>
            </ConfirmDialog>
        </div>
    }
}
