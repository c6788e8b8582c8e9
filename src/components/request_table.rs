// ============================================================================
// REQUEST TABLE - the manager's triage screen
// ============================================================================
// Three tabs over one in-memory collection, confirm dialogs in front of every
// transition, and a single in-flight flag that serializes actions. All remote
// sequencing lives in services::triage; this component only snapshots the row,
// runs the machine, applies the committed update, and resets its dialog state
// unconditionally afterwards.
// ============================================================================

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::hooks::use_toast;
use crate::models::request::{filtered_requests, BrandRequest, RequestTab, TriageAction};
use crate::services::manager_service;
use crate::services::triage::{apply_update, run_triage, ApiGateway, TriageOutcome};
use crate::utils::constants::{DEFAULT_REJECT_REASON, REQUESTS_PER_PAGE};
use crate::utils::pagination::{page_slice, total_pages};
use crate::utils::CancelToken;

const TABS: [RequestTab; 3] = [RequestTab::New, RequestTab::Processed, RequestTab::Closed];

#[function_component(RequestTable)]
pub fn request_table() -> Html {
    let toast = use_toast();
    let requests = use_state(Vec::<BrandRequest>::new);
    let active_tab = use_state(|| RequestTab::New);
    let current_page = use_state(|| 1usize);
    let is_loading = use_state(|| false);
    let is_fetching = use_state(|| true);

    // Pending confirmation: which action on which request
    let dialog_action = use_state(|| Option::<TriageAction>::None);
    let dialog_request_id = use_state(|| Option::<String>::None);
    let reject_open = use_state(|| false);
    let reject_reason = use_state(|| DEFAULT_REJECT_REASON.to_string());
    let details_for = use_state(|| Option::<BrandRequest>::None);

    // One token for the view's lifetime; cancelled on unmount so late
    // responses never write into a dead component.
    let cancel = use_memo((), |_| CancelToken::new());

    {
        let cancel = cancel.clone();
        use_effect_with((), move |_| {
            move || (*cancel).cancel()
        });
    }

    // Initial fetch
    {
        let requests = requests.clone();
        let is_fetching = is_fetching.clone();
        let toast = toast.clone();
        let cancel = cancel.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let fetched = manager_service::fetch_brand_requests().await;
                if cancel.is_cancelled() {
                    return;
                }
                match fetched {
                    Ok(rows) => {
                        log::info!("📋 Loaded {} brand requests", rows.len());
                        requests.set(rows);
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load brand requests: {}", e);
                        toast.error(format!("Không thể tải danh sách yêu cầu: {}", e));
                    }
                }
                is_fetching.set(false);
            });
        });
    }

    let close_dialogs = {
        let dialog_action = dialog_action.clone();
        let dialog_request_id = dialog_request_id.clone();
        let reject_open = reject_open.clone();
        let reject_reason = reject_reason.clone();
        move || {
            dialog_action.set(None);
            dialog_request_id.set(None);
            reject_open.set(false);
            reject_reason.set(DEFAULT_REJECT_REASON.to_string());
        }
    };

    // Run one confirmed transition. The in-flight flag keeps this
    // single-flight; dialog state resets no matter how the run ends.
    let process_action = {
        let requests = requests.clone();
        let is_loading = is_loading.clone();
        let toast = toast.clone();
        let cancel = cancel.clone();
        let close_dialogs = close_dialogs.clone();
        Callback::from(move |(request_id, action, note): (String, TriageAction, String)| {
            if *is_loading {
                return;
            }
            let Some(request) = (*requests).iter().find(|r| r.id == request_id).cloned() else {
                toast.error("Không tìm thấy yêu cầu");
                return;
            };

            is_loading.set(true);
            let requests = requests.clone();
            let is_loading = is_loading.clone();
            let toast = toast.clone();
            let cancel = (*cancel).clone();
            let close_dialogs = close_dialogs.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = run_triage(&ApiGateway, &request, action, &note, &cancel).await;
                if cancel.is_cancelled() {
                    return;
                }
                match outcome {
                    TriageOutcome::Committed(update) => {
                        let mut rows = (*requests).clone();
                        apply_update(&mut rows, &update);
                        requests.set(rows);
                        toast.success(action.success_message(&request.id));
                    }
                    TriageOutcome::Failed(message) => toast.error(message),
                    TriageOutcome::Cancelled => {}
                }
                // Reset unconditionally so a failed run never leaves a
                // dialog stuck open or the table locked.
                is_loading.set(false);
                close_dialogs();
            });
        })
    };

    // Button click -> open the matching confirmation
    let request_action = {
        let dialog_action = dialog_action.clone();
        let dialog_request_id = dialog_request_id.clone();
        Callback::from(move |(request_id, action): (String, TriageAction)| {
            dialog_action.set(Some(action));
            dialog_request_id.set(Some(request_id));
        })
    };

    // Confirmed in the dialog. Reject detours through the reason form;
    // everything else runs immediately.
    let on_confirm = {
        let dialog_action = dialog_action.clone();
        let dialog_request_id = dialog_request_id.clone();
        let reject_open = reject_open.clone();
        let process_action = process_action.clone();
        Callback::from(move |_| {
            let (Some(action), Some(request_id)) =
                ((*dialog_action), (*dialog_request_id).clone())
            else {
                return;
            };
            if action.requires_note() {
                reject_open.set(true);
            } else {
                process_action.emit((request_id, action, String::new()));
            }
        })
    };

    let on_cancel_dialog = {
        let close_dialogs = close_dialogs.clone();
        Callback::from(move |_| close_dialogs())
    };

    let on_submit_reject = {
        let dialog_request_id = dialog_request_id.clone();
        let reject_reason = reject_reason.clone();
        let toast = toast.clone();
        let process_action = process_action.clone();
        Callback::from(move |_| {
            let Some(request_id) = (*dialog_request_id).clone() else {
                return;
            };
            let note = (*reject_reason).clone();
            if note.trim().is_empty() {
                toast.error("Lý do từ chối không được để trống");
                return;
            }
            process_action.emit((request_id, TriageAction::Reject, note));
        })
    };

    let on_reason_input = {
        let reject_reason = reject_reason.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            reject_reason.set(textarea.value());
        })
    };

    let on_tab_change = {
        let active_tab = active_tab.clone();
        let current_page = current_page.clone();
        Callback::from(move |tab: RequestTab| {
            active_tab.set(tab);
            current_page.set(1);
        })
    };

    let on_page_change = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| current_page.set(page))
    };

    let on_show_details = {
        let details_for = details_for.clone();
        Callback::from(move |request: BrandRequest| details_for.set(Some(request)))
    };
    let on_close_details = {
        let details_for = details_for.clone();
        Callback::from(move |_: MouseEvent| details_for.set(None))
    };

    let tab = *active_tab;
    let rows = filtered_requests(&requests, tab);
    let pages = total_pages(rows.len(), REQUESTS_PER_PAGE);
    let visible = page_slice(&rows, *current_page, REQUESTS_PER_PAGE);

    let confirm_open = dialog_action.is_some() && !*reject_open;
    let confirm_title = dialog_action
        .map(|a| format!("Bạn có chắc muốn {} yêu cầu này?", a.confirm_verb()))
        .unwrap_or_default();
    let confirm_label = dialog_action
        .map(|a| a.committed_label())
        .unwrap_or("Xác nhận");

    html! {
        <div class="request-table">
            <div class="tab-bar">
                { for TABS.iter().map(|&t| {
                    let on_tab_change = on_tab_change.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_tab_change.emit(t));
                    html! {
                        <button
                            key={t.label()}
                            class={classes!("tab", (t == tab).then_some("active"))}
                            {onclick}
                        >
                            {t.label()}
                        </button>
                    }
                }) }
            </div>

            if *is_fetching {
                <div class="loading-state">{"Đang tải dữ liệu..."}</div>
            } else if rows.is_empty() {
                <div class="empty-state">{"Không có yêu cầu nào"}</div>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Thương hiệu"}</th>
                            <th>{"Email khách hàng"}</th>
                            <th>{"Loại cửa hàng"}</th>
                            <th>{ if tab == RequestTab::New { "Hành động" } else { "Trạng thái" } }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().map(|request| render_row(
                            request,
                            tab,
                            *is_loading,
                            &request_action,
                            &on_show_details,
                        )) }
                    </tbody>
                </table>

                <Pagination
                    page={*current_page}
                    total_pages={pages}
                    item_count={rows.len()}
                    page_size={REQUESTS_PER_PAGE}
                    on_change={on_page_change}
                />
            }

            <ConfirmDialog
                open={confirm_open}
                title={confirm_title}
                confirm_label={confirm_label}
                on_confirm={on_confirm}
                on_cancel={on_cancel_dialog.clone()}
            >
                <p>{"Hành động này sẽ được gửi tới khách hàng và không thể hoàn tác."}</p>
            </ConfirmDialog>

            <ConfirmDialog
                open={*reject_open}
                title="Lý do từ chối"
                confirm_label="Từ chối"
                on_confirm={on_submit_reject}
                on_cancel={on_cancel_dialog}
            >
                <textarea
                    class="reject-reason"
                    rows="4"
                    value={(*reject_reason).clone()}
                    oninput={on_reason_input}
                />
            </ConfirmDialog>

            { render_details(&details_for, on_close_details) }

            if *is_loading {
                <div class="busy-overlay">
                    <div class="spinner" />
                    <span>{"Đang xử lý..."}</span>
                </div>
            }
        </div>
    }
}

fn render_row(
    request: &BrandRequest,
    tab: RequestTab,
    busy: bool,
    request_action: &Callback<(String, TriageAction)>,
    on_show_details: &Callback<BrandRequest>,
) -> Html {
    let id = request.id.clone();

    let action_button = |action: TriageAction, class: &'static str, label: &'static str| {
        let request_action = request_action.clone();
        let id = id.clone();
        let onclick =
            Callback::from(move |_: MouseEvent| request_action.emit((id.clone(), action)));
        html! {
            <button class={classes!("btn", class)} disabled={busy} {onclick}>{label}</button>
        }
    };

    let details_button = {
        let on_show_details = on_show_details.clone();
        let request = request.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_show_details.emit(request.clone()));
        html! {
            <button class="btn btn-outline" {onclick}>{"Xem chi tiết"}</button>
        }
    };

    let actions = match tab {
        RequestTab::New => html! {
            <>
                { action_button(TriageAction::Accept, "btn-success", "Chấp nhận") }
                { action_button(TriageAction::Reject, "btn-danger", "Từ chối") }
                { action_button(TriageAction::Delete, "btn-outline", "Xóa") }
                { details_button }
            </>
        },
        RequestTab::Processed => html! {
            <>
                <span class="status-badge status-accepted">{request.status_name.clone()}</span>
                { action_button(TriageAction::Close, "btn-outline", "Đóng yêu cầu") }
                { details_button }
            </>
        },
        RequestTab::Closed => html! {
            <>
                <span class="status-badge status-closed">{request.status_name.clone()}</span>
                { details_button }
            </>
        },
    };

    html! {
        <tr key={request.id.clone()}>
            <td>{request.id.clone()}</td>
            <td>
                {request.brand.clone()}
                if request.brand_status == 0 {
                    <span class="brand-badge-new">{"mới"}</span>
                }
            </td>
            <td>{request.email.clone()}</td>
            <td>{request.store_profile_category_name.clone()}</td>
            <td class="actions-cell">{actions}</td>
        </tr>
    }
}

fn render_details(details: &Option<BrandRequest>, on_close: Callback<MouseEvent>) -> Html {
    let Some(request) = details else {
        return Html::default();
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog dialog-details">
                <h3 class="dialog-title">{format!("Yêu cầu #{}", request.id)}</h3>
                <div class="dialog-body">
                    <p><strong>{"Thương hiệu: "}</strong>{request.brand.clone()}</p>
                    <p><strong>{"Email: "}</strong>{request.email.clone()}</p>
                    <p><strong>{"Loại cửa hàng: "}</strong>{request.store_profile_category_name.clone()}</p>
                    <p><strong>{"Mô tả: "}</strong>{request.description.clone()}</p>
                    <p><strong>{"Ngày tạo: "}</strong>{request.created_at.clone()}</p>
                    <p><strong>{"Cập nhật: "}</strong>{request.updated_at.clone()}</p>
                </div>
                <div class="dialog-footer">
                    <button class="btn btn-outline" onclick={on_close}>{"Đóng"}</button>
                </div>
            </div>
        </div>
    }
}
