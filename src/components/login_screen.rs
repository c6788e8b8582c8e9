use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_toast};
use crate::services::auth_service;

/// Credential form. On success the session guard persists the six storage
/// keys and the app re-renders into the role's dashboard.
#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let submitting = use_state(|| false);

    let on_submit = {
        let auth = auth.clone();
        let toast = toast.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *submitting {
                return;
            }

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let email = email_input.value();
            let password = password_input.value();

            if email.is_empty() || password.is_empty() {
                toast.error("Vui lòng nhập đầy đủ email và mật khẩu");
                return;
            }

            let auth = auth.clone();
            let toast = toast.clone();
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                match auth_service::perform_login(&email, &password).await {
                    Ok(data) => {
                        auth.login.emit(data);
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        toast.error(format!("Đăng nhập thất bại: {}", e));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🏢"}</div>
                    </div>
                    <h1>{"SitePlus"}</h1>
                    <p>{"Nền tảng khảo sát mặt bằng bán lẻ"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Nhập email của bạn"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Mật khẩu"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Nhập mật khẩu"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        { if *submitting { "Đang đăng nhập..." } else { "Đăng nhập" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
