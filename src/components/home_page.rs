use yew::prelude::*;

use crate::hooks::use_auth;

/// Customer landing page. Customers have no dashboard; they get a welcome
/// screen and a way out.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let auth = use_auth();

    let user_name = auth
        .state
        .user_name
        .clone()
        .unwrap_or_else(|| "bạn".to_string());

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    html! {
        <div class="home-page">
            <div class="home-card">
                <div class="logo-icon">{"🏢"}</div>
                <h1>{format!("Chào mừng, {}!", user_name)}</h1>
                <p>{"Yêu cầu khảo sát mặt bằng của bạn đang được xử lý. Chúng tôi sẽ liên hệ qua email khi có kết quả."}</p>
                <button class="btn btn-outline" onclick={on_logout}>{"Đăng xuất"}</button>
            </div>
        </div>
    }
}
