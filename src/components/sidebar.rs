use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub title: AttrValue,
    pub items: Vec<NavItem>,
    pub active: usize,
    pub on_select: Callback<usize>,
    pub on_logout: Callback<()>,
}

/// Per-role navigation column with a logout button at the bottom.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <aside class="sidebar">
            <div class="sidebar-logo">
                <span class="logo-icon">{"🏢"}</span>
                <span class="logo-text">{"SitePlus"}</span>
            </div>
            <div class="sidebar-title">{props.title.clone()}</div>
            <nav class="sidebar-nav">
                { for props.items.iter().enumerate().map(|(index, item)| {
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));
                    html! {
                        <button
                            key={index.to_string()}
                            class={classes!("nav-item", (index == props.active).then_some("active"))}
                            {onclick}
                        >
                            {item.label.clone()}
                        </button>
                    }
                }) }
            </nav>
            <button class="sidebar-logout" onclick={on_logout}>{"Đăng xuất"}</button>
        </aside>
    }
}
