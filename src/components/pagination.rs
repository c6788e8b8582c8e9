use yew::prelude::*;

use crate::utils::pagination::{has_next, has_previous};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: usize,
    pub total_pages: usize,
    pub item_count: usize,
    pub page_size: usize,
    pub on_change: Callback<usize>,
}

/// Previous / numbered / next controls over a client-side page slice.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let page = props.page;
    let prev_enabled = has_previous(page);
    let next_enabled = has_next(page, props.item_count, props.page_size);

    let on_previous = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if prev_enabled {
                on_change.emit(page - 1);
            }
        })
    };
    let on_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if next_enabled {
                on_change.emit(page + 1);
            }
        })
    };

    html! {
        <nav class="pagination">
            <button
                class={classes!("pagination-prev", (!prev_enabled).then_some("disabled"))}
                disabled={!prev_enabled}
                onclick={on_previous}
            >
                {"Trước"}
            </button>
            { for (1..=props.total_pages).map(|n| {
                let on_change = props.on_change.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_change.emit(n));
                html! {
                    <button
                        key={n.to_string()}
                        class={classes!("pagination-link", (n == page).then_some("active"))}
                        {onclick}
                    >
                        {n}
                    </button>
                }
            }) }
            <button
                class={classes!("pagination-next", (!next_enabled).then_some("disabled"))}
                disabled={!next_enabled}
                onclick={on_next}
            >
                {"Sau"}
            </button>
        </nav>
    }
}
