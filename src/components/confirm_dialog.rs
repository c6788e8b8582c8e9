use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub children: Children,
    #[prop_or(AttrValue::Static("Xác nhận"))]
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal confirm/cancel dialog. Every destructive or remote-effecting
/// action in the app goes through one of these before any call is issued.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h3 class="dialog-title">{props.title.clone()}</h3>
                <div class="dialog-body">
                    {props.children.clone()}
                </div>
                <div class="dialog-footer">
                    <button class="btn btn-outline" onclick={on_cancel}>{"Hủy"}</button>
                    <button class="btn btn-primary" onclick={on_confirm}>
                        {props.confirm_label.clone()}
                    </button>
                </div>
            </div>
        </div>
    }
}
