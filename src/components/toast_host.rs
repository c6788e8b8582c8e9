use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_toast::{Toast, ToastHandle, ToastLevel};
use crate::utils::constants::TOAST_DURATION_MS;

enum ToastStackAction {
    Push(Toast),
    Remove(u32),
}

/// The live toast list. Kept in a reducer so delayed removals always act on
/// the current list: a `Timeout` firing after later pushes must not clobber
/// toasts it never saw.
#[derive(Default, PartialEq)]
struct ToastStack {
    toasts: Vec<Toast>,
}

impl Reducible for ToastStack {
    type Action = ToastStackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastStackAction::Push(toast) => toasts.push(toast),
            ToastStackAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Owns the toast stack and provides the push handle to the whole app.
/// Each toast dismisses itself after a fixed delay.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);
    let next_id = use_mut_ref(|| 0u32);

    let push = {
        let dispatcher = stack.dispatcher();
        Callback::from(move |(level, message): (ToastLevel, String)| {
            let id = {
                let mut counter = next_id.borrow_mut();
                *counter += 1;
                *counter
            };

            dispatcher.dispatch(ToastStackAction::Push(Toast { id, level, message }));

            let dispatcher = dispatcher.clone();
            Timeout::new(TOAST_DURATION_MS, move || {
                dispatcher.dispatch(ToastStackAction::Remove(id));
            })
            .forget();
        })
    };

    let handle = ToastHandle { push };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
            <div class="toast-stack">
                { for stack.toasts.iter().map(|toast| html! {
                    <div key={toast.id} class={toast.level.css_class()}>
                        {toast.message.clone()}
                    </div>
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32, message: &str) -> Toast {
        Toast {
            id,
            level: ToastLevel::Info,
            message: message.to_string(),
        }
    }

    fn ids(stack: &Rc<ToastStack>) -> Vec<u32> {
        stack.toasts.iter().map(|t| t.id).collect()
    }

    #[test]
    fn overlapping_toasts_dismiss_independently() {
        // Push A, push B, then A's delayed removal fires: B must survive,
        // and B's removal must then leave the stack empty rather than
        // bringing A back.
        let mut stack = Rc::new(ToastStack::default());
        stack = stack.reduce(ToastStackAction::Push(toast(1, "A")));
        stack = stack.reduce(ToastStackAction::Push(toast(2, "B")));
        assert_eq!(ids(&stack), [1, 2]);

        stack = stack.reduce(ToastStackAction::Remove(1));
        assert_eq!(ids(&stack), [2]);

        stack = stack.reduce(ToastStackAction::Remove(2));
        assert!(stack.toasts.is_empty());
    }

    #[test]
    fn removing_an_already_gone_toast_is_a_no_op() {
        let mut stack = Rc::new(ToastStack::default());
        stack = stack.reduce(ToastStackAction::Push(toast(1, "A")));
        stack = stack.reduce(ToastStackAction::Remove(1));
        stack = stack.reduce(ToastStackAction::Remove(1));
        assert!(stack.toasts.is_empty());
    }
}
