// ============================================================================
// AUTH CONTEXT - share the session guard with every component
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_session_guard, AuthHandle};

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Provider that owns the one session-guard instance for the process.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let handle = use_session_guard();

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<AuthHandle>>
    }
}
