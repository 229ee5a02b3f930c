use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state for the whole app, shared via context.
    provide_context(AppGlobalContext::new());

    // Centralized modal stack (detail views open through it)
    provide_context(ModalStackService::new());

    view! {
        <AppRoutes />
    }
}
