use crate::layout::sidebar::Sidebar;
use crate::shared::modal_stack::ModalHost;
use leptos::prelude::*;

/// Application frame: sidebar on the left, active page in the center,
/// modal host on top of everything.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <main class="shell__content">{children()}</main>
            <ModalHost />
        </div>
    }
}
