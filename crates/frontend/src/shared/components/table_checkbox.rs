use leptos::prelude::*;

/// Table cell checkbox.
///
/// Renders a `<td>` with the checkbox inside. Clicks on the cell never reach
/// the row (stop_propagation), so selection does not trigger row navigation.
#[component]
pub fn TableCheckbox(
    /// Checked state
    checked: Signal<bool>,
    /// Called with the new state on change
    on_change: Callback<bool>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </td>
    }
}
