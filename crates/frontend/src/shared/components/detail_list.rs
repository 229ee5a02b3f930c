use crate::shared::icons::icon;
use leptos::prelude::*;

/// Read-only label/value body for detail modals.
///
/// List pages feed it pre-formatted pairs; it owns no state and performs no
/// lookups of its own. A destructive action, when the page provides one,
/// renders next to Close — confirmation is the caller's job.
#[component]
pub fn DetailList(
    /// Modal title
    #[prop(into)]
    title: String,

    /// Ordered (label, value) pairs
    pairs: Vec<(&'static str, String)>,

    /// Close button handler
    on_close: Callback<()>,

    /// Optional delete button handler
    #[prop(optional, into)]
    on_delete: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="detail-list">
            <div class="detail-list__header">
                <h2 class="detail-list__title">{title}</h2>
                <div class="detail-list__actions">
                    {on_delete
                        .map(|cb| {
                            view! {
                                <button class="button button--danger" on:click=move |_| cb.run(())>
                                    {icon("delete")}
                                    "Delete"
                                </button>
                            }
                        })}
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
            <dl class="detail-list__body">
                {pairs
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="detail-list__row">
                                <dt class="detail-list__label">{label}</dt>
                                <dd class="detail-list__value">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}
