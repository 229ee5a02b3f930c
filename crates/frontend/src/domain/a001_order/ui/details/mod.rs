use crate::data::service;
use crate::domain::a001_order::ui::list::{status_variant, OrderRow};
use crate::shared::browser::confirm;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date_str;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_int};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal body for a single order: header with status badge, label/value
/// sections and a delete action.
#[component]
pub fn OrderDetails(
    row: OrderRow,
    on_close: Callback<()>,
    /// Fired after a successful delete (list refetches)
    on_deleted: Callback<()>,
) -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);

    let id = StoredValue::new(row.id.clone());
    let code = row.code.clone();

    let on_delete = move |_| {
        if !confirm("Delete this order? This cannot be undone.") {
            return;
        }
        spawn_local(async move {
            match service::delete_orders(&[id.get_value()]).await {
                Ok(()) => on_deleted.run(()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="detail-list">
            <div class="detail-list__header">
                <h2 class="detail-list__title">{format!("Order {}", code)}</h2>
                <div class="detail-list__actions">
                    <button class="button button--danger" on:click=on_delete>
                        {icon("delete")}
                        "Delete"
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">{e}</span>
                            </div>
                        }
                    })
            }}

            <dl class="detail-list__body">
                <div class="detail-list__row">
                    <dt class="detail-list__label">"Status"</dt>
                    <dd class="detail-list__value">
                        <Badge variant=status_variant(row.status_kind)>{row.status.clone()}</Badge>
                    </dd>
                </div>
                <div class="detail-list__row">
                    <dt class="detail-list__label">"Customer"</dt>
                    <dd class="detail-list__value">{row.customer.clone()}</dd>
                </div>
                <div class="detail-list__row">
                    <dt class="detail-list__label">"Origin"</dt>
                    <dd class="detail-list__value">{row.origin.clone()}</dd>
                </div>
                <div class="detail-list__row">
                    <dt class="detail-list__label">"Destination"</dt>
                    <dd class="detail-list__value">{row.destination.clone()}</dd>
                </div>
                <div class="detail-list__row">
                    <dt class="detail-list__label">"Scheduled"</dt>
                    <dd class="detail-list__value">{format_date_str(&row.scheduled_date)}</dd>
                </div>
                <div class="detail-list__row">
                    <dt class="detail-list__label">"Weight"</dt>
                    <dd class="detail-list__value">
                        {format!("{} kg", format_number_int(row.weight_kg))}
                    </dd>
                </div>
                <div class="detail-list__row">
                    <dt class="detail-list__label">"Amount"</dt>
                    <dd class="detail-list__value">{format_money(row.amount)}</dd>
                </div>
            </dl>
        </div>
    }
}
