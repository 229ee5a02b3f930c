use crate::data::service;
use crate::domain::a001_order::ui::details::OrderDetails;
use crate::shared::components::data_table::{Column, DataTable, FieldValue, TableRow};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date_str;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::{format_money, format_number_int};
use contracts::domain::a001_order::{Order, OrderStatus};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct OrderRow {
    pub id: String,
    pub code: String,
    pub customer: String,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub status_kind: OrderStatus,
    /// ISO form so the raw value sorts chronologically
    pub scheduled_date: String,
    pub weight_kg: f64,
    pub amount: f64,
}

impl From<Order> for OrderRow {
    fn from(o: Order) -> Self {
        Self {
            id: o.base.id.as_string(),
            code: o.base.code,
            customer: o.customer,
            origin: o.origin,
            destination: o.destination,
            status: o.status.to_string(),
            status_kind: o.status,
            scheduled_date: o.scheduled_date.format("%Y-%m-%d").to_string(),
            weight_kg: o.weight_kg,
            amount: o.amount,
        }
    }
}

impl TableRow for OrderRow {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "code",
            "customer",
            "origin",
            "destination",
            "status",
            "scheduled_date",
            "weight_kg",
            "amount",
        ]
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.clone().into(),
            "code" => self.code.clone().into(),
            "customer" => self.customer.clone().into(),
            "origin" => self.origin.clone().into(),
            "destination" => self.destination.clone().into(),
            "status" => self.status.clone().into(),
            "scheduled_date" => self.scheduled_date.clone().into(),
            "weight_kg" => self.weight_kg.into(),
            "amount" => self.amount.into(),
            _ => FieldValue::Empty,
        }
    }
}

pub fn status_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Draft => "neutral",
        OrderStatus::Confirmed => "primary",
        OrderStatus::InTransit => "warning",
        OrderStatus::Delivered => "success",
        OrderStatus::Cancelled => "error",
    }
}

fn columns() -> Vec<Column<OrderRow>> {
    vec![
        Column::field("Code", "code"),
        Column::field("Customer", "customer"),
        // Computed column: never sortable
        Column::computed("Lane", |row: &OrderRow| {
            format!("{} → {}", row.origin, row.destination)
        }),
        Column::field("Status", "status").with_cell(|row: &OrderRow| {
            let variant = status_variant(row.status_kind);
            let label = row.status.clone();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        }),
        Column::field("Scheduled", "scheduled_date")
            .with_cell(|row: &OrderRow| format_date_str(&row.scheduled_date).into_any()),
        Column::field("Weight", "weight_kg").with_cell(|row: &OrderRow| {
            view! {
                <span class="table__cell-number">{format!("{} kg", format_number_int(row.weight_kg))}</span>
            }
            .into_any()
        }),
        Column::field("Amount", "amount").with_cell(|row: &OrderRow| {
            view! { <span class="table__cell-number">{format_money(row.amount)}</span> }.into_any()
        }),
    ]
}

#[component]
pub fn OrderList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<OrderRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        spawn_local(async move {
            match service::fetch_orders().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let open_details = move |row: OrderRow| {
        // close any previous modal opened from this list
        modal_stack.clear();
        modal_stack.push_with_frame(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            Some("order-details-modal".to_string()),
            move |handle| {
                let row = row.clone();
                let on_close = Callback::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                let on_deleted = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        fetch();
                    }
                });

                view! { <OrderDetails row=row on_close=on_close on_deleted=on_deleted /> }
                    .into_any()
            },
        );
    };

    view! {
        <div class="page">
            <PageHeader title="Orders" subtitle="Transport orders across all customers">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

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

            <DataTable
                rows=Signal::derive(move || items.get())
                columns=columns()
                search_placeholder="Search orders..."
                empty_message="No orders found"
                selectable=true
                on_row_click=Callback::new(open_details)
            />
        </div>
    }
}
