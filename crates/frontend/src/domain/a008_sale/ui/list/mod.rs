use crate::data::service;
use crate::shared::browser::confirm;
use crate::shared::components::data_table::{Column, DataTable, FieldValue, TableRow};
use crate::shared::components::date_range_picker::{month_bounds, DateRangePicker};
use crate::shared::components::detail_list::DetailList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date_str, iso_date, parse_iso_date};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::{format_money, format_number_with_decimals};
use crate::shared::prefs::{load_pref, save_pref};
use chrono::{Datelike, Utc};
use contracts::domain::a008_sale::{SaleRecord, SalesChannel};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const RANGE_PREF_KEY: &str = "sales.date_range";

#[derive(Clone, Debug)]
pub struct SaleRow {
    pub id: String,
    pub code: String,
    /// ISO form so the raw value sorts chronologically
    pub sale_date: String,
    pub customer: String,
    pub items: i64,
    pub amount: f64,
    pub margin_pct: f64,
    pub channel: String,
    pub channel_kind: SalesChannel,
}

impl From<SaleRecord> for SaleRow {
    fn from(s: SaleRecord) -> Self {
        Self {
            id: s.base.id.as_string(),
            code: s.base.code,
            sale_date: s.sale_date.format("%Y-%m-%d").to_string(),
            customer: s.customer,
            items: i64::from(s.items),
            amount: s.amount,
            margin_pct: s.margin_pct,
            channel: s.channel.to_string(),
            channel_kind: s.channel,
        }
    }
}

impl TableRow for SaleRow {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "code",
            "sale_date",
            "customer",
            "items",
            "amount",
            "margin_pct",
            "channel",
        ]
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.clone().into(),
            "code" => self.code.clone().into(),
            "sale_date" => self.sale_date.clone().into(),
            "customer" => self.customer.clone().into(),
            "items" => self.items.into(),
            "amount" => self.amount.into(),
            "margin_pct" => self.margin_pct.into(),
            "channel" => self.channel.clone().into(),
            _ => FieldValue::Empty,
        }
    }
}

/// Inclusive date-range filter on the ISO `sale_date`.
/// An unparsable bound leaves that side unbounded.
fn filter_by_range(rows: &[SaleRow], from: &str, to: &str) -> Vec<SaleRow> {
    let from = parse_iso_date(from);
    let to = parse_iso_date(to);
    rows.iter()
        .filter(|row| {
            let Some(date) = parse_iso_date(&row.sale_date) else {
                return false;
            };
            from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
        })
        .cloned()
        .collect()
}

/// Totals line under the table: row count, units, revenue and the
/// revenue-weighted average margin.
fn sales_totals(rows: &[SaleRow]) -> (usize, i64, f64, f64) {
    let count = rows.len();
    let items: i64 = rows.iter().map(|r| r.items).sum();
    let amount: f64 = rows.iter().map(|r| r.amount).sum();
    let weighted_margin = if amount > 0.0 {
        rows.iter().map(|r| r.margin_pct * r.amount).sum::<f64>() / amount
    } else {
        0.0
    };
    (count, items, amount, weighted_margin)
}

fn channel_variant(channel: SalesChannel) -> &'static str {
    match channel {
        SalesChannel::Direct => "primary",
        SalesChannel::Distributor => "neutral",
        SalesChannel::Online => "success",
    }
}

fn columns() -> Vec<Column<SaleRow>> {
    vec![
        Column::field("Code", "code"),
        Column::field("Date", "sale_date")
            .with_cell(|row: &SaleRow| format_date_str(&row.sale_date).into_any()),
        Column::field("Customer", "customer"),
        Column::field("Channel", "channel").with_cell(|row: &SaleRow| {
            let variant = channel_variant(row.channel_kind);
            let label = row.channel.clone();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        }),
        Column::field("Items", "items").with_cell(|row: &SaleRow| {
            view! { <span class="table__cell-number">{row.items.to_string()}</span> }.into_any()
        }),
        Column::field("Amount", "amount").with_cell(|row: &SaleRow| {
            view! { <span class="table__cell-number">{format_money(row.amount)}</span> }
                .into_any()
        }),
        Column::field("Margin", "margin_pct").with_cell(|row: &SaleRow| {
            view! {
                <span class="table__cell-number">
                    {format!("{}%", format_number_with_decimals(row.margin_pct, 1))}
                </span>
            }
            .into_any()
        }),
    ]
}

fn default_range() -> (String, String) {
    let now = Utc::now().date_naive();
    let (from, to) = month_bounds(now.year(), now.month()).unwrap_or((now, now));
    (iso_date(from), iso_date(to))
}

#[component]
pub fn SalesList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<SaleRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let (initial_from, initial_to) =
        load_pref::<(String, String)>(RANGE_PREF_KEY).unwrap_or_else(default_range);
    let date_from = RwSignal::new(initial_from);
    let date_to = RwSignal::new(initial_to);

    let fetch = move || {
        spawn_local(async move {
            match service::fetch_sales().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let on_range_change = Callback::new(move |(from, to): (String, String)| {
        save_pref(RANGE_PREF_KEY, &(from.clone(), to.clone()));
        date_from.set(from);
        date_to.set(to);
    });

    let filtered = Signal::derive(move || {
        filter_by_range(&items.get(), &date_from.get(), &date_to.get())
    });
    let totals = Signal::derive(move || sales_totals(&filtered.get()));

    let open_details = move |row: SaleRow| {
        modal_stack.clear();
        modal_stack.push(move |handle| {
            let on_close = Callback::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            let on_delete = Callback::new({
                let handle = handle.clone();
                let id = row.id.clone();
                move |_| {
                    if !confirm("Delete this sale? This cannot be undone.") {
                        return;
                    }
                    let handle = handle.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        if service::delete_sales(&[id]).await.is_ok() {
                            handle.close();
                            fetch();
                        }
                    });
                }
            });
            let pairs = vec![
                ("Date", format_date_str(&row.sale_date)),
                ("Customer", row.customer.clone()),
                ("Channel", row.channel.clone()),
                ("Items", row.items.to_string()),
                ("Amount", format_money(row.amount)),
                (
                    "Margin",
                    format!("{}%", format_number_with_decimals(row.margin_pct, 1)),
                ),
            ];
            view! {
                <DetailList
                    title=format!("Sale {}", row.code)
                    pairs=pairs
                    on_close=on_close
                    on_delete=on_delete
                />
            }
            .into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Sales" subtitle="Sales register by period">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <DateRangePicker
                date_from=date_from
                date_to=date_to
                on_change=on_range_change
                label="Period".to_string()
            />

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
                rows=filtered
                columns=columns()
                search_placeholder="Search sales..."
                empty_message="No sales in the selected period"
                selectable=true
                on_row_click=Callback::new(open_details)
            />

            <div class="totals-bar">
                {move || {
                    let (count, items, amount, margin) = totals.get();
                    view! {
                        <span class="totals-bar__item">{format!("{count} sales")}</span>
                        <span class="totals-bar__item">{format!("{items} items")}</span>
                        <span class="totals-bar__item totals-bar__item--strong">
                            {format!("Total {}", format_money(amount))}
                        </span>
                        <span class="totals-bar__item">
                            {format!("Avg margin {}%", format_number_with_decimals(margin, 1))}
                        </span>
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_sale::SaleRecordId;
    use contracts::domain::common::BaseAggregate;

    fn sale(code: &str, date: &str, items: u32, amount: f64, margin: f64) -> SaleRow {
        let record = SaleRecord {
            base: BaseAggregate::new(
                SaleRecordId::from_u128(1),
                code.into(),
                String::new(),
            ),
            sale_date: parse_iso_date(date).expect("test date"),
            customer: "Acme".into(),
            items,
            amount,
            margin_pct: margin,
            channel: SalesChannel::Direct,
        };
        record.into()
    }

    #[test]
    fn range_filter_is_inclusive() {
        let rows = vec![
            sale("S-1", "2025-07-31", 1, 100.0, 10.0),
            sale("S-2", "2025-08-01", 1, 100.0, 10.0),
            sale("S-3", "2025-08-31", 1, 100.0, 10.0),
            sale("S-4", "2025-09-01", 1, 100.0, 10.0),
        ];
        let filtered = filter_by_range(&rows, "2025-08-01", "2025-08-31");
        let codes: Vec<&str> = filtered.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["S-2", "S-3"]);
    }

    #[test]
    fn blank_bounds_are_open_ended() {
        let rows = vec![
            sale("S-1", "2025-07-15", 1, 100.0, 10.0),
            sale("S-2", "2025-08-15", 1, 100.0, 10.0),
        ];
        assert_eq!(filter_by_range(&rows, "", "").len(), 2);
        assert_eq!(filter_by_range(&rows, "2025-08-01", "").len(), 1);
        assert_eq!(filter_by_range(&rows, "", "2025-07-31").len(), 1);
    }

    #[test]
    fn totals_weight_margin_by_revenue() {
        let rows = vec![
            sale("S-1", "2025-08-01", 10, 1000.0, 20.0),
            sale("S-2", "2025-08-02", 5, 3000.0, 10.0),
        ];
        let (count, items, amount, margin) = sales_totals(&rows);
        assert_eq!(count, 2);
        assert_eq!(items, 15);
        assert_eq!(amount, 4000.0);
        // (20*1000 + 10*3000) / 4000 = 12.5
        assert!((margin - 12.5).abs() < 1e-9);
    }

    #[test]
    fn totals_of_nothing_are_zero() {
        let (count, items, amount, margin) = sales_totals(&[]);
        assert_eq!(count, 0);
        assert_eq!(items, 0);
        assert_eq!(amount, 0.0);
        assert_eq!(margin, 0.0);
    }
}
