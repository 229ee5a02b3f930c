pub mod metrics;

use crate::data::service;
use crate::shared::components::date_range_picker::{month_bounds, DateRangePicker};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{iso_date, parse_iso_date};
use crate::shared::icons::icon;
use crate::shared::prefs::{load_pref, save_pref};
use chrono::{Datelike, Utc};
use contracts::domain::a008_sale::SaleRecord;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const RANGE_PREF_KEY: &str = "kpi.date_range";

fn default_range() -> (String, String) {
    let now = Utc::now().date_naive();
    let (from, to) = month_bounds(now.year(), now.month()).unwrap_or((now, now));
    (iso_date(from), iso_date(to))
}

fn rate_status(rate: Option<f64>) -> IndicatorStatus {
    match rate {
        Some(r) if r >= 90.0 => IndicatorStatus::Good,
        Some(r) if r >= 75.0 => IndicatorStatus::Warning,
        Some(_) => IndicatorStatus::Bad,
        None => IndicatorStatus::Neutral,
    }
}

fn overdue_status(count: Option<f64>) -> IndicatorStatus {
    match count {
        Some(c) if c == 0.0 => IndicatorStatus::Good,
        Some(c) if c <= 2.0 => IndicatorStatus::Warning,
        Some(_) => IndicatorStatus::Bad,
        None => IndicatorStatus::Neutral,
    }
}

/// Landing dashboard: headline numbers over orders, trips, fleet,
/// maintenance, returnables and revenue for a selectable period.
#[component]
pub fn KpiOverview() -> impl IntoView {
    let open_orders = RwSignal::new(None::<f64>);
    let on_time = RwSignal::new(None::<f64>);
    let utilization = RwSignal::new(None::<f64>);
    let overdue = RwSignal::new(None::<f64>);
    let outstanding = RwSignal::new(None::<f64>);
    let sales = RwSignal::new(None::<Vec<SaleRecord>>);
    let (error, set_error) = signal::<Option<String>>(None);

    let (initial_from, initial_to) =
        load_pref::<(String, String)>(RANGE_PREF_KEY).unwrap_or_else(default_range);
    let date_from = RwSignal::new(initial_from);
    let date_to = RwSignal::new(initial_to);

    let load = move || {
        set_error.set(None);
        spawn_local(async move {
            let report = move |e: String| set_error.set(Some(e));
            match service::fetch_orders().await {
                Ok(v) => open_orders.set(Some(metrics::open_orders(&v) as f64)),
                Err(e) => report(e),
            }
            match service::fetch_trips().await {
                Ok(v) => on_time.set(metrics::on_time_rate(&v)),
                Err(e) => report(e),
            }
            match service::fetch_vehicles().await {
                Ok(v) => utilization.set(metrics::fleet_utilization(&v)),
                Err(e) => report(e),
            }
            match service::fetch_maintenance_tasks().await {
                Ok(v) => overdue.set(Some(metrics::overdue_maintenance(&v) as f64)),
                Err(e) => report(e),
            }
            match service::fetch_returnables().await {
                Ok(v) => outstanding.set(Some(f64::from(metrics::outstanding_returnables(&v)))),
                Err(e) => report(e),
            }
            match service::fetch_sales().await {
                Ok(v) => sales.set(Some(v)),
                Err(e) => report(e),
            }
        });
    };
    load();

    let on_range_change = Callback::new(move |(from, to): (String, String)| {
        save_pref(RANGE_PREF_KEY, &(from.clone(), to.clone()));
        date_from.set(from);
        date_to.set(to);
    });

    let revenue = Signal::derive(move || {
        sales.get().map(|rows| {
            metrics::revenue_in_range(
                &rows,
                parse_iso_date(&date_from.get()),
                parse_iso_date(&date_to.get()),
            )
        })
    });

    view! {
        <div class="page">
            <PageHeader title="Overview" subtitle="Key figures across the operation">
                <button class="button button--secondary" on:click=move |_| load()>
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

            <div class="stat-grid">
                <StatCard
                    label="Open orders"
                    icon_name="orders"
                    value=Signal::derive(move || open_orders.get())
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="On-time trips"
                    icon_name="trips"
                    value=Signal::derive(move || on_time.get())
                    format=ValueFormat::Percent { decimals: 1 }
                    status=Signal::derive(move || rate_status(on_time.get()))
                />
                <StatCard
                    label="Fleet utilization"
                    icon_name="truck"
                    value=Signal::derive(move || utilization.get())
                    format=ValueFormat::Percent { decimals: 1 }
                />
                <StatCard
                    label="Overdue maintenance"
                    icon_name="wrench"
                    value=Signal::derive(move || overdue.get())
                    format=ValueFormat::Integer
                    status=Signal::derive(move || overdue_status(overdue.get()))
                />
                <StatCard
                    label="Returnables outstanding"
                    icon_name="returnables"
                    value=Signal::derive(move || outstanding.get())
                    format=ValueFormat::Integer
                />
            </div>

            <div class="dashboard-section">
                <div class="dashboard-section__header">
                    <h2 class="dashboard-section__title">"Revenue"</h2>
                    <DateRangePicker
                        date_from=date_from
                        date_to=date_to
                        on_change=on_range_change
                    />
                </div>
                <StatCard
                    label="Revenue in period"
                    icon_name="sales"
                    value=revenue
                    format=ValueFormat::Money { currency: "EUR".into() }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_status_thresholds() {
        assert_eq!(rate_status(Some(95.0)), IndicatorStatus::Good);
        assert_eq!(rate_status(Some(90.0)), IndicatorStatus::Good);
        assert_eq!(rate_status(Some(80.0)), IndicatorStatus::Warning);
        assert_eq!(rate_status(Some(50.0)), IndicatorStatus::Bad);
        assert_eq!(rate_status(None), IndicatorStatus::Neutral);
    }

    #[test]
    fn overdue_status_thresholds() {
        assert_eq!(overdue_status(Some(0.0)), IndicatorStatus::Good);
        assert_eq!(overdue_status(Some(2.0)), IndicatorStatus::Warning);
        assert_eq!(overdue_status(Some(5.0)), IndicatorStatus::Bad);
        assert_eq!(overdue_status(None), IndicatorStatus::Neutral);
    }
}
