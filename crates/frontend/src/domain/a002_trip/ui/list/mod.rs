use crate::data::service;
use crate::shared::browser::confirm;
use crate::shared::components::data_table::{Column, DataTable, FieldValue, TableRow};
use crate::shared::components::detail_list::DetailList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_km;
use contracts::domain::a002_trip::{Trip, TripStatus};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct TripRow {
    pub id: String,
    pub code: String,
    pub driver: String,
    pub vehicle: String,
    pub route: String,
    /// ISO timestamp, sorts chronologically as text
    pub departure: String,
    pub arrival: String,
    pub status: String,
    pub status_kind: TripStatus,
    pub on_time: Option<bool>,
    pub distance_km: f64,
}

impl From<Trip> for TripRow {
    fn from(t: Trip) -> Self {
        Self {
            id: t.base.id.as_string(),
            code: t.base.code,
            driver: t.driver_name,
            vehicle: t.vehicle_plate,
            route: t.route_name,
            departure: t.departure.to_rfc3339(),
            arrival: t.arrival.to_rfc3339(),
            status: t.status.to_string(),
            status_kind: t.status,
            on_time: t.on_time,
            distance_km: t.distance_km,
        }
    }
}

impl TripRow {
    fn departure_display(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.departure)
            .map(|dt| format_datetime(dt.with_timezone(&chrono::Utc)))
            .unwrap_or_else(|_| self.departure.clone())
    }

    fn arrival_display(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.arrival)
            .map(|dt| format_datetime(dt.with_timezone(&chrono::Utc)))
            .unwrap_or_else(|_| self.arrival.clone())
    }

    fn on_time_label(&self) -> String {
        match self.on_time {
            Some(true) => "On time".to_string(),
            Some(false) => "Late".to_string(),
            None => String::new(),
        }
    }
}

impl TableRow for TripRow {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "code",
            "driver",
            "vehicle",
            "route",
            "departure",
            "arrival",
            "status",
            "on_time",
            "distance_km",
        ]
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.clone().into(),
            "code" => self.code.clone().into(),
            "driver" => self.driver.clone().into(),
            "vehicle" => self.vehicle.clone().into(),
            "route" => self.route.clone().into(),
            "departure" => self.departure.clone().into(),
            "arrival" => self.arrival.clone().into(),
            "status" => self.status.clone().into(),
            "on_time" => match self.on_time {
                Some(v) => v.into(),
                None => FieldValue::Empty,
            },
            "distance_km" => self.distance_km.into(),
            _ => FieldValue::Empty,
        }
    }
}

fn status_variant(status: TripStatus) -> &'static str {
    match status {
        TripStatus::Planned => "neutral",
        TripStatus::EnRoute => "primary",
        TripStatus::Completed => "success",
        TripStatus::Delayed => "warning",
        TripStatus::Cancelled => "error",
    }
}

fn columns() -> Vec<Column<TripRow>> {
    vec![
        Column::field("Code", "code"),
        Column::field("Driver", "driver"),
        Column::field("Vehicle", "vehicle"),
        Column::field("Route", "route"),
        Column::field("Departure", "departure")
            .with_cell(|row: &TripRow| row.departure_display().into_any()),
        Column::field("Status", "status").with_cell(|row: &TripRow| {
            let variant = status_variant(row.status_kind);
            let label = row.status.clone();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        }),
        Column::field("Punctuality", "on_time").with_cell(|row: &TripRow| match row.on_time {
            Some(true) => view! { <Badge variant="success">"On time"</Badge> }.into_any(),
            Some(false) => view! { <Badge variant="error">"Late"</Badge> }.into_any(),
            None => view! { <span class="table__cell-muted">"—"</span> }.into_any(),
        }),
        Column::field("Distance", "distance_km").with_cell(|row: &TripRow| {
            view! { <span class="table__cell-number">{format_km(row.distance_km)}</span> }
                .into_any()
        }),
    ]
}

#[component]
pub fn TripList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<TripRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        spawn_local(async move {
            match service::fetch_trips().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let open_details = move |row: TripRow| {
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
                    if !confirm("Delete this trip? This cannot be undone.") {
                        return;
                    }
                    let handle = handle.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        if service::delete_trips(&[id]).await.is_ok() {
                            handle.close();
                            fetch();
                        }
                    });
                }
            });
            let pairs = vec![
                ("Driver", row.driver.clone()),
                ("Vehicle", row.vehicle.clone()),
                ("Route", row.route.clone()),
                ("Departure", row.departure_display()),
                ("Arrival", row.arrival_display()),
                ("Status", row.status.clone()),
                ("Punctuality", row.on_time_label()),
                ("Distance", format_km(row.distance_km)),
            ];
            view! {
                <DetailList
                    title=format!("Trip {}", row.code)
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
            <PageHeader title="Trips" subtitle="Planned and executed trips">
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
                search_placeholder="Search trips..."
                empty_message="No trips found"
                on_row_click=Callback::new(open_details)
            />
        </div>
    }
}
