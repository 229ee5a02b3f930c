use crate::data::service;
use crate::shared::browser::confirm;
use crate::shared::components::data_table::{Column, DataTable, FieldValue, TableRow};
use crate::shared::components::detail_list::DetailList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_km;
use contracts::domain::a003_route_plan::RoutePlan;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Hours-and-minutes display for a minute count
fn format_minutes(total: u32) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    if hours == 0 {
        format!("{minutes} min")
    } else if minutes == 0 {
        format!("{hours} h")
    } else {
        format!("{hours} h {minutes:02} min")
    }
}

#[derive(Clone, Debug)]
pub struct RoutePlanRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub stops: i64,
    pub stop_locations: String,
    pub distance_km: f64,
    pub total_minutes: i64,
}

impl From<RoutePlan> for RoutePlanRow {
    fn from(p: RoutePlan) -> Self {
        let stop_locations = p
            .stops
            .iter()
            .map(|s| s.location.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            id: p.base.id.as_string(),
            code: p.base.code.clone(),
            name: p.name.clone(),
            origin: p.origin.clone(),
            destination: p.destination.clone(),
            stops: p.stops.len() as i64,
            stop_locations,
            distance_km: p.distance_km,
            total_minutes: p.total_minutes() as i64,
        }
    }
}

impl TableRow for RoutePlanRow {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "code",
            "name",
            "origin",
            "destination",
            "stops",
            "stop_locations",
            "distance_km",
            "total_minutes",
        ]
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.clone().into(),
            "code" => self.code.clone().into(),
            "name" => self.name.clone().into(),
            "origin" => self.origin.clone().into(),
            "destination" => self.destination.clone().into(),
            "stops" => self.stops.into(),
            "stop_locations" => self.stop_locations.clone().into(),
            "distance_km" => self.distance_km.into(),
            "total_minutes" => self.total_minutes.into(),
            _ => FieldValue::Empty,
        }
    }
}

fn columns() -> Vec<Column<RoutePlanRow>> {
    vec![
        Column::field("Code", "code"),
        Column::field("Name", "name"),
        Column::computed("Lane", |row: &RoutePlanRow| {
            format!("{} → {}", row.origin, row.destination)
        }),
        Column::field("Stops", "stops"),
        Column::field("Distance", "distance_km").with_cell(|row: &RoutePlanRow| {
            view! { <span class="table__cell-number">{format_km(row.distance_km)}</span> }
                .into_any()
        }),
        Column::field("Duration", "total_minutes").with_cell(|row: &RoutePlanRow| {
            format_minutes(row.total_minutes as u32).into_any()
        }),
    ]
}

#[component]
pub fn RoutePlanList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<RoutePlanRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        spawn_local(async move {
            match service::fetch_route_plans().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let open_details = move |row: RoutePlanRow| {
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
                    if !confirm("Delete this route plan? This cannot be undone.") {
                        return;
                    }
                    let handle = handle.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        if service::delete_route_plans(&[id]).await.is_ok() {
                            handle.close();
                            fetch();
                        }
                    });
                }
            });
            let pairs = vec![
                ("Name", row.name.clone()),
                ("Origin", row.origin.clone()),
                ("Destination", row.destination.clone()),
                ("Stops", row.stop_locations.clone()),
                ("Distance", format_km(row.distance_km)),
                ("Total duration", format_minutes(row.total_minutes as u32)),
            ];
            view! {
                <DetailList
                    title=format!("Route {}", row.code)
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
            <PageHeader title="Route plans" subtitle="Reusable routes between locations">
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
                search_placeholder="Search routes..."
                empty_message="No route plans found"
                on_row_click=Callback::new(open_details)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_render_as_hours_and_minutes() {
        assert_eq!(format_minutes(45), "45 min");
        assert_eq!(format_minutes(60), "1 h");
        assert_eq!(format_minutes(125), "2 h 05 min");
    }
}
