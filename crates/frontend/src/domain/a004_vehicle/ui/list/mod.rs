use crate::data::service;
use crate::shared::browser::confirm;
use crate::shared::components::data_table::{Column, DataTable, FieldValue, TableRow};
use crate::shared::components::detail_list::DetailList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::{format_km, format_number_int};
use contracts::domain::a004_vehicle::{Vehicle, VehicleStatus};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct VehicleRow {
    pub id: String,
    pub plate: String,
    pub model: String,
    pub kind: String,
    pub capacity_kg: f64,
    pub odometer_km: f64,
    pub status: String,
    pub status_kind: VehicleStatus,
}

impl From<Vehicle> for VehicleRow {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.base.id.as_string(),
            plate: v.plate,
            model: v.model,
            kind: v.kind.to_string(),
            capacity_kg: v.capacity_kg,
            odometer_km: v.odometer_km,
            status: v.status.to_string(),
            status_kind: v.status,
        }
    }
}

impl TableRow for VehicleRow {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "plate",
            "model",
            "kind",
            "capacity_kg",
            "odometer_km",
            "status",
        ]
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.clone().into(),
            "plate" => self.plate.clone().into(),
            "model" => self.model.clone().into(),
            "kind" => self.kind.clone().into(),
            "capacity_kg" => self.capacity_kg.into(),
            "odometer_km" => self.odometer_km.into(),
            "status" => self.status.clone().into(),
            _ => FieldValue::Empty,
        }
    }
}

fn status_variant(status: VehicleStatus) -> &'static str {
    match status {
        VehicleStatus::Available => "success",
        VehicleStatus::OnTrip => "primary",
        VehicleStatus::InService => "warning",
        VehicleStatus::Retired => "neutral",
    }
}

fn columns() -> Vec<Column<VehicleRow>> {
    vec![
        Column::field("Plate", "plate"),
        Column::field("Model", "model"),
        Column::field("Type", "kind"),
        Column::field("Capacity", "capacity_kg").with_cell(|row: &VehicleRow| {
            view! {
                <span class="table__cell-number">{format!("{} kg", format_number_int(row.capacity_kg))}</span>
            }
            .into_any()
        }),
        Column::field("Odometer", "odometer_km").with_cell(|row: &VehicleRow| {
            view! { <span class="table__cell-number">{format_km(row.odometer_km)}</span> }
                .into_any()
        }),
        Column::field("Status", "status").with_cell(|row: &VehicleRow| {
            let variant = status_variant(row.status_kind);
            let label = row.status.clone();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        }),
    ]
}

#[component]
pub fn VehicleList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<VehicleRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        spawn_local(async move {
            match service::fetch_vehicles().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let open_details = move |row: VehicleRow| {
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
                    if !confirm("Delete this vehicle? This cannot be undone.") {
                        return;
                    }
                    let handle = handle.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        if service::delete_vehicles(&[id]).await.is_ok() {
                            handle.close();
                            fetch();
                        }
                    });
                }
            });
            let pairs = vec![
                ("Model", row.model.clone()),
                ("Type", row.kind.clone()),
                ("Capacity", format!("{} kg", format_number_int(row.capacity_kg))),
                ("Odometer", format_km(row.odometer_km)),
                ("Status", row.status.clone()),
            ];
            view! {
                <DetailList
                    title=format!("Vehicle {}", row.plate)
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
            <PageHeader title="Vehicles" subtitle="Fleet inventory and status">
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
                search_placeholder="Search vehicles..."
                empty_message="No vehicles found"
                key_field="plate"
                on_row_click=Callback::new(open_details)
            />
        </div>
    }
}
