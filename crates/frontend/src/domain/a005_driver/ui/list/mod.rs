use crate::data::service;
use crate::shared::browser::confirm;
use crate::shared::components::data_table::{Column, DataTable, FieldValue, TableRow};
use crate::shared::components::detail_list::DetailList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a005_driver::{Driver, DriverStatus};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct DriverRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub license_class: String,
    pub phone: String,
    pub status: String,
    pub status_kind: DriverStatus,
    pub trips_completed: i64,
}

impl From<Driver> for DriverRow {
    fn from(d: Driver) -> Self {
        Self {
            id: d.base.id.as_string(),
            code: d.base.code,
            name: d.name,
            license_class: d.license_class,
            phone: d.phone,
            status: d.status.to_string(),
            status_kind: d.status,
            trips_completed: i64::from(d.trips_completed),
        }
    }
}

impl TableRow for DriverRow {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "code",
            "name",
            "license_class",
            "phone",
            "status",
            "trips_completed",
        ]
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.clone().into(),
            "code" => self.code.clone().into(),
            "name" => self.name.clone().into(),
            "license_class" => self.license_class.clone().into(),
            "phone" => self.phone.clone().into(),
            "status" => self.status.clone().into(),
            "trips_completed" => self.trips_completed.into(),
            _ => FieldValue::Empty,
        }
    }
}

fn status_variant(status: DriverStatus) -> &'static str {
    match status {
        DriverStatus::Active => "success",
        DriverStatus::OnLeave => "warning",
        DriverStatus::Suspended => "error",
    }
}

fn columns() -> Vec<Column<DriverRow>> {
    vec![
        Column::field("Code", "code"),
        Column::field("Name", "name"),
        Column::field("License", "license_class"),
        Column::field("Phone", "phone"),
        Column::field("Status", "status").with_cell(|row: &DriverRow| {
            let variant = status_variant(row.status_kind);
            let label = row.status.clone();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        }),
        Column::field("Trips", "trips_completed").with_cell(|row: &DriverRow| {
            view! { <span class="table__cell-number">{row.trips_completed.to_string()}</span> }
                .into_any()
        }),
    ]
}

#[component]
pub fn DriverList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<DriverRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        spawn_local(async move {
            match service::fetch_drivers().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let open_details = move |row: DriverRow| {
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
                    if !confirm("Delete this driver? This cannot be undone.") {
                        return;
                    }
                    let handle = handle.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        if service::delete_drivers(&[id]).await.is_ok() {
                            handle.close();
                            fetch();
                        }
                    });
                }
            });
            let pairs = vec![
                ("License class", row.license_class.clone()),
                ("Phone", row.phone.clone()),
                ("Status", row.status.clone()),
                ("Trips completed", row.trips_completed.to_string()),
            ];
            view! {
                <DetailList
                    title=row.name.clone()
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
            <PageHeader title="Drivers" subtitle="Driver roster and availability">
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
                search_placeholder="Search drivers..."
                empty_message="No drivers found"
                on_row_click=Callback::new(open_details)
            />
        </div>
    }
}
