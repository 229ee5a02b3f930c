use crate::data::service;
use crate::shared::browser::confirm;
use crate::shared::components::data_table::{Column, DataTable, FieldValue, TableRow};
use crate::shared::components::detail_list::DetailList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date_str;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_money;
use contracts::domain::a006_maintenance_task::{
    MaintenancePriority, MaintenanceStatus, MaintenanceTask,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct MaintenanceRow {
    pub id: String,
    pub code: String,
    pub vehicle: String,
    pub task: String,
    /// ISO form so the raw value sorts chronologically
    pub due_date: String,
    pub priority: String,
    pub priority_kind: MaintenancePriority,
    /// Numeric rank so the Priority column sorts by severity, not alphabetically
    pub priority_rank: i64,
    pub status: String,
    pub status_kind: MaintenanceStatus,
    pub estimated_cost: f64,
}

impl From<MaintenanceTask> for MaintenanceRow {
    fn from(t: MaintenanceTask) -> Self {
        Self {
            id: t.base.id.as_string(),
            code: t.base.code,
            vehicle: t.vehicle_plate,
            task: t.task,
            due_date: t.due_date.format("%Y-%m-%d").to_string(),
            priority: t.priority.to_string(),
            priority_kind: t.priority,
            priority_rank: t.priority as i64,
            status: t.status.to_string(),
            status_kind: t.status,
            estimated_cost: t.estimated_cost,
        }
    }
}

impl TableRow for MaintenanceRow {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "code",
            "vehicle",
            "task",
            "due_date",
            "priority",
            "priority_rank",
            "status",
            "estimated_cost",
        ]
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.clone().into(),
            "code" => self.code.clone().into(),
            "vehicle" => self.vehicle.clone().into(),
            "task" => self.task.clone().into(),
            "due_date" => self.due_date.clone().into(),
            "priority" => self.priority.clone().into(),
            "priority_rank" => self.priority_rank.into(),
            "status" => self.status.clone().into(),
            "estimated_cost" => self.estimated_cost.into(),
            _ => FieldValue::Empty,
        }
    }
}

fn priority_variant(priority: MaintenancePriority) -> &'static str {
    match priority {
        MaintenancePriority::Low => "neutral",
        MaintenancePriority::Medium => "primary",
        MaintenancePriority::High => "warning",
        MaintenancePriority::Critical => "error",
    }
}

fn status_variant(status: MaintenanceStatus) -> &'static str {
    match status {
        MaintenanceStatus::Scheduled => "neutral",
        MaintenanceStatus::InProgress => "primary",
        MaintenanceStatus::Done => "success",
        MaintenanceStatus::Overdue => "error",
    }
}

fn columns() -> Vec<Column<MaintenanceRow>> {
    vec![
        Column::field("Code", "code"),
        Column::field("Vehicle", "vehicle"),
        Column::field("Task", "task"),
        Column::field("Due", "due_date")
            .with_cell(|row: &MaintenanceRow| format_date_str(&row.due_date).into_any()),
        Column::field("Priority", "priority_rank").with_cell(|row: &MaintenanceRow| {
            let variant = priority_variant(row.priority_kind);
            let label = row.priority.clone();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        }),
        Column::field("Status", "status").with_cell(|row: &MaintenanceRow| {
            let variant = status_variant(row.status_kind);
            let label = row.status.clone();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        }),
        Column::field("Est. cost", "estimated_cost").with_cell(|row: &MaintenanceRow| {
            view! { <span class="table__cell-number">{format_money(row.estimated_cost)}</span> }
                .into_any()
        }),
    ]
}

#[component]
pub fn MaintenanceList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<MaintenanceRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        spawn_local(async move {
            match service::fetch_maintenance_tasks().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let open_details = move |row: MaintenanceRow| {
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
                    if !confirm("Delete this maintenance task? This cannot be undone.") {
                        return;
                    }
                    let handle = handle.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        if service::delete_maintenance_tasks(&[id]).await.is_ok() {
                            handle.close();
                            fetch();
                        }
                    });
                }
            });
            let pairs = vec![
                ("Vehicle", row.vehicle.clone()),
                ("Task", row.task.clone()),
                ("Due date", format_date_str(&row.due_date)),
                ("Priority", row.priority.clone()),
                ("Status", row.status.clone()),
                ("Estimated cost", format_money(row.estimated_cost)),
            ];
            view! {
                <DetailList
                    title=format!("Task {}", row.code)
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
            <PageHeader title="Maintenance" subtitle="Scheduled service work on the fleet">
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
                search_placeholder="Search tasks..."
                empty_message="No maintenance tasks found"
                on_row_click=Callback::new(open_details)
            />
        </div>
    }
}
