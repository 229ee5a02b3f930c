use crate::data::service;
use crate::shared::browser::confirm;
use crate::shared::components::data_table::{Column, DataTable, FieldValue, TableRow};
use crate::shared::components::detail_list::DetailList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a007_returnable::ReturnableAccount;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct ReturnableRow {
    pub id: String,
    pub code: String,
    pub kind: String,
    pub customer: String,
    pub issued: i64,
    pub returned: i64,
    pub outstanding: i64,
}

impl From<ReturnableAccount> for ReturnableRow {
    fn from(a: ReturnableAccount) -> Self {
        Self {
            id: a.base.id.as_string(),
            code: a.base.code.clone(),
            kind: a.kind.to_string(),
            customer: a.customer.clone(),
            issued: i64::from(a.issued),
            returned: i64::from(a.returned),
            outstanding: i64::from(a.outstanding()),
        }
    }
}

impl TableRow for ReturnableRow {
    fn fields() -> &'static [&'static str] {
        &[
            "id",
            "code",
            "kind",
            "customer",
            "issued",
            "returned",
            "outstanding",
        ]
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.clone().into(),
            "code" => self.code.clone().into(),
            "kind" => self.kind.clone().into(),
            "customer" => self.customer.clone().into(),
            "issued" => self.issued.into(),
            "returned" => self.returned.into(),
            "outstanding" => self.outstanding.into(),
            _ => FieldValue::Empty,
        }
    }
}

fn columns() -> Vec<Column<ReturnableRow>> {
    vec![
        Column::field("Code", "code"),
        Column::field("Customer", "customer"),
        Column::field("Kind", "kind"),
        Column::field("Issued", "issued").with_cell(|row: &ReturnableRow| {
            view! { <span class="table__cell-number">{row.issued.to_string()}</span> }.into_any()
        }),
        Column::field("Returned", "returned").with_cell(|row: &ReturnableRow| {
            view! { <span class="table__cell-number">{row.returned.to_string()}</span> }
                .into_any()
        }),
        Column::field("Outstanding", "outstanding").with_cell(|row: &ReturnableRow| {
            let count = row.outstanding;
            if count > 0 {
                view! { <Badge variant="warning">{count.to_string()}</Badge> }.into_any()
            } else {
                view! { <Badge variant="success">"0"</Badge> }.into_any()
            }
        }),
    ]
}

#[component]
pub fn ReturnableList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ReturnableRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        spawn_local(async move {
            match service::fetch_returnables().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let open_details = move |row: ReturnableRow| {
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
                    if !confirm("Delete this returnable account? This cannot be undone.") {
                        return;
                    }
                    let handle = handle.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        if service::delete_returnables(&[id]).await.is_ok() {
                            handle.close();
                            fetch();
                        }
                    });
                }
            });
            let pairs = vec![
                ("Customer", row.customer.clone()),
                ("Kind", row.kind.clone()),
                ("Issued", row.issued.to_string()),
                ("Returned", row.returned.to_string()),
                ("Outstanding", row.outstanding.to_string()),
            ];
            view! {
                <DetailList
                    title=format!("Account {}", row.code)
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
            <PageHeader title="Returnables" subtitle="Returnable packaging balances per customer">
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
                search_placeholder="Search accounts..."
                empty_message="No returnable accounts found"
                on_row_click=Callback::new(open_details)
            />
        </div>
    }
}
