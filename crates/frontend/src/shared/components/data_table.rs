//! Generic data view: client-side search, sort and row selection over an
//! arbitrary row collection.
//!
//! List pages describe their rows once (a [`TableRow`] impl plus a
//! [`Column`] vec) and get a searchable, sortable, selectable table.
//! The filtered-then-sorted projection is derived on every render and
//! never cached.
//!
//! ```rust,ignore
//! <DataTable
//!     rows=Signal::derive(move || items.get())
//!     columns=vec![
//!         Column::field("Code", "code"),
//!         Column::field("Status", "status").with_cell(|row: &OrderRow| status_badge(row)),
//!         Column::computed("Lane", |row: &OrderRow| format!("{} → {}", row.origin, row.destination)),
//!     ]
//!     selectable=true
//!     on_row_click=Callback::new(move |row: OrderRow| open_details(row.id))
//! />
//! ```

use crate::shared::components::table_checkbox::TableCheckbox;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// Dynamic field access
// ============================================================================

/// Raw value of one row field.
///
/// Carries enough typing for three-way comparison during sort; the textual
/// form is what search and plain cell rendering use.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Empty,
}

impl FieldValue {
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Float(x) => x.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Empty => String::new(),
        }
    }

    /// Three-way comparison of raw values.
    ///
    /// Values of incomparable kinds (and NaN) compare as `Equal`, which keeps
    /// a stable sort a no-op instead of panicking.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Text(a), Text(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
            (Bool(a), Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Int(n as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Row type displayable by [`DataTable`].
pub trait TableRow: Clone + Send + Sync + 'static {
    /// Every field of the row; search scans all of them, none is exempt.
    fn fields() -> &'static [&'static str];

    /// Raw value of a field. Unknown names yield [`FieldValue::Empty`], so a
    /// bad sort claim degrades to a stable no-op instead of failing.
    fn field(&self, name: &str) -> FieldValue;

    /// Key of the row under the configured key field; must be unique across
    /// the collection.
    fn key(&self, key_field: &str) -> String {
        self.field(key_field).as_text()
    }
}

// ============================================================================
// Column specification
// ============================================================================

type ComputeFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type CellFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// How a column reads its value from a row.
///
/// Only `Field` columns are click-sortable; `Computed` columns never are.
#[derive(Clone)]
pub enum Accessor<T> {
    Field(&'static str),
    Computed(ComputeFn<T>),
}

/// One column of the table: header text, accessor and an optional custom
/// cell renderer.
#[derive(Clone)]
pub struct Column<T> {
    pub header: String,
    pub accessor: Accessor<T>,
    pub cell: Option<CellFn<T>>,
}

impl<T: TableRow> Column<T> {
    pub fn field(header: impl Into<String>, name: &'static str) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Field(name),
            cell: None,
        }
    }

    pub fn computed(
        header: impl Into<String>,
        f: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Computed(Arc::new(f)),
            cell: None,
        }
    }

    /// Replace plain text rendering with a custom cell view.
    pub fn with_cell(mut self, f: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        self.cell = Some(Arc::new(f));
        self
    }

    fn sort_field(&self) -> Option<&'static str> {
        match self.accessor {
            Accessor::Field(name) => Some(name),
            Accessor::Computed(_) => None,
        }
    }
}

/// Rendering precedence: computed accessor, then custom cell, then the
/// textual form of the named field.
fn cell_content<T: TableRow>(column: &Column<T>, row: &T) -> AnyView {
    match &column.accessor {
        Accessor::Computed(f) => f(row).into_any(),
        Accessor::Field(name) => match &column.cell {
            Some(cell) => cell(row),
            None => row.field(name).as_text().into_any(),
        },
    }
}

// ============================================================================
// View state and derived projection
// ============================================================================

/// Search/sort/selection state owned by one table instance.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub search: String,
    pub sort_field: Option<String>,
    pub sort_ascending: bool,
    pub selected: HashSet<String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_field: None,
            sort_ascending: true,
            selected: HashSet::new(),
        }
    }
}

impl TableState {
    /// Header click: same field flips direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_ascending = true;
        }
    }

    /// All-selected means the selected set is exactly as large as the
    /// projection and the projection is non-empty.
    pub fn all_selected(&self, projection_len: usize) -> bool {
        projection_len > 0 && self.selected.len() == projection_len
    }

    /// Header checkbox click: clear when all projected rows are selected,
    /// otherwise select exactly the projection's keys. Selection is scoped
    /// to what is currently visible post-filter.
    pub fn toggle_select_all(&mut self, projection_keys: &[String]) {
        if self.all_selected(projection_keys.len()) {
            self.selected.clear();
        } else {
            self.selected = projection_keys.iter().cloned().collect();
        }
    }

    pub fn toggle_selected(&mut self, key: &str, checked: bool) {
        if checked {
            self.selected.insert(key.to_string());
        } else {
            self.selected.remove(key);
        }
    }
}

fn matches_search<T: TableRow>(row: &T, needle_lower: &str) -> bool {
    T::fields()
        .iter()
        .any(|f| row.field(f).as_text().to_lowercase().contains(needle_lower))
}

/// Filtered-then-sorted projection of the input rows.
///
/// Descending reverses the comparison result rather than the final array, so
/// equal-keyed rows keep their relative order in either direction.
pub fn project<T: TableRow>(rows: &[T], state: &TableState) -> Vec<T> {
    let needle = state.search.to_lowercase();
    let mut out: Vec<T> = if needle.is_empty() {
        rows.to_vec()
    } else {
        rows.iter()
            .filter(|r| matches_search(*r, &needle))
            .cloned()
            .collect()
    };

    if let Some(field) = &state.sort_field {
        out.sort_by(|a, b| {
            let ord = a.field(field).compare(&b.field(field));
            if state.sort_ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    out
}

fn sort_indicator(current: Option<&str>, field: &str, ascending: bool) -> &'static str {
    if current == Some(field) {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

// ============================================================================
// Component
// ============================================================================

#[component]
pub fn DataTable<T>(
    /// Row collection in caller-defined order
    #[prop(into)]
    rows: Signal<Vec<T>>,

    /// Ordered column specification
    columns: Vec<Column<T>>,

    /// Show the search box
    #[prop(optional, default = true)]
    searchable: bool,

    #[prop(optional, into)] search_placeholder: Option<String>,

    /// Message of the single full-width row shown when the projection is empty
    #[prop(optional, into)]
    empty_message: Option<String>,

    /// Invoked with the full row record on body-row click (checkbox clicks
    /// excluded)
    #[prop(optional, into)]
    on_row_click: Option<Callback<T>>,

    /// Field whose value uniquely identifies a row
    #[prop(optional, default = "id")]
    key_field: &'static str,

    /// Show the leading checkbox column
    #[prop(optional)]
    selectable: bool,
) -> impl IntoView
where
    T: TableRow,
{
    let state = RwSignal::new(TableState::default());
    let columns = StoredValue::new(columns);

    let placeholder = search_placeholder.unwrap_or_else(|| "Search...".to_string());
    let empty_message = empty_message.unwrap_or_else(|| "No records found".to_string());
    let has_row_click = on_row_click.is_some();
    let column_count = columns.with_value(|cols| cols.len()) + usize::from(selectable);

    let header_checked = Signal::derive(move || {
        let st = state.get();
        st.all_selected(project(&rows.get(), &st).len())
    });

    let toggle_all = move |_| {
        let keys: Vec<String> = project(&rows.get_untracked(), &state.get_untracked())
            .iter()
            .map(|r| r.key(key_field))
            .collect();
        state.update(|s| s.toggle_select_all(&keys));
    };

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let header = col.header.clone();
                match col.sort_field() {
                    Some(name) => view! {
                        <th
                            class="table__header-cell table__header-cell--sortable"
                            on:click=move |_| state.update(|s| s.toggle_sort(name))
                        >
                            <div class="table__sortable-header">
                                {header}
                                <span class="table__sort-indicator">
                                    {move || {
                                        state
                                            .with(|s| {
                                                sort_indicator(
                                                    s.sort_field.as_deref(),
                                                    name,
                                                    s.sort_ascending,
                                                )
                                            })
                                    }}
                                </span>
                            </div>
                        </th>
                    }
                    .into_any(),
                    None => view! { <th class="table__header-cell">{header}</th> }.into_any(),
                }
            })
            .collect_view()
    });

    let body = {
        let empty_message = empty_message.clone();
        move || {
            let st = state.get();
            let projection = project(&rows.get(), &st);

            if projection.is_empty() {
                return view! {
                    <tr class="table__row table__row--empty">
                        <td class="table__cell table__cell--empty" colspan=column_count.to_string()>
                            {empty_message.clone()}
                        </td>
                    </tr>
                }
                .into_any();
            }

            projection
                .into_iter()
                .map(|row| {
                    let key = row.key(key_field);
                    let key_for_selected = key.clone();
                    let row_for_click = row.clone();
                    let is_selected = Signal::derive(move || {
                        state.with(|s| s.selected.contains(&key_for_selected))
                    });

                    let cells = columns.with_value(|cols| {
                        cols.iter()
                            .map(|col| {
                                view! { <td class="table__cell">{cell_content(col, &row)}</td> }
                            })
                            .collect_view()
                    });

                    view! {
                        <tr
                            class="table__row"
                            class:table__row--selected=is_selected
                            class:table__row--clickable=has_row_click
                            on:click=move |_| {
                                if let Some(cb) = on_row_click {
                                    cb.run(row_for_click.clone());
                                }
                            }
                        >
                            {selectable
                                .then(|| {
                                    view! {
                                        <TableCheckbox
                                            checked=is_selected
                                            on_change=Callback::new(move |checked| {
                                                state.update(|s| s.toggle_selected(&key, checked));
                                            })
                                        />
                                    }
                                })}
                            {cells}
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="data-table">
            {searchable
                .then(|| {
                    view! {
                        <div class="data-table__toolbar">
                            <input
                                type="text"
                                class="data-table__search"
                                placeholder=placeholder
                                prop:value=move || state.with(|s| s.search.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.search = value);
                                }
                            />
                        </div>
                    }
                })}
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {selectable
                                .then(|| {
                                    view! {
                                        <th class="table__header-cell table__header-cell--checkbox">
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=header_checked
                                                on:change=toggle_all
                                            />
                                        </th>
                                    }
                                })}
                            {header_cells}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestRow {
        id: i64,
        name: String,
        qty: i64,
    }

    impl TestRow {
        fn new(id: i64, name: &str, qty: i64) -> Self {
            Self {
                id,
                name: name.to_string(),
                qty,
            }
        }
    }

    impl TableRow for TestRow {
        fn fields() -> &'static [&'static str] {
            &["id", "name", "qty"]
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "id" => self.id.into(),
                "name" => self.name.clone().into(),
                "qty" => self.qty.into(),
                _ => FieldValue::Empty,
            }
        }
    }

    fn rows() -> Vec<TestRow> {
        vec![
            TestRow::new(1, "Alpha", 5),
            TestRow::new(2, "beta", 5),
            TestRow::new(3, "Gamma", 3),
        ]
    }

    #[test]
    fn default_state_has_no_filter_sort_or_selection() {
        let st = TableState::default();
        assert!(st.search.is_empty());
        assert_eq!(st.sort_field, None);
        assert!(st.sort_ascending);
        assert!(st.selected.is_empty());
    }

    #[test]
    fn filter_is_case_insensitive_across_all_fields() {
        let mut st = TableState::default();

        st.search = "a".to_string();
        let out = project(&rows(), &st);
        assert_eq!(out.len(), 3); // "Alpha", "beta", "Gamma" all contain "a"

        st.search = "ALPH".to_string();
        let out = project(&rows(), &st);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);

        // Numeric fields are searched through their textual form
        st.search = "5".to_string();
        let out = project(&rows(), &st);
        assert_eq!(out.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn unmatched_filter_yields_empty_projection() {
        let mut st = TableState::default();
        st.search = "zzz".to_string();
        assert!(project(&rows(), &st).is_empty());
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        let mut st = TableState::default();
        st.sort_field = Some("qty".to_string());

        let out = project(&rows(), &st);
        // qty 3 first, then the two qty-5 rows in their original mutual order
        assert_eq!(out.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1, 2]);

        st.sort_ascending = false;
        let out = project(&rows(), &st);
        // Reversing the comparison, not the array: ties keep original order
        assert_eq!(out.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn toggle_sort_flips_direction_then_restores() {
        let mut st = TableState::default();

        st.toggle_sort("name");
        assert_eq!(st.sort_field.as_deref(), Some("name"));
        assert!(st.sort_ascending);

        st.toggle_sort("name");
        assert!(!st.sort_ascending);

        st.toggle_sort("name");
        assert!(st.sort_ascending);

        // A different field resets to ascending
        st.toggle_sort("name");
        st.toggle_sort("qty");
        assert_eq!(st.sort_field.as_deref(), Some("qty"));
        assert!(st.sort_ascending);
    }

    #[test]
    fn no_sort_field_preserves_filtered_order() {
        let mut st = TableState::default();
        st.search = "a".to_string();
        let out = project(&rows(), &st);
        assert_eq!(out.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn unknown_sort_field_is_a_stable_no_op() {
        let mut st = TableState::default();
        st.sort_field = Some("nonexistent".to_string());
        let out = project(&rows(), &st);
        assert_eq!(out.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn select_all_is_scoped_to_the_filtered_projection() {
        let data = rows();
        let mut st = TableState::default();
        st.search = "5".to_string(); // matches rows 1 and 2 via qty

        let keys: Vec<String> = project(&data, &st).iter().map(|r| r.key("id")).collect();
        st.toggle_select_all(&keys);
        assert_eq!(st.selected.len(), 2);
        assert!(st.selected.contains("1"));
        assert!(st.selected.contains("2"));
        assert!(!st.selected.contains("3"));

        // Clearing the search keeps the previous selection
        st.search.clear();
        assert_eq!(st.selected.len(), 2);

        // All three now visible, only two selected: not all-selected
        assert!(!st.all_selected(project(&data, &st).len()));
    }

    #[test]
    fn select_all_toggles_off_when_everything_is_selected() {
        let data = rows();
        let mut st = TableState::default();

        let keys: Vec<String> = project(&data, &st).iter().map(|r| r.key("id")).collect();
        st.toggle_select_all(&keys);
        assert!(st.all_selected(3));

        st.toggle_select_all(&keys);
        assert!(st.selected.is_empty());
    }

    #[test]
    fn empty_projection_is_never_all_selected() {
        let st = TableState::default();
        assert!(!st.all_selected(0));
    }

    #[test]
    fn incomparable_values_compare_equal() {
        assert_eq!(
            FieldValue::Text("a".into()).compare(&FieldValue::Int(1)),
            Ordering::Equal
        );
        assert_eq!(
            FieldValue::Empty.compare(&FieldValue::Float(1.0)),
            Ordering::Equal
        );
        // Cross numeric kinds do compare
        assert_eq!(
            FieldValue::Int(2).compare(&FieldValue::Float(1.5)),
            Ordering::Greater
        );
    }

    #[test]
    fn missing_field_renders_as_empty_text() {
        let row = TestRow::new(1, "Alpha", 5);
        assert_eq!(row.field("nope"), FieldValue::Empty);
        assert_eq!(row.field("nope").as_text(), "");
    }
}
