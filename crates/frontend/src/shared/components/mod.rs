pub mod data_table;
pub mod date_range_picker;
pub mod detail_list;
pub mod page_header;
pub mod stat_card;
pub mod table_checkbox;
pub mod ui;
