pub mod d100_kpi_overview;
