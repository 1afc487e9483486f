pub mod table;

pub use table::{RowWriter, format_row, format_summary, render_headers};
