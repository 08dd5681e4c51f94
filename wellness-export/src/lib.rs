//! wellness-export: CSV export and plain-text rendering of generated plans

pub mod csv_export;
pub mod error;
pub mod text;

pub use csv_export::plan_to_csv;
pub use error::ExportError;
pub use text::{render_plan_text, render_week_text};
