pub mod json;
pub mod text;

pub use json::{write_json_report, GapReport};
pub use text::{format_tally_line, write_report, ReportOptions};
