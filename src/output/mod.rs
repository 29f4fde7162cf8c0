//! Result output: fixed-column display lines, marker-line wire format,
//! and JSON serialization.

pub mod json;
mod report;

pub use report::{
    category_line, format_result, format_time, result_line, Reporter, CATEGORY_MARKER,
    RESULT_MARKER,
};
