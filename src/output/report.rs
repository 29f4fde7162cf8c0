//! Result formatting and emission.
//!
//! Every result is emitted twice: a human-readable line on stdout for
//! interactive use, and the same body behind a fixed `result::` marker on the
//! tracing sink for extraction by external tooling. The marker prefixes are a
//! wire format consumed by downstream parsers and must not change.

use colored::Colorize;

/// Marker prefixing machine-parsable result lines.
pub const RESULT_MARKER: &str = "result::";

/// Marker prefixing category annotation lines.
pub const CATEGORY_MARKER: &str = "category::";

/// Format a time in seconds as microseconds with one decimal place.
pub fn format_time(seconds: f64) -> String {
    format!("{:.1} us", seconds * 1e6)
}

/// Build the fixed-column display body for a result.
///
/// Columns: name left-padded to 32, time string right-padded to 12, noise
/// percentage (`stddev / mean * 100`) right-padded to 5, throughput
/// (`1 / mean` op/s) right-padded to 11, each with one decimal place.
pub fn format_result(name: &str, mean: f64, stddev: f64) -> String {
    let time = format_time(mean);
    let noise = format!("{:.1}", stddev / mean * 100.0);
    let throughput = format!("{:.1}", 1.0 / mean);
    format!("{name:>32}: {time:<12} (sd {noise:<5}%, {throughput:<11} op/s)")
}

/// The machine-parsable line for a formatted result body.
pub fn result_line(body: &str) -> String {
    format!("{RESULT_MARKER} {body}")
}

/// The machine-parsable line announcing a category of results.
pub fn category_line(name: &str) -> String {
    format!("{CATEGORY_MARKER} {name}")
}

/// Emits formatted results through the human and machine channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter;

impl Reporter {
    /// Create a reporter.
    pub fn new() -> Self {
        Self
    }

    /// Emit one result: the display body to stdout, the marker line to the
    /// tracing sink.
    pub fn emit(&self, name: &str, body: &str) {
        println!("{}", body.bright_white());
        tracing::info!(target: "microbench", benchmark = name, "{}", result_line(body));
    }

    /// Emit a category annotation grouping the results that follow it.
    ///
    /// Pure side effect; touches no measurement state.
    pub fn category(&self, name: &str) {
        println!("{}", name.cyan().bold());
        tracing::info!(target: "microbench", "{}", category_line(name));
    }
}
