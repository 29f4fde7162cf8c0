//! JSON serialization of benchmark results.

use crate::result::BenchResult;

/// Serialize a result to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `BenchResult`).
pub fn to_json(result: &BenchResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a result to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `BenchResult`).
pub fn to_json_pretty(result: &BenchResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result() -> BenchResult {
        BenchResult {
            name: "sha256/1k".to_string(),
            mean: 0.0000042,
            stddev: 0.0000002,
            samples: vec![0.0000041, 0.0000042, 0.0000043],
        }
    }

    #[test]
    fn compact_json_round_trips() {
        let result = make_result();
        let json = to_json(&result).unwrap();
        let restored: BenchResult = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.name, "sha256/1k");
        assert_eq!(restored.samples.len(), 3);
        assert_eq!(restored.mean, result.mean);
    }

    #[test]
    fn pretty_json_has_newlines() {
        let json = to_json_pretty(&make_result()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"name\""));
    }
}
