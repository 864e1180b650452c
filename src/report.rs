// Report module: pure formatting helpers for everything the tool prints.
// Keeping these free of I/O makes the output byte-for-byte testable.

use serde_json::Value;

use crate::api::IdentifyResponse;

/// Pretty-print a JSON document with 2-space indentation. serde_json
/// leaves non-ASCII characters unescaped, which matters for accented
/// species and error messages.
pub fn pretty(value: &Value) -> String {
    // A Value never fails to serialize.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Convert a confidence score in [0, 1] to a percentage with exactly two
/// decimal places, e.g. 0.8732 -> "87.32 %".
pub fn percent(score: f64) -> String {
    format!("{:.2} %", score * 100.0)
}

/// Render the final report: the top candidate with its confidence, or a
/// no-match line when the service recognized nothing. An empty result
/// list is a normal outcome, not an error.
pub fn best_match(response: &IdentifyResponse) -> String {
    match response.results.first() {
        Some(best) => format!(
            "\nBEST MATCH:\nSpecies: {}\nConfidence: {}",
            best.species.scientific_name_without_author,
            percent(best.score)
        ),
        None => "No plant recognized".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn percent_rounds_to_two_decimals() {
        assert_eq!(percent(0.8732), "87.32 %");
        assert_eq!(percent(0.87), "87.00 %");
        assert_eq!(percent(1.0), "100.00 %");
        assert_eq!(percent(0.0), "0.00 %");
    }

    #[test]
    fn percent_is_monotonic() {
        let scores = [0.0, 0.1, 0.4999, 0.5, 0.8732, 0.8733, 1.0];
        let rendered: Vec<f64> = scores
            .iter()
            .map(|s| percent(*s).trim_end_matches(" %").parse().unwrap())
            .collect();
        assert!(rendered.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn pretty_uses_two_space_indent_and_keeps_non_ascii() {
        let value = json!({ "species": "Érable à sucre" });
        let out = pretty(&value);
        assert_eq!(out, "{\n  \"species\": \"Érable à sucre\"\n}");
    }

    #[test]
    fn best_match_reports_first_candidate() {
        let response = IdentifyResponse::from_value(&json!({
            "results": [
                { "score": 0.87, "species": { "scientificNameWithoutAuthor": "Rosa gallica" } },
                { "score": 0.02, "species": { "scientificNameWithoutAuthor": "Rosa canina" } }
            ]
        }))
        .unwrap();
        let out = best_match(&response);
        assert!(out.contains("Rosa gallica"));
        assert!(out.contains("87.00 %"));
        assert!(!out.contains("Rosa canina"));
    }

    #[test]
    fn empty_results_render_no_match_line() {
        let response = IdentifyResponse::from_value(&json!({ "results": [] })).unwrap();
        assert_eq!(best_match(&response), "No plant recognized");
    }

    #[test]
    fn rendering_is_deterministic() {
        let value = json!({
            "results": [
                { "score": 0.8732, "species": { "scientificNameWithoutAuthor": "Rosa gallica" } }
            ]
        });
        let a = best_match(&IdentifyResponse::from_value(&value).unwrap());
        let b = best_match(&IdentifyResponse::from_value(&value).unwrap());
        assert_eq!(a, b);
        assert_eq!(pretty(&value), pretty(&value));
    }
}
