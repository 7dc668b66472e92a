//! Response Parser: turns the model's raw text into a validated RecommendationSet.

use thiserror::Error;

use crate::recommendation::models::{RecommendationRecord, RecommendationSet};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("model response is not a valid recommendation list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses the whole response eagerly. A syntax error, a non-array document or a
/// single record with a missing or mistyped key rejects the entire batch.
pub fn parse_recommendations(raw: &str) -> Result<RecommendationSet, ParseError> {
    let text = strip_json_fences(raw);
    let records: Vec<RecommendationRecord> = serde_json::from_str(text)?;
    Ok(records)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_RECORDS: &str = r#"[
        {"majorName": "Computer Science", "introduction": "Study of computation",
         "reason": "Matches your coding hobby", "curriculum": ["Algorithms", "Operating Systems"],
         "career": ["Software engineer", "Researcher"]},
        {"majorName": "Environmental Engineering", "introduction": "Engineering for the planet",
         "reason": "You care about the environment", "curriculum": ["Hydrology"],
         "career": ["Environmental consultant"]},
        {"majorName": "Statistics", "introduction": "Science of data",
         "reason": "You like math", "curriculum": ["Probability", "Regression"],
         "career": ["Data scientist", "Actuary"]}
    ]"#;

    #[test]
    fn test_parses_three_records_in_order() {
        let set = parse_recommendations(THREE_RECORDS).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set[0].major_name, "Computer Science");
        assert_eq!(set[1].major_name, "Environmental Engineering");
        assert_eq!(set[2].major_name, "Statistics");
        assert_eq!(set[0].curriculum, vec!["Algorithms", "Operating Systems"]);
    }

    #[test]
    fn test_not_json_is_rejected() {
        assert!(parse_recommendations("not json").is_err());
    }

    #[test]
    fn test_object_instead_of_array_is_rejected() {
        let raw = r#"{"majorName": "X", "introduction": "i", "reason": "r", "curriculum": [], "career": []}"#;
        assert!(parse_recommendations(raw).is_err());
    }

    #[test]
    fn test_one_record_missing_key_rejects_batch() {
        let raw = r#"[
            {"majorName": "A", "introduction": "i", "reason": "r", "curriculum": [], "career": []},
            {"majorName": "B", "introduction": "i", "curriculum": [], "career": []}
        ]"#;
        let err = parse_recommendations(raw).unwrap_err();
        assert!(err.to_string().contains("reason"));
    }

    #[test]
    fn test_mistyped_list_rejects_batch() {
        let raw = r#"[{"majorName": "A", "introduction": "i", "reason": "r", "curriculum": "Algebra", "career": []}]"#;
        assert!(parse_recommendations(raw).is_err());
    }

    #[test]
    fn test_record_count_is_not_enforced() {
        let raw = r#"[{"majorName": "A", "introduction": "i", "reason": "r", "curriculum": [], "career": []}]"#;
        assert_eq!(parse_recommendations(raw).unwrap().len(), 1);
    }

    #[test]
    fn test_fenced_response_is_accepted() {
        let raw = format!("```json\n{THREE_RECORDS}\n```");
        assert_eq!(parse_recommendations(&raw).unwrap().len(), 3);
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n[1]\n```";
        assert_eq!(strip_json_fences(input), "[1]");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        assert_eq!(strip_json_fences("  [1] "), "[1]");
    }
}
