//! Plain-text transcript offered for download. Mirrors the cards, one
//! divider-delimited block per recommendation.

use crate::recommendation::models::{RecommendationRecord, RecommendationSet};

pub const TRANSCRIPT_TITLE: &str = "Career Exploration Results for High School Students";
pub const DIVIDER: &str = "========================================";
pub const TRANSCRIPT_FILENAME: &str = "career_recommendations.txt";

const MAJOR_LABEL: &str = "▶ Recommended major: ";
const INTRODUCTION_LABEL: &str = "※ Introduction: ";
const REASON_LABEL: &str = "※ Why it fits: ";
const CURRICULUM_HEADING: &str = "※ Key curriculum:";
const CAREER_HEADING: &str = "※ Career paths:";
const ITEM_BULLET: &str = "  - ";

pub fn build_transcript(recommendations: &RecommendationSet) -> String {
    let mut out = format!("{TRANSCRIPT_TITLE}\n\n");
    for record in recommendations {
        push_block(&mut out, record);
    }
    out
}

fn push_block(out: &mut String, record: &RecommendationRecord) {
    out.push_str(&format!("{DIVIDER}\n"));
    out.push_str(&format!("{MAJOR_LABEL}{}\n", record.major_name));
    out.push_str(&format!("{DIVIDER}\n"));
    out.push_str(&format!("{INTRODUCTION_LABEL}{}\n\n", record.introduction));
    out.push_str(&format!("{REASON_LABEL}{}\n\n", record.reason));

    out.push_str(&format!("{CURRICULUM_HEADING}\n"));
    for item in &record.curriculum {
        out.push_str(&format!("{ITEM_BULLET}{item}\n"));
    }
    out.push('\n');

    out.push_str(&format!("{CAREER_HEADING}\n"));
    for item in &record.career {
        out.push_str(&format!("{ITEM_BULLET}{item}\n"));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::parser::parse_recommendations;
    use crate::testing::sample_response;

    /// Reads a transcript back into records. Only the fields the text format
    /// carries unambiguously on single lines are recovered.
    fn read_back(transcript: &str) -> Vec<RecommendationRecord> {
        #[derive(PartialEq)]
        enum List {
            None,
            Curriculum,
            Career,
        }

        let mut records: Vec<RecommendationRecord> = Vec::new();
        let mut list = List::None;

        for line in transcript.lines() {
            if let Some(name) = line.strip_prefix(MAJOR_LABEL) {
                records.push(RecommendationRecord {
                    major_name: name.to_string(),
                    introduction: String::new(),
                    reason: String::new(),
                    curriculum: vec![],
                    career: vec![],
                });
                list = List::None;
                continue;
            }
            let Some(current) = records.last_mut() else {
                continue;
            };
            if let Some(text) = line.strip_prefix(INTRODUCTION_LABEL) {
                current.introduction = text.to_string();
            } else if let Some(text) = line.strip_prefix(REASON_LABEL) {
                current.reason = text.to_string();
            } else if line == CURRICULUM_HEADING {
                list = List::Curriculum;
            } else if line == CAREER_HEADING {
                list = List::Career;
            } else if let Some(item) = line.strip_prefix(ITEM_BULLET) {
                match list {
                    List::Curriculum => current.curriculum.push(item.to_string()),
                    List::Career => current.career.push(item.to_string()),
                    List::None => {}
                }
            }
        }
        records
    }

    #[test]
    fn test_transcript_has_one_block_per_record() {
        let set = parse_recommendations(&sample_response()).unwrap();
        let transcript = build_transcript(&set);

        assert!(transcript.starts_with(TRANSCRIPT_TITLE));
        assert_eq!(transcript.matches(DIVIDER).count(), 6);
        assert_eq!(transcript.matches(MAJOR_LABEL).count(), 3);
    }

    #[test]
    fn test_transcript_block_layout() {
        let set = vec![RecommendationRecord {
            major_name: "Statistics".to_string(),
            introduction: "Data science".to_string(),
            reason: "You like math".to_string(),
            curriculum: vec!["Probability".to_string()],
            career: vec!["Actuary".to_string(), "Analyst".to_string()],
        }];

        let expected = format!(
            "{TRANSCRIPT_TITLE}\n\n\
             {DIVIDER}\n\
             ▶ Recommended major: Statistics\n\
             {DIVIDER}\n\
             ※ Introduction: Data science\n\n\
             ※ Why it fits: You like math\n\n\
             ※ Key curriculum:\n  - Probability\n\n\
             ※ Career paths:\n  - Actuary\n  - Analyst\n\n"
        );
        assert_eq!(build_transcript(&set), expected);
    }

    #[test]
    fn test_transcript_round_trip_preserves_content() {
        let set = parse_recommendations(&sample_response()).unwrap();
        let recovered = read_back(&build_transcript(&set));
        assert_eq!(recovered, set);
    }

    #[test]
    fn test_empty_set_is_title_only() {
        assert_eq!(build_transcript(&vec![]), format!("{TRANSCRIPT_TITLE}\n\n"));
    }
}
