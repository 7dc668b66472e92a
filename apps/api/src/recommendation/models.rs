use serde::{Deserialize, Serialize};

/// The four free-text answers from the submission form.
/// Field names match the HTML form and the JSON API body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub hobby: String,
    #[serde(default)]
    pub subject: String,
}

impl FormInput {
    /// Labels of the fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("job", &self.job),
            ("interest", &self.interest),
            ("hobby", &self.hobby),
            ("subject", &self.subject),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// One recommended field of study. Every key is required: a record missing
/// any of them fails the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub major_name: String,
    pub introduction: String,
    pub reason: String,
    pub curriculum: Vec<String>,
    pub career: Vec<String>,
}

/// Ordered result of one successful submission. Three entries by prompt contract.
pub type RecommendationSet = Vec<RecommendationRecord>;
