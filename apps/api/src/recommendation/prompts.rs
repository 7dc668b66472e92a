// All LLM prompt text for major recommendations.
// User answers are substituted verbatim: whatever the student types reaches the
// model unescaped, prompt injection included. That is accepted behavior.

use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::recommendation::models::FormInput;

/// Persona for the counselor. The JSON-only fragment is appended at build time.
pub const COUNSELOR_SYSTEM: &str = "You are a friendly and professional career counselor \
    for high school students.";

/// Replace: {job}, {interest}, {hobby}, {subject}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Here is what the student told us:
- Desired job: {job}
- Interests: {interest}
- Hobbies and talents: {hobby}
- Preferred subjects: {subject}

Based on this information, recommend 3 university majors that suit this high school student.
You MUST follow the JSON schema below exactly. Output pure JSON text only, without markdown tags (```json).

[
    {
        "majorName": "Name of the major",
        "introduction": "Introduction to the major",
        "reason": "Why it is recommended",
        "curriculum": ["Course 1", "Course 2", ...],
        "career": ["Job 1", "Job 2", ...]
    }
]"#;

/// The instruction pair sent to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

pub fn build_prompts(form: &FormInput) -> PromptPair {
    PromptPair {
        system: format!("{COUNSELOR_SYSTEM} {JSON_ONLY_INSTRUCTION}"),
        user: fill_template(
            RECOMMENDATION_PROMPT_TEMPLATE,
            &[
                ("job", &form.job),
                ("interest", &form.interest),
                ("hobby", &form.hobby),
                ("subject", &form.subject),
            ],
        ),
    }
}
