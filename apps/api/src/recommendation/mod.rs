// Major recommendations: form input → prompt → Gemini → validated records.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
