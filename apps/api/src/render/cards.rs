use crate::recommendation::models::{RecommendationRecord, RecommendationSet};
use crate::render::escape_html;

/// One card per record, in order.
pub fn render_cards(recommendations: &RecommendationSet) -> String {
    recommendations.iter().map(render_card).collect()
}

fn render_card(record: &RecommendationRecord) -> String {
    format!(
        r#"<div class="card">
  <div class="card-title">{title}</div>
  <p>{introduction}</p>
  <div class="section-title">✨ Why we recommend it</div>
  <p>{reason}</p>
  <div class="section-title">📚 Key curriculum</div>
  <ul>{curriculum}</ul>
  <div class="section-title">🚀 Career paths</div>
  <ul>{career}</ul>
</div>
"#,
        title = escape_html(&record.major_name),
        introduction = escape_html(&record.introduction),
        reason = escape_html(&record.reason),
        curriculum = list_items(&record.curriculum),
        career = list_items(&record.career),
    )
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}
