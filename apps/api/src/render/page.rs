//! Full-page HTML: sidebar (model choice, credential status), the form,
//! an optional inline notice, and the session's current results.

use crate::catalog::ModelCatalog;
use crate::errors::AppError;
use crate::recommendation::models::FormInput;
use crate::render::cards::render_cards;
use crate::render::escape_html;
use crate::session::StoredResult;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; color: #1f2937; }
.sidebar { width: 260px; min-height: 100vh; padding: 1.5rem; background: #f3f4f6; box-sizing: border-box; }
.main { flex: 1; max-width: 760px; margin: 0 auto; padding: 2rem; }
.main-title { font-size: 3rem; font-weight: bold; text-align: center; margin-bottom: 0.5rem; }
.sub-title { font-size: 1.2rem; color: #6b7280; text-align: center; margin-bottom: 2rem; }
.card { background-color: #f9fafb; padding: 1.5rem; border-radius: 0.5rem; border: 1px solid #e5e7eb; margin-bottom: 1rem; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1); }
.card-title { font-size: 1.5rem; font-weight: bold; color: #2563eb; margin-bottom: 0.5rem; }
.section-title { font-weight: bold; color: #374151; margin-top: 1rem; }
.card ul { margin-top: 0; }
.notice { padding: 0.75rem 1rem; border-radius: 0.5rem; margin: 1rem 0; }
.notice-error { background: #fee2e2; color: #991b1b; }
.notice-warning { background: #fef3c7; color: #92400e; }
label { display: block; margin-top: 0.75rem; font-weight: bold; }
input[type=text], select { width: 100%; padding: 0.5rem; box-sizing: border-box; }
button { width: 100%; margin-top: 1.25rem; padding: 0.75rem; background: #2563eb; color: white; border: 0; border-radius: 0.5rem; font-size: 1rem; }
button:disabled { background: #93c5fd; }
"#;

const BUSY_SCRIPT: &str = r#"
document.getElementById('career-form').addEventListener('submit', function () {
  var model = document.getElementById('model').value;
  var button = document.getElementById('submit');
  button.disabled = true;
  button.textContent = 'AI (' + model + ') is analyzing...';
});
"#;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Error,
    Warning,
}

/// Inline message shown above the results.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        let kind = match err {
            AppError::MissingField(_) => NoticeKind::Warning,
            _ => NoticeKind::Error,
        };
        Notice {
            kind,
            message: err.to_string(),
        }
    }
}

pub struct PageView<'a> {
    pub catalog: &'a ModelCatalog,
    pub selected_model: &'a str,
    pub has_credential: bool,
    pub form: &'a FormInput,
    pub notice: Option<Notice>,
    pub result: Option<&'a StoredResult>,
}

pub fn render_page(view: &PageView<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Career Explorer for High School Students</title>
<style>{STYLE}</style>
</head>
<body>
<aside class="sidebar">
<h2>⚙️ Settings</h2>
{sidebar}
</aside>
<main class="main">
<div class="main-title">🎓 Career Explorer</div>
<div class="sub-title">Find the university major that fits your dream</div>
{form}
{notice}
{results}
</main>
<script>{BUSY_SCRIPT}</script>
</body>
</html>
"#,
        sidebar = render_sidebar(view),
        form = render_form(view.form),
        notice = view.notice.as_ref().map(render_notice).unwrap_or_default(),
        results = view.result.map(render_results).unwrap_or_default(),
    )
}

fn render_sidebar(view: &PageView<'_>) -> String {
    let options: String = view
        .catalog
        .models
        .iter()
        .map(|model| {
            let selected = if model == view.selected_model {
                " selected"
            } else {
                ""
            };
            let model = escape_html(model);
            format!(r#"<option value="{model}"{selected}>{model}</option>"#)
        })
        .collect();

    let mut out = format!(
        r#"<label for="model">AI model</label>
<select id="model" name="model" form="career-form">{options}</select>
"#
    );

    if let Some(warning) = &view.catalog.warning {
        out.push_str(&render_notice(&Notice {
            kind: NoticeKind::Warning,
            message: warning.clone(),
        }));
    }
    if !view.has_credential {
        out.push_str(&render_notice(&Notice {
            kind: NoticeKind::Error,
            message: "An API key must be configured.".to_string(),
        }));
    }
    out
}

fn render_form(form: &FormInput) -> String {
    let field = |name: &str, label: &str, placeholder: &str, value: &str| {
        format!(
            r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" placeholder="{placeholder}" value="{value}">
"#,
            value = escape_html(value),
        )
    };

    format!(
        r#"<form id="career-form" method="post" action="/recommend">
{job}{interest}{hobby}{subject}<button type="submit" id="submit">Get major recommendations</button>
</form>"#,
        job = field("job", "Desired job", "e.g. Software developer", form.job.as_str()),
        interest = field("interest", "Interests", "e.g. AI, environment", form.interest.as_str()),
        hobby = field("hobby", "Hobbies and talents", "e.g. Coding, drawing", form.hobby.as_str()),
        subject = field("subject", "Preferred subjects", "e.g. Math, science", form.subject.as_str()),
    )
}

fn render_notice(notice: &Notice) -> String {
    let class = match notice.kind {
        NoticeKind::Error => "notice-error",
        NoticeKind::Warning => "notice-warning",
    };
    format!(
        r#"<div class="notice {class}">⚠️ {}</div>
"#,
        escape_html(&notice.message)
    )
}

fn render_results(result: &StoredResult) -> String {
    format!(
        r#"<hr>
<h3>📋 Recommendations</h3>
<p class="generated">Generated by {model} at {at}</p>
{cards}<a href="/transcript" download>Download results (.txt)</a>
"#,
        model = escape_html(&result.model),
        at = result.generated_at.format("%Y-%m-%d %H:%M UTC"),
        cards = render_cards(&result.recommendations),
    )
}
