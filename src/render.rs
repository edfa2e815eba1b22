use crate::{html::html_to_text, question::Question};
use askama::Template;

/// Only snippets in this language are printed.
pub const SNIPPET_LANG: &str = "python3";
const SNIPPET_LABEL: &str = "Python3";

#[derive(Debug, Template)]
#[template(
    source = r##"# {{ title }} ({{ difficulty }})
Tags: {{ tags|join(", ") }}

{{ content }}
{%- if let Some(examples) = examples %}

--- Example test cases ---
{{ examples }}
{%- endif %}
{%- for code in snippets %}

--- {{ label }} snippet ---
{{ code }}
{%- endfor %}"##,
    ext = "txt",
    escape = "none"
)]
pub struct QuestionView<'a> {
    pub title: &'a str,
    pub difficulty: String,
    pub tags: Vec<&'a str>,
    pub content: String,
    pub examples: Option<&'a str>,
    pub label: &'a str,
    pub snippets: Vec<&'a str>,
}

impl<'a> QuestionView<'a> {
    pub fn from_question(question: &'a Question) -> Self {
        let examples = Some(question.example_testcases.as_str())
            .filter(|examples| !examples.is_empty())
            .map(str::trim);

        Self {
            title: &question.title,
            difficulty: question.difficulty.to_string(),
            tags: question.tag_names().collect(),
            content: html_to_text(&question.content),
            examples,
            label: SNIPPET_LABEL,
            snippets: question
                .snippets_for(SNIPPET_LANG)
                .map(|snippet| snippet.code.as_str())
                .collect(),
        }
    }
}

/// Render a question as the plain-text summary printed by the CLI.
pub fn render_question(question: &Question) -> askama::Result<String> {
    QuestionView::from_question(question).render()
}
