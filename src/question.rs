use serde::{Deserialize, Deserializer};
use std::fmt;
use strum::{EnumString, IntoStaticStr};

/// A problem as returned by the `questionData` GraphQL query.
///
/// Missing and `null` fields both fall back to their defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    #[serde(deserialize_with = "nullable")]
    pub question_id: String,
    #[serde(deserialize_with = "nullable")]
    pub question_frontend_id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub title_slug: String,
    /// Problem description as an HTML fragment.
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(deserialize_with = "difficulty")]
    pub difficulty: Difficulty,
    #[serde(deserialize_with = "nullable")]
    pub is_paid_only: bool,
    #[serde(deserialize_with = "nullable")]
    pub topic_tags: Vec<TopicTag>,
    #[serde(deserialize_with = "nullable")]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(deserialize_with = "nullable")]
    pub example_testcases: String,
    #[serde(deserialize_with = "nullable")]
    pub sample_test_case: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TopicTag {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeSnippet {
    #[serde(deserialize_with = "nullable")]
    pub lang: String,
    #[serde(deserialize_with = "nullable")]
    pub lang_slug: String,
    #[serde(deserialize_with = "nullable")]
    pub code: String,
}

/// Difficulty label; anything other than the three known levels is kept
/// verbatim so it renders as received.
#[derive(Debug, Clone, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[strum(default)]
    Other(String),
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(label) => f.write_str(label),
            known => {
                let label: &'static str = known.into();
                f.write_str(label)
            }
        }
    }
}

impl Question {
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.topic_tags.iter().map(|tag| tag.name.as_str())
    }

    pub fn snippets_for(&self, lang_slug: &str) -> impl Iterator<Item = &CodeSnippet> {
        let lang_slug = lang_slug.to_owned();
        self.code_snippets
            .iter()
            .filter(move |snippet| snippet.lang_slug == lang_slug)
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn difficulty<'de, D>(deserializer: D) -> Result<Difficulty, D::Error>
where
    D: Deserializer<'de>,
{
    let label: String = nullable(deserializer)?;
    Ok(label.parse().unwrap_or_default())
}
