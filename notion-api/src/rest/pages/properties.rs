use serde::{Deserialize, Serialize};

/// Typed value of a single database property, serialized the way the pages
/// endpoint expects it (`{"title": [...]}`, `{"number": 1.0}`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Title(Vec<RichText>),
    Date(DateValue),
    Number(Option<f64>),
    Select(SelectOption),
}

impl PropertyValue {
    pub fn title(content: &str) -> Self {
        return Self::Title(vec![RichText {
            text: TextContent {
                content: content.to_owned(),
            },
        }]);
    }

    pub fn date_start(start: &str) -> Self {
        return Self::Date(DateValue {
            start: start.to_owned(),
            end: None,
        });
    }

    pub fn number(value: Option<f64>) -> Self {
        return Self::Number(value);
    }

    /// Select options are matched by name, or created when no option with
    /// that name exists yet.
    pub fn select(name: &str) -> Self {
        return Self::Select(SelectOption {
            name: name.to_owned(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}
