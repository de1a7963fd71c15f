//! Result items and their host serialization.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// One entry of the menu the host renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    #[serde(rename = "uid")]
    pub identifier: String,
    pub title: String,
    pub subtitle: String,
    /// Value pasted back by the host.
    #[serde(rename = "arg")]
    pub argument: String,
    #[serde(rename = "icon", serialize_with = "serialize_icon")]
    pub icon_ref: String,
}

impl ResultItem {
    /// Item for a produced value. Values spanning several lines get
    /// `multiline_title` instead of themselves as title.
    pub fn for_value(
        identifier: impl Into<String>,
        value: String,
        subtitle: String,
        icon_ref: String,
        multiline_title: &str,
    ) -> Self {
        let title = if is_multiline(&value) {
            multiline_title.to_string()
        } else {
            value.clone()
        };
        Self {
            identifier: identifier.into(),
            title,
            subtitle,
            argument: value,
            icon_ref,
        }
    }

    /// Diagnostic item: fixed failure title, the untouched subject as value.
    pub fn for_failure(
        identifier: impl Into<String>,
        subject: &str,
        subtitle: String,
        icon_ref: String,
        failure_title: &str,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: failure_title.to_string(),
            subtitle,
            argument: subject.to_string(),
            icon_ref,
        }
    }
}

pub fn is_multiline(text: &str) -> bool {
    text.contains('\n')
}

fn serialize_icon<S: Serializer>(icon_ref: &str, serializer: S) -> Result<S::Ok, S::Error> {
    let mut icon = serializer.serialize_struct("Icon", 1)?;
    icon.serialize_field("path", icon_ref)?;
    icon.end()
}

/// Top-level value handed to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemList {
    pub items: Vec<ResultItem>,
}

impl ItemList {
    pub fn new(items: Vec<ResultItem>) -> Self {
        Self { items }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
