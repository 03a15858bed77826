use serde::Serialize;

/// CSS class the status bar applies to a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    /// Failed pods win over pending ones; nothing wrong means no class
    pub fn from_counts(pending: usize, failed: usize) -> Option<Self> {
        if failed > 0 {
            Some(Severity::Critical)
        } else if pending > 0 {
            Some(Severity::Warning)
        } else {
            None
        }
    }
}

/// One line of status-bar JSON: `{"text": .., "tooltip": .., "class": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusOutput {
    pub text: String,
    pub tooltip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Severity>,
}

impl StatusOutput {
    pub fn new(text: impl Into<String>, tooltip_lines: &[String]) -> Self {
        Self {
            text: text.into(),
            tooltip: tooltip_lines.join("\n"),
            class: None,
        }
    }

    pub fn with_class(mut self, class: Option<Severity>) -> Self {
        self.class = class;
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
