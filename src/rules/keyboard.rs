//! Transport-agnostic keyboard descriptors.

use url::Url;

/// A keyboard attached to an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Reply keyboard: a grid of labels that come back as plain text.
    Reply(Vec<Vec<String>>),

    /// Inline keyboard: a grid of link/action buttons.
    Inline(Vec<Vec<InlineButton>>),
}

/// One inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub text: String,
    pub kind: ButtonKind,
}

/// What pressing an inline button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonKind {
    /// Opens a link.
    Url(Url),

    /// Produces a callback press carrying this action token.
    Callback(String),
}

impl InlineButton {
    /// Link button. All call sites pass literal URLs.
    pub fn url(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: ButtonKind::Url(url.parse().expect("valid button url")),
        }
    }

    /// Action button carrying a callback token.
    pub fn callback(text: &str, token: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: ButtonKind::Callback(token.to_string()),
        }
    }
}
