//! Inbound events as seen by the dispatch rules.
//!
//! One value is built per Telegram update and dropped once its actions have
//! been executed; nothing here is shared between events.

/// A single inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A plain text message (commands and reply-keyboard labels included).
    Text(TextMessage),

    /// An inline-keyboard button press.
    Callback(CallbackPress),
}

/// A text message from a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    /// Chat the message arrived in (and where replies go).
    pub chat_id: i64,

    /// Who sent it.
    pub sender: Sender,

    /// Raw message text.
    pub text: String,
}

/// Sender identity carried by a text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: u64,
    pub first_name: String,
    pub username: Option<String>,
}

/// An inline button press delivered as a callback query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackPress {
    /// Callback query id; must always be acknowledged.
    pub query_id: String,

    /// Opaque action token attached to the pressed button.
    pub action: Option<String>,

    /// Originating message, when Telegram still exposes it.
    pub message: Option<MessageRef>,
}

/// Chat/message pair identifying an existing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub chat_id: i64,
    pub message_id: i32,
}
