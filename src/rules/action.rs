//! Outbound actions produced by the dispatch rules.

use super::event::MessageRef;
use super::keyboard::Keyboard;

/// One outbound Telegram operation.
///
/// Actions are executed in order by the transport layer; the rules never
/// talk to the API themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAction {
    /// Send a new message, optionally with a keyboard attached.
    SendText {
        chat_id: i64,
        body: String,
        keyboard: Option<Keyboard>,
    },

    /// Replace the text of an existing message.
    EditText { target: MessageRef, body: String },

    /// Delete an existing message.
    DeleteMessage { target: MessageRef },

    /// Acknowledge a callback query, optionally with a toast.
    AnswerCallback {
        query_id: String,
        toast: Option<String>,
    },
}
