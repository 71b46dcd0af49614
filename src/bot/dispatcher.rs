//! Message dispatcher setup.
//!
//! Builds the teloxide dispatcher and converts incoming updates into the
//! events the rule tables understand. All replies flow through
//! [`super::outbound`]; nothing here talks to the API directly.

use std::sync::Arc;

use teloxide::adaptors::Throttle;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::rules::{CallbackPress, InboundEvent, MessageRef, RuleSet, Sender, TextMessage};

use super::outbound;

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Dispatch rules, built once at startup and read-only afterwards.
    pub rules: Arc<RuleSet>,
}

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(
    bot: ThrottledBot,
    rules: Arc<RuleSet>,
) -> Dispatcher<ThrottledBot, anyhow::Error, teloxide::dispatching::DefaultKey> {
    let state = AppState { rules };

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
fn schema() -> UpdateHandler<anyhow::Error> {
    use teloxide::dispatching::UpdateFilterExt;

    let message_handler = Update::filter_message().endpoint(handle_message);
    let callback_handler = Update::filter_callback_query().endpoint(handle_callback);

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}

/// Handle an incoming message. Updates without text or a sender are ignored.
async fn handle_message(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    let Some(event) = text_event(&msg) else {
        return Ok(());
    };

    outbound::execute(&bot, state.rules.dispatch(&event)).await;
    Ok(())
}

/// Handle an inline button press.
async fn handle_callback(
    bot: ThrottledBot,
    q: CallbackQuery,
    state: AppState,
) -> anyhow::Result<()> {
    let event = callback_event(&q);
    outbound::execute(&bot, state.rules.dispatch(&event)).await;
    Ok(())
}

/// Build a text event from a message, if it carries text and a sender.
fn text_event(msg: &Message) -> Option<InboundEvent> {
    let text = msg.text()?;
    let from = msg.from.as_ref()?;

    Some(InboundEvent::Text(TextMessage {
        chat_id: msg.chat.id.0,
        sender: Sender {
            id: from.id.0,
            first_name: from.first_name.clone(),
            username: from.username.clone(),
        },
        text: text.to_string(),
    }))
}

/// Build a callback event; the originating message may be inaccessible.
fn callback_event(q: &CallbackQuery) -> InboundEvent {
    let message = q.message.as_ref().map(|m| MessageRef {
        chat_id: m.chat().id.0,
        message_id: m.id().0,
    });

    InboundEvent::Callback(CallbackPress {
        query_id: q.id.clone(),
        action: q.data.clone(),
        message,
    })
}
