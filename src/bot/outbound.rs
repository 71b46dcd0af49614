//! Outbound action executor.
//!
//! Runs the actions produced by the rules against the Telegram API. Every
//! call's result is inspected here: failures (network errors, stale message
//! ids on edit/delete) are logged and suppressed, so one bad send never
//! stops the remaining actions, the event, or the event loop.

use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, MessageId,
    ReplyMarkup,
};
use tracing::error;

use crate::rules::{ButtonKind, InlineButton, Keyboard, OutboundAction};

use super::dispatcher::ThrottledBot;

/// Execute actions in order, suppressing per-action failures.
pub async fn execute(bot: &ThrottledBot, actions: Vec<OutboundAction>) {
    for action in actions {
        if let Err(e) = run(bot, action).await {
            error!("Outbound action failed: {:#}", e);
        }
    }
}

async fn run(bot: &ThrottledBot, action: OutboundAction) -> anyhow::Result<()> {
    match action {
        OutboundAction::SendText {
            chat_id,
            body,
            keyboard,
        } => {
            let mut request = bot.send_message(ChatId(chat_id), body);
            if let Some(keyboard) = keyboard {
                request = request.reply_markup(convert_keyboard(keyboard));
            }
            request.await?;
        }

        OutboundAction::EditText { target, body } => {
            bot.edit_message_text(
                ChatId(target.chat_id),
                MessageId(target.message_id),
                body,
            )
            .await?;
        }

        OutboundAction::DeleteMessage { target } => {
            bot.delete_message(ChatId(target.chat_id), MessageId(target.message_id))
                .await?;
        }

        OutboundAction::AnswerCallback { query_id, toast } => {
            let mut request = bot.answer_callback_query(query_id);
            if let Some(toast) = toast {
                request = request.text(toast);
            }
            request.await?;
        }
    }

    Ok(())
}

/// Convert a keyboard descriptor into Telegram reply markup.
fn convert_keyboard(keyboard: Keyboard) -> ReplyMarkup {
    match keyboard {
        Keyboard::Reply(rows) => {
            let rows: Vec<Vec<KeyboardButton>> = rows
                .into_iter()
                .map(|row| row.into_iter().map(KeyboardButton::new).collect())
                .collect();

            ReplyMarkup::Keyboard(KeyboardMarkup::new(rows).resize_keyboard())
        }
        Keyboard::Inline(rows) => {
            let rows: Vec<Vec<InlineKeyboardButton>> = rows
                .into_iter()
                .map(|row| row.into_iter().map(convert_button).collect())
                .collect();

            ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(rows))
        }
    }
}

fn convert_button(button: InlineButton) -> InlineKeyboardButton {
    match button.kind {
        ButtonKind::Url(url) => InlineKeyboardButton::url(button.text, url),
        ButtonKind::Callback(token) => InlineKeyboardButton::callback(button.text, token),
    }
}
