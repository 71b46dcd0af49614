//! Plain text responses: user info, about, random number, echo fallback.

use crate::rules::Sender;

/// Format the "Get Info" reply for a sender.
pub fn user_info_text(sender: &Sender) -> String {
    let username = sender.username.as_deref().unwrap_or("N/A");

    format!(
        "👤 User Info:\nID: {}\nFirst Name: {}\nUsername: @{}",
        sender.id, sender.first_name, username
    )
}

/// Static about screen.
pub fn about_text() -> &'static str {
    "🤖 About This Bot:\nVersion: 1.0\nFeatures: Buttons, Inline Keyboard, Web Server\n\nThis is a demo bot showcasing Telegram Bot API capabilities."
}

/// Reply for the "🎲 Random Number" label.
pub fn random_number_text(number: u8) -> String {
    format!("🎲 Your random number: {}", number)
}

/// Echo fallback for unmatched text, embedding the original verbatim.
pub fn echo_text(original: &str) -> String {
    format!(
        "You said: \"{}\"\n\nUse /start for main menu or /menu for inline buttons.",
        original
    )
}
