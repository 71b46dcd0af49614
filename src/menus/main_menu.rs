//! Main menu: the /start reply keyboard.

use crate::rules::Keyboard;

/// Reply-keyboard labels. These come back as plain text messages and are
/// the keys of the label rule table.
pub const GET_INFO: &str = "📊 Get Info";
pub const SERVICES: &str = "🛠️ Services";
pub const LINKS: &str = "🔗 Links";
pub const ABOUT: &str = "ℹ️ About";
pub const RANDOM_NUMBER: &str = "🎲 Random Number";

/// Welcome text plus the persistent five-button reply keyboard.
pub fn main_menu() -> (&'static str, Keyboard) {
    let rows = vec![
        vec![GET_INFO.to_string(), SERVICES.to_string()],
        vec![LINKS.to_string(), ABOUT.to_string()],
        vec![RANDOM_NUMBER.to_string()],
    ];

    ("Welcome! Choose an option:", Keyboard::Reply(rows))
}
