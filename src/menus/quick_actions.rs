//! Quick actions: the /menu inline keyboard.

use crate::rules::{InlineButton, Keyboard};

/// Tokens issued by the action buttons on this screen.
pub const CONTACT: &str = "contact";
pub const REFRESH: &str = "refresh";
pub const CLOSE: &str = "close";

pub fn quick_actions() -> (&'static str, Keyboard) {
    let rows = vec![
        vec![
            InlineButton::url("⭐ Star Repository", "https://github.com"),
            InlineButton::callback("📞 Contact", CONTACT),
        ],
        vec![
            InlineButton::callback("🔄 Refresh", REFRESH),
            InlineButton::callback("❌ Close", CLOSE),
        ],
    ];

    ("🔧 Quick Actions Menu:", Keyboard::Inline(rows))
}
