//! Services submenu, shown for the "🛠️ Services" label.
//!
//! The service buttons carry tokens with no rule of their own; pressing one
//! gets the generic acknowledgment.

use crate::rules::{InlineButton, Keyboard};

pub fn services() -> (&'static str, Keyboard) {
    let rows = vec![
        vec![
            InlineButton::callback("🌐 Web Development", "web_dev"),
            InlineButton::callback("📱 App Development", "app_dev"),
        ],
        vec![
            InlineButton::callback("☁️ Cloud Services", "cloud"),
            InlineButton::callback("🔒 Security", "security"),
        ],
    ];

    ("Our Services:", Keyboard::Inline(rows))
}
