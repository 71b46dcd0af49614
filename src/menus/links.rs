//! Links submenu, shown for the "🔗 Links" label.

use crate::rules::{InlineButton, Keyboard};

pub fn links() -> (&'static str, Keyboard) {
    let rows = vec![
        vec![
            InlineButton::url("🌐 Website", "https://example.com"),
            InlineButton::url("📚 Documentation", "https://docs.example.com"),
        ],
        vec![
            InlineButton::url("💬 Support", "https://t.me/yourchannel"),
            InlineButton::url("🐙 GitHub", "https://github.com"),
        ],
    ];

    ("Useful Links:", Keyboard::Inline(rows))
}
