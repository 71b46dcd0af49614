//! Dispatch rules: a static mapping from inbound events to outbound actions.
//!
//! The tables are built once at startup and never change afterwards.
//! `dispatch` performs no I/O and holds no cross-event state, so the rule
//! set can be shared behind an `Arc` and tested without a running bot.

mod action;
mod event;
mod keyboard;

use std::collections::HashMap;

use rand::Rng;

use crate::menus;

pub use action::OutboundAction;
pub use event::{CallbackPress, InboundEvent, MessageRef, Sender, TextMessage};
pub use keyboard::{ButtonKind, InlineButton, Keyboard};

/// Toast shown for callback tokens with no rule of their own.
const FALLBACK_TOAST: &str = "⚙️ Action processed";

/// Response descriptor for command and label rules.
enum Reply {
    /// Send a prebuilt menu screen.
    Menu {
        title: &'static str,
        keyboard: Keyboard,
    },

    /// Send a fixed text.
    Static(&'static str),

    /// Send the sender's identity.
    UserInfo,

    /// Send a freshly drawn number.
    RandomNumber,
}

/// How a known callback token is answered. The acknowledgment always comes
/// first; edit/delete only apply when the originating message is known.
struct CallbackReply {
    toast: &'static str,
    edit_to: Option<&'static str>,
    delete: bool,
}

/// The immutable rule tables.
pub struct RuleSet {
    commands: HashMap<&'static str, Reply>,
    labels: HashMap<&'static str, Reply>,
    callbacks: HashMap<&'static str, CallbackReply>,
    random_number: fn() -> u8,
}

impl RuleSet {
    /// Build the production rule set.
    pub fn new() -> Self {
        Self::with_number_source(draw_number)
    }

    /// Build the rule set with a custom number source, so tests can pin the
    /// one otherwise-nondeterministic reply.
    pub fn with_number_source(random_number: fn() -> u8) -> Self {
        let mut commands = HashMap::new();
        let (title, keyboard) = menus::main_menu();
        commands.insert("/start", Reply::Menu { title, keyboard });
        let (title, keyboard) = menus::quick_actions();
        commands.insert("/menu", Reply::Menu { title, keyboard });

        let mut labels = HashMap::new();
        labels.insert(menus::GET_INFO, Reply::UserInfo);
        let (title, keyboard) = menus::services();
        labels.insert(menus::SERVICES, Reply::Menu { title, keyboard });
        let (title, keyboard) = menus::links();
        labels.insert(menus::LINKS, Reply::Menu { title, keyboard });
        labels.insert(menus::ABOUT, Reply::Static(menus::about_text()));
        labels.insert(menus::RANDOM_NUMBER, Reply::RandomNumber);

        let mut callbacks = HashMap::new();
        callbacks.insert(
            menus::CONTACT,
            CallbackReply {
                toast: "📧 Contact: example@email.com",
                edit_to: None,
                delete: false,
            },
        );
        callbacks.insert(
            menus::REFRESH,
            CallbackReply {
                toast: "🔄 Refreshing...",
                edit_to: Some("✅ Menu refreshed!"),
                delete: false,
            },
        );
        callbacks.insert(
            menus::CLOSE,
            CallbackReply {
                toast: "❌ Menu closed",
                edit_to: None,
                delete: true,
            },
        );

        Self {
            commands,
            labels,
            callbacks,
            random_number,
        }
    }

    /// Map one inbound event to the ordered actions answering it.
    pub fn dispatch(&self, event: &InboundEvent) -> Vec<OutboundAction> {
        match event {
            InboundEvent::Text(msg) => self.dispatch_text(msg),
            InboundEvent::Callback(press) => self.dispatch_callback(press),
        }
    }

    fn dispatch_text(&self, msg: &TextMessage) -> Vec<OutboundAction> {
        let trimmed = msg.text.trim();

        // Commands never reach the label table. Unrecognized commands get no
        // reply at all.
        if trimmed.starts_with('/') {
            return match self.commands.get(command_key(trimmed)) {
                Some(reply) => vec![self.render(reply, msg)],
                None => Vec::new(),
            };
        }

        match self.labels.get(trimmed) {
            Some(reply) => vec![self.render(reply, msg)],
            None => vec![OutboundAction::SendText {
                chat_id: msg.chat_id,
                body: menus::echo_text(&msg.text),
                keyboard: None,
            }],
        }
    }

    fn render(&self, reply: &Reply, msg: &TextMessage) -> OutboundAction {
        let (body, keyboard) = match reply {
            Reply::Menu { title, keyboard } => (title.to_string(), Some(keyboard.clone())),
            Reply::Static(text) => (text.to_string(), None),
            Reply::UserInfo => (menus::user_info_text(&msg.sender), None),
            Reply::RandomNumber => (menus::random_number_text((self.random_number)()), None),
        };

        OutboundAction::SendText {
            chat_id: msg.chat_id,
            body,
            keyboard,
        }
    }

    fn dispatch_callback(&self, press: &CallbackPress) -> Vec<OutboundAction> {
        // Every press is acknowledged exactly once, known token or not;
        // an unanswered query leaves the client spinner running.
        let rule = press
            .action
            .as_deref()
            .and_then(|token| self.callbacks.get(token));

        let Some(rule) = rule else {
            return vec![OutboundAction::AnswerCallback {
                query_id: press.query_id.clone(),
                toast: Some(FALLBACK_TOAST.to_string()),
            }];
        };

        let mut actions = vec![OutboundAction::AnswerCallback {
            query_id: press.query_id.clone(),
            toast: Some(rule.toast.to_string()),
        }];

        if let Some(target) = press.message {
            if let Some(body) = rule.edit_to {
                actions.push(OutboundAction::EditText {
                    target,
                    body: body.to_string(),
                });
            }

            if rule.delete {
                actions.push(OutboundAction::DeleteMessage { target });
            }
        }

        actions
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

/// First token of a command with any `@botname` suffix stripped.
fn command_key(text: &str) -> &str {
    let token = text.split_whitespace().next().unwrap_or(text);
    token.split('@').next().unwrap_or(token)
}

/// Production number source for the random-number reply.
fn draw_number() -> u8 {
    rand::thread_rng().gen_range(1..=100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_number() -> u8 {
        42
    }

    fn rules() -> RuleSet {
        RuleSet::with_number_source(fixed_number)
    }

    fn text_event(text: &str) -> InboundEvent {
        InboundEvent::Text(TextMessage {
            chat_id: 100,
            sender: Sender {
                id: 7,
                first_name: "Ada".to_string(),
                username: Some("ada".to_string()),
            },
            text: text.to_string(),
        })
    }

    fn callback_event(action: Option<&str>) -> InboundEvent {
        InboundEvent::Callback(CallbackPress {
            query_id: "q1".to_string(),
            action: action.map(str::to_string),
            message: Some(MessageRef {
                chat_id: 100,
                message_id: 5,
            }),
        })
    }

    fn ack_count(actions: &[OutboundAction]) -> usize {
        actions
            .iter()
            .filter(|a| matches!(a, OutboundAction::AnswerCallback { .. }))
            .count()
    }

    /// Callback tokens issued by a keyboard's action buttons.
    fn issued_tokens(keyboard: &Keyboard) -> Vec<&str> {
        match keyboard {
            Keyboard::Reply(_) => Vec::new(),
            Keyboard::Inline(rows) => rows
                .iter()
                .flatten()
                .filter_map(|button| match &button.kind {
                    ButtonKind::Callback(token) => Some(token.as_str()),
                    ButtonKind::Url(_) => None,
                })
                .collect(),
        }
    }

    #[test]
    fn start_sends_reply_keyboard_in_two_two_one_layout() {
        let actions = rules().dispatch(&text_event("/start"));

        assert_eq!(actions.len(), 1);
        let OutboundAction::SendText { body, keyboard, .. } = &actions[0] else {
            panic!("expected SendText, got {:?}", actions[0]);
        };
        assert_eq!(body, "Welcome! Choose an option:");

        let Some(Keyboard::Reply(rows)) = keyboard else {
            panic!("expected a reply keyboard, got {:?}", keyboard);
        };
        let layout: Vec<usize> = rows.iter().map(Vec::len).collect();
        assert_eq!(layout, vec![2, 2, 1]);

        let labels: Vec<&str> = rows.iter().flatten().map(String::as_str).collect();
        assert_eq!(
            labels,
            vec![
                menus::GET_INFO,
                menus::SERVICES,
                menus::LINKS,
                menus::ABOUT,
                menus::RANDOM_NUMBER,
            ]
        );
    }

    #[test]
    fn menu_sends_quick_actions_inline_keyboard() {
        let actions = rules().dispatch(&text_event("/menu"));

        assert_eq!(actions.len(), 1);
        let OutboundAction::SendText { body, keyboard, .. } = &actions[0] else {
            panic!("expected SendText, got {:?}", actions[0]);
        };
        assert_eq!(body, "🔧 Quick Actions Menu:");

        let Some(keyboard) = keyboard else {
            panic!("expected an inline keyboard");
        };
        assert_eq!(
            issued_tokens(keyboard),
            vec![menus::CONTACT, menus::REFRESH, menus::CLOSE]
        );
    }

    #[test]
    fn command_with_bot_suffix_and_arguments_still_resolves() {
        let rules = rules();

        assert_eq!(rules.dispatch(&text_event("/start@kiosk_bot")).len(), 1);
        assert_eq!(rules.dispatch(&text_event("/menu extra args")).len(), 1);
    }

    #[test]
    fn unrecognized_command_is_silently_ignored() {
        assert!(rules().dispatch(&text_event("/frobnicate")).is_empty());
        assert!(rules().dispatch(&text_event("/startled")).is_empty());
    }

    #[test]
    fn every_label_yields_exactly_one_send() {
        let rules = rules();
        let labels = [
            menus::GET_INFO,
            menus::SERVICES,
            menus::LINKS,
            menus::ABOUT,
            menus::RANDOM_NUMBER,
        ];

        for label in labels {
            let actions = rules.dispatch(&text_event(label));
            assert_eq!(actions.len(), 1, "label {label:?}");
            assert!(
                matches!(actions[0], OutboundAction::SendText { .. }),
                "label {label:?}"
            );
        }
    }

    #[test]
    fn labels_match_after_trimming() {
        let actions = rules().dispatch(&text_event("  ℹ️ About  "));

        assert_eq!(actions.len(), 1);
        let OutboundAction::SendText { body, .. } = &actions[0] else {
            panic!("expected SendText");
        };
        assert!(body.starts_with("🤖 About This Bot:"));
    }

    #[test]
    fn get_info_embeds_sender_identity() {
        let actions = rules().dispatch(&text_event(menus::GET_INFO));

        let OutboundAction::SendText { body, .. } = &actions[0] else {
            panic!("expected SendText");
        };
        assert!(body.contains("ID: 7"));
        assert!(body.contains("First Name: Ada"));
        assert!(body.contains("Username: @ada"));
    }

    #[test]
    fn get_info_without_username_shows_placeholder() {
        let event = InboundEvent::Text(TextMessage {
            chat_id: 100,
            sender: Sender {
                id: 7,
                first_name: "Ada".to_string(),
                username: None,
            },
            text: menus::GET_INFO.to_string(),
        });

        let actions = rules().dispatch(&event);
        let OutboundAction::SendText { body, .. } = &actions[0] else {
            panic!("expected SendText");
        };
        assert!(body.contains("Username: @N/A"));
    }

    #[test]
    fn random_number_uses_injected_source() {
        let actions = rules().dispatch(&text_event(menus::RANDOM_NUMBER));

        assert_eq!(
            actions,
            vec![OutboundAction::SendText {
                chat_id: 100,
                body: "🎲 Your random number: 42".to_string(),
                keyboard: None,
            }]
        );
    }

    #[test]
    fn unmatched_text_echoes_original_verbatim() {
        let actions = rules().dispatch(&text_event("  hello there  "));

        assert_eq!(actions.len(), 1);
        let OutboundAction::SendText { body, keyboard, .. } = &actions[0] else {
            panic!("expected SendText");
        };
        // Lookup trims, the echo does not.
        assert!(body.contains("You said: \"  hello there  \""));
        assert!(body.contains("Use /start for main menu or /menu for inline buttons."));
        assert!(keyboard.is_none());
    }

    #[test]
    fn every_callback_gets_exactly_one_acknowledgment() {
        let rules = rules();

        for action in [
            Some("contact"),
            Some("refresh"),
            Some("close"),
            Some("xyz123"),
            None,
        ] {
            let actions = rules.dispatch(&callback_event(action));
            assert_eq!(ack_count(&actions), 1, "token {action:?}");
            assert!(
                matches!(actions[0], OutboundAction::AnswerCallback { .. }),
                "acknowledgment must come first for {action:?}"
            );
        }
    }

    #[test]
    fn refresh_edits_the_originating_message() {
        let actions = rules().dispatch(&callback_event(Some("refresh")));

        assert_eq!(
            actions,
            vec![
                OutboundAction::AnswerCallback {
                    query_id: "q1".to_string(),
                    toast: Some("🔄 Refreshing...".to_string()),
                },
                OutboundAction::EditText {
                    target: MessageRef {
                        chat_id: 100,
                        message_id: 5,
                    },
                    body: "✅ Menu refreshed!".to_string(),
                },
            ]
        );
    }

    #[test]
    fn close_deletes_the_originating_message() {
        let actions = rules().dispatch(&callback_event(Some("close")));

        assert_eq!(
            actions,
            vec![
                OutboundAction::AnswerCallback {
                    query_id: "q1".to_string(),
                    toast: Some("❌ Menu closed".to_string()),
                },
                OutboundAction::DeleteMessage {
                    target: MessageRef {
                        chat_id: 100,
                        message_id: 5,
                    },
                },
            ]
        );
    }

    #[test]
    fn unknown_token_gets_generic_toast_only() {
        let actions = rules().dispatch(&callback_event(Some("xyz123")));

        assert_eq!(
            actions,
            vec![OutboundAction::AnswerCallback {
                query_id: "q1".to_string(),
                toast: Some(FALLBACK_TOAST.to_string()),
            }]
        );
    }

    #[test]
    fn refresh_without_originating_message_only_acknowledges() {
        let event = InboundEvent::Callback(CallbackPress {
            query_id: "q1".to_string(),
            action: Some("refresh".to_string()),
            message: None,
        });

        let actions = rules().dispatch(&event);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            OutboundAction::AnswerCallback { .. }
        ));
    }

    #[test]
    fn dispatch_is_idempotent() {
        let rules = rules();
        let events = [
            text_event("/start"),
            text_event(menus::RANDOM_NUMBER),
            text_event("free text"),
            callback_event(Some("refresh")),
            callback_event(Some("nope")),
        ];

        for event in &events {
            assert_eq!(rules.dispatch(event), rules.dispatch(event));
        }
    }

    #[test]
    fn issued_tokens_are_in_the_table_or_covered_by_fallback() {
        let rules = rules();

        // The quick-actions tokens have dedicated rules.
        for token in [menus::CONTACT, menus::REFRESH, menus::CLOSE] {
            assert!(rules.callbacks.contains_key(token), "token {token:?}");
        }

        // Every token any menu issues must produce an acknowledgment.
        let (_, quick) = menus::quick_actions();
        let (_, services) = menus::services();
        for token in issued_tokens(&quick)
            .into_iter()
            .chain(issued_tokens(&services))
        {
            let actions = rules.dispatch(&callback_event(Some(token)));
            assert_eq!(ack_count(&actions), 1, "token {token:?}");
        }
    }
}
