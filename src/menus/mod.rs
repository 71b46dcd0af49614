//! Canned menu screens.
//!
//! Each submodule owns one screen: its text and, where applicable, its
//! keyboard. The dispatch rules wire these to commands, reply-keyboard
//! labels, and callback tokens.

mod info;
mod links;
mod main_menu;
mod quick_actions;
mod services;

pub use info::{about_text, echo_text, random_number_text, user_info_text};
pub use links::links;
pub use main_menu::{ABOUT, GET_INFO, LINKS, RANDOM_NUMBER, SERVICES, main_menu};
pub use quick_actions::{CLOSE, CONTACT, REFRESH, quick_actions};
pub use services::services;
