//! Bot module - Telegram wiring.

pub mod dispatcher;
mod outbound;
mod runtime;

pub use dispatcher::build_dispatcher;
pub use runtime::run;
