//! Controller state for the chat and questionnaire pages.
//!
//! DESIGN
//! ======
//! Every type here is plain Rust with no browser handles. Components hold
//! them in signals and call their methods; methods that need side effects
//! return actions for the browser glue to perform.

pub mod answers;
pub mod chat;
pub mod page;
pub mod questionnaire;
pub mod recorder;
pub mod reveal;
pub mod typing;
