//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one slice of a page and read/write the page's controller
//! state from Leptos context providers. Side effects go through
//! `net::channel::perform` or the questionnaire drivers in `pages`.

pub mod answer_bubbles;
pub mod audio_gate;
pub mod composer;
pub mod connection_badge;
pub mod heart_background;
pub mod message_list;
pub mod question_nav;
pub mod reveal_panel;
pub mod typing_indicator;
