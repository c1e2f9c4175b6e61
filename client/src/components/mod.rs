//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_panel` binds the widget to the DOM and wires the form events;
//! `message_group` renders one exchange as a group of bubbles.

pub mod chat_panel;
pub mod message_group;
