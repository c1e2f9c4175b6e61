//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold pure browser-independent logic (markup escaping, key
//! handling) so it can be tested without a DOM.

pub mod escape;
pub mod keys;
