//! Keyboard handling for the message input.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// `true` when a keydown in the message input should submit the form.
///
/// Plain Enter submits; Shift+Enter is left to the textarea (newline). An
/// Enter that confirms an IME composition never submits.
pub fn is_submit_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}
