//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The transcript is the only piece of shared state. It is provided through
//! Leptos context as an `RwSignal<TranscriptState>` and mutated only by the
//! widget's transcript view.

pub mod transcript;
