#![deny(unsafe_code)]

/// Three-pane messaging shell.
///
/// The window splits into a conversation list, the active conversation, and a
/// contextual third pane that shows either the notification feed or the
/// selected counterpart's details. Pane visibility itself is decided by the
/// pure layout rules in `mica-core`; this crate only renders the outcome.
pub mod app;
/// Durable UI preferences.
pub mod preferences;
/// Pane components and the events they emit.
pub mod shell;
