#![deny(unsafe_code)]

/// View-state coordination for the three-pane messaging shell.
///
/// This crate owns the rules for which panes are visible and how visibility
/// reacts to conversation selection, viewport changes, and panel pin/toggle
/// intents. It has no UI dependency: the app layer feeds intents in, reads a
/// `LayoutDecision` back out, and renders whatever that decision says.
pub mod ids;
/// Pure mapping from shell state to the set of visible panes.
pub mod layout;
pub mod panel;
/// Selected-conversation tracking and the edge-triggered switch detector.
pub mod selection;
pub mod shell;
pub mod viewport;

pub use ids::ConversationId;
pub use layout::{LayoutDecision, ThirdPaneContent, resolve};
pub use panel::PanelVisibilityState;
pub use selection::SelectionState;
pub use shell::{IntentOutcome, ShellState};
pub use viewport::{DESKTOP_BREAKPOINT, is_desktop_width};
