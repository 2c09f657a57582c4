//! Application state modules
//!
//! This module contains grouped state structs owned by ExplorerApp.
//! Each state struct owns its related fields and poll methods.

mod launches;
mod patches;
mod ui;

pub use launches::LaunchesState;
pub use patches::PatchImages;
pub use ui::UiState;

/// Events that state poll methods can return.
/// These communicate results back to ExplorerApp without direct mutation.
#[derive(Debug, PartialEq)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Log an error message
    LogError(String),

    /// Log an info message
    LogInfo(String),
}
