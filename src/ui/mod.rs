//! UI modules for Mission Explorer
//!
//! This module contains the UI rendering code, organized by screen region.

mod components;
mod filters;
mod home;
mod launch_list;
mod modal;
mod pagination;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use components::render_about_dialog;
pub use home::render_home;
pub use modal::render_details_modal;
