pub mod config;
pub mod favorites;
pub mod launches;
pub mod theme;
