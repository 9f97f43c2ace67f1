//! Two-pane file browser: directory tree, filtered file listing and basic
//! file operations over a narrow filesystem interface.

pub mod core;
pub mod models;
pub mod services;

#[cfg(feature = "gui")]
pub mod pages;
#[cfg(feature = "gui")]
pub mod ui;
