//! CLI library components for the artmeta browser.

pub mod logging;
pub mod pipeline;
pub mod state;
pub mod summary;
