//! sea-orm entities for the catalog service.

pub mod accounts;
pub mod contents;
pub mod favorites;
pub mod settings;
pub mod watch_progress;
