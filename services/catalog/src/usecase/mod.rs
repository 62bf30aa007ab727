pub mod account;
pub mod auth;
pub mod content;
pub mod continue_watching;
pub mod favorite;
pub mod progress;
pub mod settings;
pub mod stats;
