pub mod admin;
pub mod auth;
pub mod content;
pub mod continue_watching;
pub mod extract;
pub mod favorite;
pub mod progress;
