pub mod config;
pub mod error;
pub mod message_key;
pub mod presentation;
pub mod track_error;
