pub mod auth;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod github;
pub mod http;
pub mod release;
pub mod ui;

pub use error::{Result, TrackerError};
