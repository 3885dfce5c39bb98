//! Core behavior of the landing page, independent of the DOM

pub mod config;
mod controller;
pub mod counter;
mod form;
pub mod interactions;
mod payload;
mod submission;
pub mod viewport;

pub use config::{Config, WaitlistConfig};
pub use controller::*;
pub use form::*;
pub use payload::*;
pub use submission::*;
