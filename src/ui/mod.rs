pub mod common;
pub mod icon;
pub mod interactions;
pub mod pages;
pub mod stack_visual;
pub mod viewport;
pub mod waitlist_form;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use waitlist_form::WaitlistForm;
