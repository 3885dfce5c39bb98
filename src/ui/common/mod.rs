//! Common reusable UI components

pub mod form;

pub use form::{CheckboxField, FormField, SelectField, TextAreaField};
