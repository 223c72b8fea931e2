//! Common reusable UI components
//!
//! Building blocks shared by the landing sections and the lead modals.

pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use form::{FormField, SelectField, TextAreaField};
pub use message::{ErrorMessage, NextSteps, SuccessMessage};
pub use modal::BaseModal;
pub use spinner::{InlineSpinner, LoadingButton};
