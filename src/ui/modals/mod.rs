//! Lead capture modals

pub mod demo_scheduling;
pub mod trial_signup;

pub use demo_scheduling::DemoSchedulingModal;
pub use trial_signup::TrialSignupModal;
