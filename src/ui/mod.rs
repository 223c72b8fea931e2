pub mod browser;
pub mod common;
pub mod context;
pub mod icon;
pub mod modals;
pub mod pages;
pub mod sections;
pub mod transport;

pub use context::{LandingContext, provide_landing_context, use_landing_context};
pub use icon::Icon;
pub use transport::FetchTransport;
