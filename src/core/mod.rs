//! Landing page domain: content, attribution, validation, scheduling and the
//! backend client

pub mod api;
pub mod attribution;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod flow;
pub mod schedule;
#[cfg(feature = "ssr")]
pub mod server_transport;
#[cfg(test)]
pub(crate) mod testing;
pub mod validation;

pub use api::{ApiClient, ApiError, Transport};
pub use attribution::Attribution;
pub use content::{IconKind, SiteContent, site};
pub use flow::{DemoFlow, DemoStep, LeadField, TrialFlow};
