pub mod error;
pub mod service;

pub use error::EnrichmentError;
pub use service::{EnrichmentService, EnrichmentSummary};
