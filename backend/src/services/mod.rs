//! Business logic layer
//!
//! Services sit between the HTTP routes and the repositories. The
//! analytics service is where the pure scoring core gets its inputs.

pub mod analytics;
pub mod labs;
pub mod profile;

pub use analytics::AnalyticsService;
pub use labs::LabService;
pub use profile::ProfileService;
