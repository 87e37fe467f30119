//! Data access layer
//!
//! Repositories own the SQL; services own the business logic.

pub mod labs;
pub mod profile;

pub use labs::{CreateLabMarker, LabAnalysisRecord, LabMarkerRecord, LabRepository, UserMarkerRow};
pub use profile::{HealthProfileRecord, ProfileRepository, UpsertHealthProfile};
