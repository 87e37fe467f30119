//! EVERLIV Shared Library
//!
//! This crate contains the health-scoring core and the shared types used
//! across the backend and WASM modules. The scoring pipeline is a pure,
//! synchronous computation: profile + lab history in, composite score,
//! risk classification and ranked recommendations out.

pub mod labs;
pub mod normalize;
pub mod profile;
pub mod recommend;
pub mod scoring;
pub mod types;
pub mod validation;
pub mod weights;

// Re-export the pipeline surface
pub use labs::{BiomarkerHistory, LabAnalysis, LabMarker, TrendDirection};
pub use normalize::{normalize, NormalizedInputs};
pub use profile::{AlcoholUse, Gender, HealthProfile, PhysicalActivity, SmokingStatus};
pub use recommend::{rank_recommendations, Priority, Recommendation, MAX_RECOMMENDATIONS};
pub use scoring::{compute_health_score, EnhancedHealthScore, RiskLevel, ScoreBreakdown};
