//! Metric model and scrape orchestration between `smartzone-api` and the
//! exporter binary.
//!
//! - **[`catalog`]**: static description of every exported metric,
//!   grouped into [`ResourceFamily`] values (upstream path, query mode,
//!   response shape, identity labels, per-field [`FieldKind`]).
//!
//! - **[`flatten()`]**: pure conversion of one JSON record into one
//!   [`Sample`] per declared field.
//!
//! - **[`Collector`]**: runs one sequential scrape pass per call
//!   (login, controller discovery, every family in catalog order) and
//!   returns an ordered [`Collection`] of metric families. Overlapping
//!   calls are serialized.

pub mod catalog;
pub mod collector;
pub mod config;
pub mod error;
pub mod flatten;
pub mod sample;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{FieldKind, FieldSpec, IdentityLabel, IdentitySource, ResourceFamily, ResponseShape};
pub use collector::{Collector, SCRAPE_DURATION_METRIC, Stage};
pub use config::{ControllerConfig, TlsVerification};
pub use smartzone_api::DEFAULT_API_VERSION;
pub use error::CoreError;
pub use flatten::{FlattenContext, flatten};
pub use sample::{Collection, MetricFamily, MetricType, Sample};
