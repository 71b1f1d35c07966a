//! `podium-lib` — In-process display filter library.
//!
//! Presentation-layer core for hackathon admin consoles: total display
//! filters, status-code-to-label-key mappings for the five console domains,
//! and the deployment template descriptor forwarded to the cloud
//! provisioning API.
//!
//! # Quick Start
//!
//! ```
//! use podium_lib::filter;
//! use podium_lib::status::{CodeLabel, ExperimentStatus};
//!
//! // Filters absorb bad input instead of erroring
//! assert_eq!(filter::strip_markup(Some("<b>x</b>&nbsp;y")), "x y");
//! assert_eq!(filter::strip_markup(None), "");
//!
//! // Code-to-label mapping is total: unmapped codes yield ""
//! assert_eq!(ExperimentStatus::key_for(2), "EXPERIMENT_STATUS.RUNNING");
//! assert_eq!(ExperimentStatus::key_for(4), "");
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod filter;
pub mod locale;
pub mod status;
pub mod template;

pub use error::{PodiumError, Result};
pub use locale::{KeyLocalizer, Localize};
pub use status::{
    AuditStatus, CodeLabel, ExperimentStatus, ImageStatus, OrganizationType, UserRole,
};
pub use template::VmTemplate;
