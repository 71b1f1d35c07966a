//! Output formatting for `podium`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! Text rendering lives in [`text`]; the serde shapes emitted under
//! `--json` live in [`output`].

pub mod output;
pub mod text;

pub use output::{DomainLabels, EndpointSummary, LabelEntry, RoleSummary, TemplateSummary};
pub use text::{format_label_table, format_template_summary};
