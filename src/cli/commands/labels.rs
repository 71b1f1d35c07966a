//! Labels command implementation.
//!
//! Lists the code-to-label-key table for one or all status domains. The
//! keys are what the console hands to the localization service; this is the
//! reference used when auditing locale files.

use podium_lib::status::{
    AuditStatus, CodeLabel, ExperimentStatus, ImageStatus, OrganizationType, UserRole,
};

use crate::cli::{Domain, LabelsArgs};
use crate::error::Result;
use crate::format::{DomainLabels, LabelEntry, format_label_table};

/// Execute the labels command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &LabelsArgs, json: bool) -> Result<()> {
    let domains = args.domain.map_or_else(|| Domain::ALL.to_vec(), |d| vec![d]);
    let groups: Vec<DomainLabels> = domains.into_iter().map(domain_labels).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    let last = groups.len().saturating_sub(1);
    for (index, group) in groups.iter().enumerate() {
        println!("# {}", group.domain);
        print!("{}", format_label_table(&group.labels));
        if index != last {
            println!();
        }
    }

    Ok(())
}

fn domain_labels(domain: Domain) -> DomainLabels {
    let labels = match domain {
        Domain::Image => ImageStatus::ALL
            .iter()
            .map(|status| entry(status.code(), status.as_str(), status.label_key()))
            .collect(),
        Domain::Audit => AuditStatus::ALL
            .iter()
            .map(|status| entry(status.code(), status.as_str(), status.label_key()))
            .collect(),
        Domain::Role => UserRole::ALL
            .iter()
            .map(|role| entry(role.code(), role.as_str(), role.label_key()))
            .collect(),
        Domain::Experiment => ExperimentStatus::ALL
            .iter()
            .map(|status| entry(status.code(), status.as_str(), status.label_key()))
            .collect(),
        Domain::Organization => OrganizationType::ALL
            .iter()
            .map(|kind| entry(kind.code(), kind.as_str(), kind.label_key()))
            .collect(),
    };

    DomainLabels {
        domain: domain.as_str(),
        labels,
    }
}

const fn entry(code: i64, name: &'static str, key: &'static str) -> LabelEntry {
    LabelEntry { code, name, key }
}
