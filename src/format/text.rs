//! Text formatting functions for `podium`.
//!
//! Plain text (non-ANSI) rendering for terminal output: label tables for
//! the status domains and deployment template summaries.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::format::output::{LabelEntry, TemplateSummary};

/// Pad `text` with spaces to the given display width.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Render a status domain as aligned `code  name  key` rows.
#[must_use]
pub fn format_label_table(entries: &[LabelEntry]) -> String {
    let name_width = entries
        .iter()
        .map(|entry| UnicodeWidthStr::width(entry.name))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{:>2}  {}  {}",
            entry.code,
            pad(entry.name, name_width),
            entry.key
        );
    }
    out
}

/// Render a one-line-per-fact template summary.
///
/// Format:
///
/// ```text
/// windows (2 roles, 3 endpoints)
/// storage:    podium0storage / podium-container
/// service:    podium-cloud-service @ East US
/// deployment: podium-deployment [production]
/// roles:      web, worker
/// ```
///
/// followed by one block per role listing its endpoints.
#[must_use]
pub fn format_template_summary(summary: &TemplateSummary, filler: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} roles, {} endpoints)",
        summary.expr_name,
        summary.roles.len(),
        summary.endpoint_count()
    );
    if let Some(description) = &summary.description {
        let _ = writeln!(out, "{description}");
    }
    let _ = writeln!(
        out,
        "storage:    {} / {}",
        summary.storage_account, summary.container
    );
    let _ = writeln!(
        out,
        "service:    {} @ {}",
        summary.cloud_service, summary.location
    );
    let _ = writeln!(
        out,
        "deployment: {} [{}]",
        summary.deployment_name, summary.deployment_slot
    );
    let role_names: Vec<&str> = summary
        .roles
        .iter()
        .map(|role| role.role_name.as_str())
        .collect();
    let _ = writeln!(out, "roles:      {}", role_names.join(filler));

    for role in &summary.roles {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} [{}] {} ({})",
            role.role_name, role.role_size, role.os_family, role.source_image_name
        );
        if let Some(protocol) = &role.remote_protocol {
            let _ = writeln!(out, "  remote: {protocol}");
        }
        let name_width = role
            .endpoints
            .iter()
            .map(|endpoint| UnicodeWidthStr::width(endpoint.name.as_str()))
            .max()
            .unwrap_or(0);
        for endpoint in &role.endpoints {
            let _ = writeln!(
                out,
                "  {}  {} {} -> {}",
                pad(&endpoint.name, name_width),
                endpoint.protocol,
                endpoint.port,
                endpoint.local_port
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::output::{EndpointSummary, RoleSummary};

    fn sample_summary() -> TemplateSummary {
        TemplateSummary {
            expr_name: "sample".to_string(),
            description: None,
            storage_account: "sample0storage".to_string(),
            container: "sample-container".to_string(),
            cloud_service: "sample-cloud-service".to_string(),
            location: "East US".to_string(),
            deployment_name: "sample-deployment".to_string(),
            deployment_slot: "production".to_string(),
            roles: vec![RoleSummary {
                role_name: "web".to_string(),
                os_family: "Windows".to_string(),
                role_size: "Small".to_string(),
                source_image_name: "windows-server-2012".to_string(),
                remote_protocol: Some("rdp".to_string()),
                endpoints: vec![
                    EndpointSummary {
                        name: "http".to_string(),
                        protocol: "tcp".to_string(),
                        port: "80".to_string(),
                        local_port: "80".to_string(),
                    },
                    EndpointSummary {
                        name: "rdp".to_string(),
                        protocol: "tcp".to_string(),
                        port: "3389".to_string(),
                        local_port: "3389".to_string(),
                    },
                ],
            }],
        }
    }

    #[test]
    fn label_table_aligns_names() {
        let entries = vec![
            LabelEntry {
                code: 0,
                name: "init",
                key: "EXPERIMENT_STATUS.INIT",
            },
            LabelEntry {
                code: 6,
                name: "rolling_back",
                key: "EXPERIMENT_STATUS.ROLL_BACKING",
            },
        ];
        let table = format_label_table(&entries);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with(" 0  init"));
        assert!(lines[1].starts_with(" 6  rolling_back  EXPERIMENT_STATUS.ROLL_BACKING"));
        // key column starts at the same offset in every row
        assert_eq!(
            lines[0].find("EXPERIMENT_STATUS"),
            lines[1].find("EXPERIMENT_STATUS")
        );
    }

    #[test]
    fn template_summary_lists_header_and_roles() {
        let text = format_template_summary(&sample_summary(), ", ");
        assert!(text.starts_with("sample (1 roles, 2 endpoints)"));
        assert!(text.contains("service:    sample-cloud-service @ East US"));
        assert!(text.contains("deployment: sample-deployment [production]"));
        assert!(text.contains("web [Small] Windows (windows-server-2012)"));
        assert!(text.contains("  http  tcp 80 -> 80"));
        assert!(text.contains("  remote: rdp"));
    }
}
