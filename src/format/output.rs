//! JSON output types for `podium`.
//!
//! These are the shapes emitted under `--json`; the templating layer of the
//! console consumes the same fields.

use podium_lib::VmTemplate;
use serde::Serialize;

/// One code-to-key row of a status domain.
#[derive(Debug, Clone, Serialize)]
pub struct LabelEntry {
    pub code: i64,
    pub name: &'static str,
    pub key: &'static str,
}

/// A status domain with all of its label rows.
#[derive(Debug, Clone, Serialize)]
pub struct DomainLabels {
    pub domain: &'static str,
    pub labels: Vec<LabelEntry>,
}

/// Flattened view of a deployment template for display.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateSummary {
    pub expr_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub storage_account: String,
    pub container: String,
    pub cloud_service: String,
    pub location: String,
    pub deployment_name: String,
    pub deployment_slot: String,
    pub roles: Vec<RoleSummary>,
}

/// One virtual machine role in the summary.
#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    pub role_name: String,
    pub os_family: String,
    pub role_size: String,
    pub source_image_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_protocol: Option<String>,
    pub endpoints: Vec<EndpointSummary>,
}

/// One published endpoint in the summary.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointSummary {
    pub name: String,
    pub protocol: String,
    pub port: String,
    pub local_port: String,
}

impl TemplateSummary {
    /// Flatten a parsed descriptor into its display view.
    #[must_use]
    pub fn from_template(template: &VmTemplate) -> Self {
        let roles = template
            .virtual_environments
            .iter()
            .map(|ve| RoleSummary {
                role_name: ve.role_name.clone(),
                os_family: ve.system_config.os_family.clone(),
                role_size: ve.role_size.clone(),
                source_image_name: ve.source_image_name.clone(),
                remote_protocol: ve.remote.as_ref().map(|remote| remote.protocol.clone()),
                endpoints: ve
                    .network_config
                    .input_endpoints
                    .iter()
                    .map(|endpoint| EndpointSummary {
                        name: endpoint.name.clone(),
                        protocol: endpoint.protocol.clone(),
                        port: endpoint.port.clone(),
                        local_port: endpoint.local_port.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            expr_name: template.expr_name.clone(),
            description: template.description.clone(),
            storage_account: template.storage_account.service_name.clone(),
            container: template.container.clone(),
            cloud_service: template.cloud_service.service_name.clone(),
            location: template.cloud_service.location.clone(),
            deployment_name: template.deployment.deployment_name.clone(),
            deployment_slot: template.deployment.deployment_slot.clone(),
            roles,
        }
    }

    /// Total endpoint count across all roles.
    #[must_use]
    pub fn endpoint_count(&self) -> usize {
        self.roles.iter().map(|role| role.endpoints.len()).sum()
    }
}
