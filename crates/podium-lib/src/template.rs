//! Deployment template descriptor.
//!
//! A static JSON document describing one cloud VM provisioning topology:
//! storage account, cloud service, deployment slot, and the virtual
//! environments with their network endpoints. The provisioning API consumes
//! the descriptor verbatim; this module parses it for display and forwards
//! the raw bytes unchanged. Unknown fields are tolerated — the schema
//! belongs to the consumer, not to us.

use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PodiumError, Result};

/// Top-level deployment descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VmTemplate {
    pub expr_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub storage_account: StorageAccount,
    pub container: String,
    pub cloud_service: CloudService,
    pub deployment: Deployment,
    pub virtual_environments: Vec<VirtualEnvironment>,
}

/// Storage account holding the VM disks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StorageAccount {
    pub service_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub label: String,
    pub location: String,
    pub url_base: String,
}

/// Cloud service the deployment is created under.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CloudService {
    pub service_name: String,
    pub label: String,
    pub location: String,
}

/// Deployment name and slot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Deployment {
    pub deployment_name: String,
    pub deployment_slot: String,
}

/// One virtual machine role within the deployment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VirtualEnvironment {
    pub provider: String,
    pub label: String,
    pub role_name: String,
    pub system_config: SystemConfig,
    pub source_image_name: String,
    pub network_config: NetworkConfig,
    pub role_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

/// Guest OS settings for a role.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SystemConfig {
    pub os_family: String,
    pub host_name: String,
    pub user_name: String,
    pub user_password: String,
}

/// Network configuration set for a role.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NetworkConfig {
    pub configuration_set_type: String,
    #[serde(default)]
    pub input_endpoints: Vec<InputEndpoint>,
}

/// A published endpoint; ports stay strings, exactly as forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InputEndpoint {
    pub name: String,
    pub protocol: String,
    pub port: String,
    pub local_port: String,
}

/// Remote-access wiring for a role.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RemoteConfig {
    pub provider: String,
    pub protocol: String,
    pub input_endpoint_name: String,
}

impl VmTemplate {
    /// Load and parse a descriptor file.
    ///
    /// # Errors
    ///
    /// Returns `TemplateNotFound` if the file is missing, `Io` on other read
    /// failures, or `TemplateParse` if the JSON does not fit the descriptor
    /// shape.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = Self::read_raw(path)?;
        let template: Self =
            serde_json::from_str(&raw).map_err(|e| PodiumError::TemplateParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        tracing::debug!(
            name = %template.expr_name,
            roles = template.virtual_environments.len(),
            "loaded deployment template"
        );
        Ok(template)
    }

    /// Read the raw descriptor bytes for verbatim forwarding.
    ///
    /// # Errors
    ///
    /// Returns `TemplateNotFound` if the file is missing or `Io` on other
    /// read failures.
    pub fn read_raw(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PodiumError::TemplateNotFound(path.to_path_buf())
            } else {
                PodiumError::Io(e)
            }
        })
    }

    /// Role names in declaration order.
    #[must_use]
    pub fn role_names(&self) -> Vec<&str> {
        self.virtual_environments
            .iter()
            .map(|ve| ve.role_name.as_str())
            .collect()
    }

    /// Role names joined for list display.
    #[must_use]
    pub fn joined_role_names(&self, filler: &str) -> String {
        self.role_names().join(filler)
    }

    /// All input endpoints, each paired with its role name.
    #[must_use]
    pub fn endpoints(&self) -> impl Iterator<Item = (&str, &InputEndpoint)> {
        self.virtual_environments.iter().flat_map(|ve| {
            ve.network_config
                .input_endpoints
                .iter()
                .map(move |endpoint| (ve.role_name.as_str(), endpoint))
        })
    }
}
