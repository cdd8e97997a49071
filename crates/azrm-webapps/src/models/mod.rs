//! Request and response bodies of the `Microsoft.Web/sites` API.
//!
//! Most child resources share the ARM proxy-resource envelope
//! (`id`, `kind`, `name`, `type`, `properties`) and are declared as
//! [`ProxyResource`] aliases over their properties.

use serde::{Deserialize, Serialize};

mod backups;
mod configuration;
mod deployments;
mod functions;
mod host_names;
mod networking;
mod processes;
mod site;
mod site_extensions;
mod web_jobs;
mod workflows;

pub use backups::*;
pub use configuration::*;
pub use deployments::*;
pub use functions::*;
pub use host_names::*;
pub use networking::*;
pub use processes::*;
pub use site::*;
pub use site_extensions::*;
pub use web_jobs::*;
pub use workflows::*;

/// ARM proxy-resource envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyResource<P> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<P>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl<P> ProxyResource<P> {
    /// A request body carrying only properties.
    pub fn with_properties(properties: P) -> Self {
        Self {
            id: None,
            kind: None,
            name: None,
            properties: Some(properties),
            resource_type: None,
        }
    }
}

/// Envelope fields list predicates compare against.
pub trait ResourceFields {
    fn id(&self) -> Option<&str>;
    fn kind(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;
    fn resource_type(&self) -> Option<&str>;

    /// Only tracked resources carry a location.
    fn location(&self) -> Option<&str> {
        None
    }
}

impl<P> ResourceFields for ProxyResource<P> {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }
}

/// Error detail embedded in operation and deployment-status bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntity {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<Vec<ErrorEntity>>,
    #[serde(default)]
    pub extended_code: Option<String>,
    #[serde(default)]
    pub inner_errors: Option<Vec<ErrorEntity>>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub message_template: Option<String>,
    #[serde(default)]
    pub parameters: Option<Vec<String>>,
    #[serde(default)]
    pub target: Option<String>,
}

/// `{"id": "..."}` reference to another ARM resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmIdWrapper {
    #[serde(default)]
    pub id: Option<String>,
}
