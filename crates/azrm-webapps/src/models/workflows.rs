use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{ErrorEntity, ResourceFields};
use crate::constants::{WorkflowHealthState, WorkflowState};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEnvelopeProperties {
    #[serde(default)]
    pub files: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub flow_state: Option<WorkflowState>,
    #[serde(default)]
    pub health: Option<WorkflowHealth>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowHealth {
    #[serde(default)]
    pub error: Option<ErrorEntity>,
    pub state: WorkflowHealthState,
}

/// A Logic Apps (Standard) workflow definition hosted on the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEnvelope {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: Option<WorkflowEnvelopeProperties>,
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
}

impl ResourceFields for WorkflowEnvelope {
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

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_health() {
        let wf: WorkflowEnvelope = serde_json::from_str(
            r#"{"name":"orders","location":"westus","properties":{"flowState":"Enabled","health":{"state":"Unhealthy","error":{"code":"Bad"}}}}"#,
        )
        .unwrap();
        assert_eq!(wf.location(), Some("westus"));
        let props = wf.properties.unwrap();
        assert_eq!(props.flow_state, Some(WorkflowState::Enabled));
        let health = props.health.unwrap();
        assert_eq!(health.state, WorkflowHealthState::Unhealthy);
        assert_eq!(health.error.unwrap().code.as_deref(), Some("Bad"));
    }
}
