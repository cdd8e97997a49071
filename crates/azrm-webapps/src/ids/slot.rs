use azrm_resourceids::resource_id;

use super::AppServiceId;

resource_id! {
    /// A deployment slot of a site.
    pub struct SlotId ("Slot") {
        subscription_id, resource_group_name, site_name, slot_name,
    }
    segments = slot_segments![];
}

impl SlotId {
    /// The production site this slot belongs to.
    pub fn app_service_id(&self) -> AppServiceId {
        AppServiceId::new(&self.subscription_id, &self.resource_group_name, &self.site_name)
    }
}

resource_id! {
    pub struct SlotAppSettingId ("Slot App Setting") {
        subscription_id, resource_group_name, site_name, slot_name, app_setting_name,
    }
    segments = slot_segments![
        fixed!(staticConfig = "config"),
        fixed!(staticConfigReferences = "configReferences"),
        fixed!(staticAppSettings = "appSettings"),
        user!(appSettingName),
    ];
}

resource_id! {
    pub struct SlotConnectionStringId ("Slot Connection String") {
        subscription_id, resource_group_name, site_name, slot_name, connection_string_name,
    }
    segments = slot_segments![
        fixed!(staticConfig = "config"),
        fixed!(staticConfigReferences = "configReferences"),
        fixed!(staticConnectionStrings = "connectionStrings"),
        user!(connectionStringName),
    ];
}

resource_id! {
    pub struct SlotBackupId ("Slot Backup") {
        subscription_id, resource_group_name, site_name, slot_name, backup_id,
    }
    segments = slot_segments![fixed!(staticBackups = "backups"), user!(backupId)];
}

resource_id! {
    pub struct SlotContinuousWebJobId ("Slot Continuous Web Job") {
        subscription_id, resource_group_name, site_name, slot_name, continuous_web_job_name,
    }
    segments = slot_segments![
        fixed!(staticContinuousWebJobs = "continuousWebJobs"),
        user!(continuousWebJobName),
    ];
}

resource_id! {
    pub struct SlotTriggeredWebJobId ("Slot Triggered Web Job") {
        subscription_id, resource_group_name, site_name, slot_name, triggered_web_job_name,
    }
    segments = slot_segments![
        fixed!(staticTriggeredWebJobs = "triggeredWebJobs"),
        user!(triggeredWebJobName),
    ];
}

resource_id! {
    pub struct SlotTriggeredWebJobHistoryId ("Slot Triggered Web Job History") {
        subscription_id, resource_group_name, site_name, slot_name, triggered_web_job_name, history_name,
    }
    segments = slot_segments![
        fixed!(staticTriggeredWebJobs = "triggeredWebJobs"),
        user!(triggeredWebJobName),
        fixed!(staticHistory = "history"),
        user!(historyName),
    ];
}

resource_id! {
    pub struct SlotWebJobId ("Slot Web Job") {
        subscription_id, resource_group_name, site_name, slot_name, web_job_name,
    }
    segments = slot_segments![fixed!(staticWebJobs = "webJobs"), user!(webJobName)];
}

resource_id! {
    pub struct SlotFunctionId ("Slot Function") {
        subscription_id, resource_group_name, site_name, slot_name, function_name,
    }
    segments = slot_segments![fixed!(staticFunctions = "functions"), user!(functionName)];
}

resource_id! {
    pub struct SlotFunctionKeyId ("Slot Function Key") {
        subscription_id, resource_group_name, site_name, slot_name, function_name, key_name,
    }
    segments = slot_segments![
        fixed!(staticFunctions = "functions"),
        user!(functionName),
        fixed!(staticKeys = "keys"),
        user!(keyName),
    ];
}

resource_id! {
    pub struct SlotHostKeyId ("Slot Host Key") {
        subscription_id, resource_group_name, site_name, slot_name, key_type, key_name,
    }
    segments = slot_segments![
        fixed!(staticHost = "host"),
        fixed!(staticDefault = "default"),
        user!(keyType),
        user!(keyName),
    ];
}

resource_id! {
    pub struct SlotDeploymentId ("Slot Deployment") {
        subscription_id, resource_group_name, site_name, slot_name, deployment_name,
    }
    segments = slot_segments![fixed!(staticDeployments = "deployments"), user!(deploymentName)];
}

resource_id! {
    pub struct SlotDeploymentStatusId ("Slot Deployment Status") {
        subscription_id, resource_group_name, site_name, slot_name, deployment_status_id,
    }
    segments = slot_segments![
        fixed!(staticDeploymentStatus = "deploymentStatus"),
        user!(deploymentStatusId),
    ];
}

resource_id! {
    pub struct SlotDomainOwnershipIdentifierId ("Slot Domain Ownership Identifier") {
        subscription_id, resource_group_name, site_name, slot_name, domain_ownership_identifier_name,
    }
    segments = slot_segments![
        fixed!(staticDomainOwnershipIdentifiers = "domainOwnershipIdentifiers"),
        user!(domainOwnershipIdentifierName),
    ];
}

resource_id! {
    pub struct SlotHostNameBindingId ("Slot Host Name Binding") {
        subscription_id, resource_group_name, site_name, slot_name, host_name_binding_name,
    }
    segments = slot_segments![
        fixed!(staticHostNameBindings = "hostNameBindings"),
        user!(hostNameBindingName),
    ];
}

resource_id! {
    pub struct SlotHybridConnectionNamespaceRelayId ("Slot Hybrid Connection Namespace Relay") {
        subscription_id, resource_group_name, site_name, slot_name, hybrid_connection_namespace_name, relay_name,
    }
    segments = slot_segments![
        fixed!(staticHybridConnectionNamespaces = "hybridConnectionNamespaces"),
        user!(hybridConnectionNamespaceName),
        fixed!(staticRelays = "relays"),
        user!(relayName),
    ];
}

resource_id! {
    pub struct SlotInstanceId ("Slot Instance") {
        subscription_id, resource_group_name, site_name, slot_name, instance_id,
    }
    segments = slot_segments![fixed!(staticInstances = "instances"), user!(instanceId)];
}

resource_id! {
    pub struct SlotInstanceProcessId ("Slot Instance Process") {
        subscription_id, resource_group_name, site_name, slot_name, instance_id, process_id,
    }
    segments = slot_segments![
        fixed!(staticInstances = "instances"),
        user!(instanceId),
        fixed!(staticProcesses = "processes"),
        user!(processId),
    ];
}

resource_id! {
    pub struct SlotInstanceProcessModuleId ("Slot Instance Process Module") {
        subscription_id, resource_group_name, site_name, slot_name, instance_id, process_id, module_name,
    }
    segments = slot_segments![
        fixed!(staticInstances = "instances"),
        user!(instanceId),
        fixed!(staticProcesses = "processes"),
        user!(processId),
        fixed!(staticModules = "modules"),
        user!(moduleName),
    ];
}

resource_id! {
    pub struct SlotProcessId ("Slot Process") {
        subscription_id, resource_group_name, site_name, slot_name, process_id,
    }
    segments = slot_segments![fixed!(staticProcesses = "processes"), user!(processId)];
}

resource_id! {
    pub struct SlotProcessModuleId ("Slot Process Module") {
        subscription_id, resource_group_name, site_name, slot_name, process_id, module_name,
    }
    segments = slot_segments![
        fixed!(staticProcesses = "processes"),
        user!(processId),
        fixed!(staticModules = "modules"),
        user!(moduleName),
    ];
}

resource_id! {
    pub struct SlotNetworkTraceId ("Slot Network Trace") {
        subscription_id, resource_group_name, site_name, slot_name, operation_id,
    }
    segments = slot_segments![fixed!(staticNetworkTraces = "networkTraces"), user!(operationId)];
}

resource_id! {
    pub struct SlotNetworkTraceOperationResultId ("Slot Network Trace Operation Result") {
        subscription_id, resource_group_name, site_name, slot_name, operation_id,
    }
    segments = slot_segments![
        fixed!(staticNetworkTrace = "networkTrace"),
        fixed!(staticOperationResults = "operationResults"),
        user!(operationId),
    ];
}

resource_id! {
    pub struct SlotNetworkFeatureId ("Slot Network Feature") {
        subscription_id, resource_group_name, site_name, slot_name, network_feature_name,
    }
    segments = slot_segments![
        fixed!(staticNetworkFeatures = "networkFeatures"),
        user!(networkFeatureName),
    ];
}

resource_id! {
    pub struct SlotPremierAddonId ("Slot Premier Addon") {
        subscription_id, resource_group_name, site_name, slot_name, premier_addon_name,
    }
    segments = slot_segments![fixed!(staticPremierAddons = "premierAddons"), user!(premierAddonName)];
}

resource_id! {
    pub struct SlotPrivateEndpointConnectionId ("Slot Private Endpoint Connection") {
        subscription_id, resource_group_name, site_name, slot_name, private_endpoint_connection_name,
    }
    segments = slot_segments![
        fixed!(staticPrivateEndpointConnections = "privateEndpointConnections"),
        user!(privateEndpointConnectionName),
    ];
}

resource_id! {
    pub struct SlotPublicCertificateId ("Slot Public Certificate") {
        subscription_id, resource_group_name, site_name, slot_name, public_certificate_name,
    }
    segments = slot_segments![
        fixed!(staticPublicCertificates = "publicCertificates"),
        user!(publicCertificateName),
    ];
}

resource_id! {
    pub struct SlotSiteExtensionId ("Slot Site Extension") {
        subscription_id, resource_group_name, site_name, slot_name, site_extension_id,
    }
    segments = slot_segments![fixed!(staticSiteExtensions = "siteExtensions"), user!(siteExtensionId)];
}

resource_id! {
    pub struct SlotVirtualNetworkConnectionId ("Slot Virtual Network Connection") {
        subscription_id, resource_group_name, site_name, slot_name, virtual_network_connection_name,
    }
    segments = slot_segments![
        fixed!(staticVirtualNetworkConnections = "virtualNetworkConnections"),
        user!(virtualNetworkConnectionName),
    ];
}

resource_id! {
    pub struct SlotGatewayId ("Slot Gateway") {
        subscription_id, resource_group_name, site_name, slot_name, virtual_network_connection_name, gateway_name,
    }
    segments = slot_segments![
        fixed!(staticVirtualNetworkConnections = "virtualNetworkConnections"),
        user!(virtualNetworkConnectionName),
        fixed!(staticGateways = "gateways"),
        user!(gatewayName),
    ];
}
