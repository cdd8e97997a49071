use azrm_resourceids::resource_id;

resource_id! {
    /// A Key Vault reference behind an app setting.
    pub struct AppSettingId ("App Setting") {
        subscription_id, resource_group_name, site_name, app_setting_name,
    }
    segments = site_segments![
        fixed!(staticConfig = "config"),
        fixed!(staticConfigReferences = "configReferences"),
        fixed!(staticAppSettings = "appSettings"),
        user!(appSettingName),
    ];
}

resource_id! {
    /// A Key Vault reference behind a connection string.
    pub struct ConnectionStringId ("Connection String") {
        subscription_id, resource_group_name, site_name, connection_string_name,
    }
    segments = site_segments![
        fixed!(staticConfig = "config"),
        fixed!(staticConfigReferences = "configReferences"),
        fixed!(staticConnectionStrings = "connectionStrings"),
        user!(connectionStringName),
    ];
}

resource_id! {
    pub struct BackupId ("Backup") {
        subscription_id, resource_group_name, site_name, backup_id,
    }
    segments = site_segments![fixed!(staticBackups = "backups"), user!(backupId)];
}

resource_id! {
    pub struct ContinuousWebJobId ("Continuous Web Job") {
        subscription_id, resource_group_name, site_name, continuous_web_job_name,
    }
    segments = site_segments![
        fixed!(staticContinuousWebJobs = "continuousWebJobs"),
        user!(continuousWebJobName),
    ];
}

resource_id! {
    pub struct TriggeredWebJobId ("Triggered Web Job") {
        subscription_id, resource_group_name, site_name, triggered_web_job_name,
    }
    segments = site_segments![
        fixed!(staticTriggeredWebJobs = "triggeredWebJobs"),
        user!(triggeredWebJobName),
    ];
}

resource_id! {
    /// One recorded run of a triggered web job.
    pub struct TriggeredWebJobHistoryId ("Triggered Web Job History") {
        subscription_id, resource_group_name, site_name, triggered_web_job_name, history_name,
    }
    segments = site_segments![
        fixed!(staticTriggeredWebJobs = "triggeredWebJobs"),
        user!(triggeredWebJobName),
        fixed!(staticHistory = "history"),
        user!(historyName),
    ];
}

resource_id! {
    pub struct WebJobId ("Web Job") {
        subscription_id, resource_group_name, site_name, web_job_name,
    }
    segments = site_segments![fixed!(staticWebJobs = "webJobs"), user!(webJobName)];
}

resource_id! {
    pub struct FunctionId ("Function") {
        subscription_id, resource_group_name, site_name, function_name,
    }
    segments = site_segments![fixed!(staticFunctions = "functions"), user!(functionName)];
}

resource_id! {
    pub struct FunctionKeyId ("Function Key") {
        subscription_id, resource_group_name, site_name, function_name, key_name,
    }
    segments = site_segments![
        fixed!(staticFunctions = "functions"),
        user!(functionName),
        fixed!(staticKeys = "keys"),
        user!(keyName),
    ];
}

resource_id! {
    /// A host-level function key; `key_type` is `functionKeys`, `systemKeys` or `masterKey`.
    pub struct HostKeyId ("Host Key") {
        subscription_id, resource_group_name, site_name, key_type, key_name,
    }
    segments = site_segments![
        fixed!(staticHost = "host"),
        fixed!(staticDefault = "default"),
        user!(keyType),
        user!(keyName),
    ];
}

resource_id! {
    pub struct DeploymentId ("Deployment") {
        subscription_id, resource_group_name, site_name, deployment_name,
    }
    segments = site_segments![fixed!(staticDeployments = "deployments"), user!(deploymentName)];
}

resource_id! {
    pub struct DeploymentStatusId ("Deployment Status") {
        subscription_id, resource_group_name, site_name, deployment_status_id,
    }
    segments = site_segments![
        fixed!(staticDeploymentStatus = "deploymentStatus"),
        user!(deploymentStatusId),
    ];
}

resource_id! {
    pub struct DomainOwnershipIdentifierId ("Domain Ownership Identifier") {
        subscription_id, resource_group_name, site_name, domain_ownership_identifier_name,
    }
    segments = site_segments![
        fixed!(staticDomainOwnershipIdentifiers = "domainOwnershipIdentifiers"),
        user!(domainOwnershipIdentifierName),
    ];
}

resource_id! {
    pub struct HostNameBindingId ("Host Name Binding") {
        subscription_id, resource_group_name, site_name, host_name_binding_name,
    }
    segments = site_segments![
        fixed!(staticHostNameBindings = "hostNameBindings"),
        user!(hostNameBindingName),
    ];
}

resource_id! {
    pub struct HybridConnectionNamespaceRelayId ("Hybrid Connection Namespace Relay") {
        subscription_id, resource_group_name, site_name, hybrid_connection_namespace_name, relay_name,
    }
    segments = site_segments![
        fixed!(staticHybridConnectionNamespaces = "hybridConnectionNamespaces"),
        user!(hybridConnectionNamespaceName),
        fixed!(staticRelays = "relays"),
        user!(relayName),
    ];
}

resource_id! {
    /// A scaled-out instance of the site.
    pub struct InstanceId ("Instance") {
        subscription_id, resource_group_name, site_name, instance_id,
    }
    segments = site_segments![fixed!(staticInstances = "instances"), user!(instanceId)];
}

resource_id! {
    pub struct InstanceProcessId ("Instance Process") {
        subscription_id, resource_group_name, site_name, instance_id, process_id,
    }
    segments = site_segments![
        fixed!(staticInstances = "instances"),
        user!(instanceId),
        fixed!(staticProcesses = "processes"),
        user!(processId),
    ];
}

resource_id! {
    pub struct InstanceProcessModuleId ("Instance Process Module") {
        subscription_id, resource_group_name, site_name, instance_id, process_id, module_name,
    }
    segments = site_segments![
        fixed!(staticInstances = "instances"),
        user!(instanceId),
        fixed!(staticProcesses = "processes"),
        user!(processId),
        fixed!(staticModules = "modules"),
        user!(moduleName),
    ];
}

resource_id! {
    pub struct ProcessId ("Process") {
        subscription_id, resource_group_name, site_name, process_id,
    }
    segments = site_segments![fixed!(staticProcesses = "processes"), user!(processId)];
}

resource_id! {
    pub struct ProcessModuleId ("Process Module") {
        subscription_id, resource_group_name, site_name, process_id, module_name,
    }
    segments = site_segments![
        fixed!(staticProcesses = "processes"),
        user!(processId),
        fixed!(staticModules = "modules"),
        user!(moduleName),
    ];
}

resource_id! {
    pub struct NetworkTraceId ("Network Trace") {
        subscription_id, resource_group_name, site_name, operation_id,
    }
    segments = site_segments![fixed!(staticNetworkTraces = "networkTraces"), user!(operationId)];
}

resource_id! {
    pub struct NetworkTraceOperationResultId ("Network Trace Operation Result") {
        subscription_id, resource_group_name, site_name, operation_id,
    }
    segments = site_segments![
        fixed!(staticNetworkTrace = "networkTrace"),
        fixed!(staticOperationResults = "operationResults"),
        user!(operationId),
    ];
}

resource_id! {
    pub struct NetworkFeatureId ("Network Feature") {
        subscription_id, resource_group_name, site_name, network_feature_name,
    }
    segments = site_segments![
        fixed!(staticNetworkFeatures = "networkFeatures"),
        user!(networkFeatureName),
    ];
}

resource_id! {
    pub struct PremierAddonId ("Premier Addon") {
        subscription_id, resource_group_name, site_name, premier_addon_name,
    }
    segments = site_segments![fixed!(staticPremierAddons = "premierAddons"), user!(premierAddonName)];
}

resource_id! {
    pub struct PrivateEndpointConnectionId ("Private Endpoint Connection") {
        subscription_id, resource_group_name, site_name, private_endpoint_connection_name,
    }
    segments = site_segments![
        fixed!(staticPrivateEndpointConnections = "privateEndpointConnections"),
        user!(privateEndpointConnectionName),
    ];
}

resource_id! {
    pub struct PublicCertificateId ("Public Certificate") {
        subscription_id, resource_group_name, site_name, public_certificate_name,
    }
    segments = site_segments![
        fixed!(staticPublicCertificates = "publicCertificates"),
        user!(publicCertificateName),
    ];
}

resource_id! {
    pub struct SiteExtensionId ("Site Extension") {
        subscription_id, resource_group_name, site_name, site_extension_id,
    }
    segments = site_segments![fixed!(staticSiteExtensions = "siteExtensions"), user!(siteExtensionId)];
}

resource_id! {
    pub struct VirtualNetworkConnectionId ("Virtual Network Connection") {
        subscription_id, resource_group_name, site_name, virtual_network_connection_name,
    }
    segments = site_segments![
        fixed!(staticVirtualNetworkConnections = "virtualNetworkConnections"),
        user!(virtualNetworkConnectionName),
    ];
}

resource_id! {
    /// A gateway of a virtual network connection.
    pub struct GatewayId ("Gateway") {
        subscription_id, resource_group_name, site_name, virtual_network_connection_name, gateway_name,
    }
    segments = site_segments![
        fixed!(staticVirtualNetworkConnections = "virtualNetworkConnections"),
        user!(virtualNetworkConnectionName),
        fixed!(staticGateways = "gateways"),
        user!(gatewayName),
    ];
}

resource_id! {
    /// A Logic Apps workflow hosted on the site.
    pub struct WorkflowId ("Workflow") {
        subscription_id, resource_group_name, site_name, workflow_name,
    }
    segments = site_segments![fixed!(staticWorkflows = "workflows"), user!(workflowName)];
}
