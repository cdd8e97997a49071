//! String enums of the `Microsoft.Web` 2023-12-01 API.
//!
//! Every enum is open: values the service adds later deserialize into
//! `Other` instead of failing. Parsing ignores ASCII case and yields the
//! canonical spelling.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! string_enum {
    (
        $(#[$attr:meta])*
        $name:ident { $( $variant:ident => $value:literal ),+ $(,)? }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            /// A value this client does not know about.
            Other(String),
        }

        impl $name {
            pub fn possible_values() -> &'static [&'static str] {
                &[$( $value ),+]
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(input: &str) -> Self {
                $(
                    if input.eq_ignore_ascii_case($value) {
                        return Self::$variant;
                    }
                )+
                Self::Other(input.to_string())
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(input))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::from(raw.as_str()))
            }
        }
    };
}

string_enum! {
    AuthType {
        Anonymous => "Anonymous",
        SystemIdentity => "SystemIdentity",
        UserAssigned => "UserAssigned",
        UserCredentials => "UserCredentials",
    }
}

string_enum! {
    AuthenticationType {
        StorageAccountConnectionString => "StorageAccountConnectionString",
        SystemAssignedIdentity => "SystemAssignedIdentity",
        UserAssignedIdentity => "UserAssignedIdentity",
    }
}

string_enum! {
    AutoHealActionType {
        CustomAction => "CustomAction",
        LogEvent => "LogEvent",
        Recycle => "Recycle",
    }
}

string_enum! {
    AzureResourceType {
        TrafficManager => "TrafficManager",
        Website => "Website",
    }
}

string_enum! {
    AzureStorageProtocol {
        Http => "Http",
        Nfs => "Nfs",
        Smb => "Smb",
    }
}

string_enum! {
    AzureStorageState {
        InvalidCredentials => "InvalidCredentials",
        InvalidShare => "InvalidShare",
        NotValidated => "NotValidated",
        Ok => "Ok",
    }
}

string_enum! {
    AzureStorageType {
        AzureBlob => "AzureBlob",
        AzureFiles => "AzureFiles",
    }
}

string_enum! {
    BackupItemStatus {
        Created => "Created",
        DeleteFailed => "DeleteFailed",
        DeleteInProgress => "DeleteInProgress",
        Deleted => "Deleted",
        Failed => "Failed",
        InProgress => "InProgress",
        PartiallySucceeded => "PartiallySucceeded",
        Skipped => "Skipped",
        Succeeded => "Succeeded",
        TimedOut => "TimedOut",
    }
}

string_enum! {
    BackupRestoreOperationType {
        Clone => "Clone",
        CloudFs => "CloudFS",
        Default => "Default",
        Relocation => "Relocation",
        Snapshot => "Snapshot",
    }
}

string_enum! {
    BuiltInAuthenticationProvider {
        AzureActiveDirectory => "AzureActiveDirectory",
        Facebook => "Facebook",
        Github => "Github",
        Google => "Google",
        MicrosoftAccount => "MicrosoftAccount",
        Twitter => "Twitter",
    }
}

string_enum! {
    ClientCertMode {
        Optional => "Optional",
        OptionalInteractiveUser => "OptionalInteractiveUser",
        Required => "Required",
    }
}

string_enum! {
    ClientCredentialMethod {
        ClientSecretPost => "ClientSecretPost",
    }
}

string_enum! {
    CloneAbilityResult {
        Cloneable => "Cloneable",
        NotCloneable => "NotCloneable",
        PartiallyCloneable => "PartiallyCloneable",
    }
}

string_enum! {
    ConfigReferenceSource {
        KeyVault => "KeyVault",
    }
}

string_enum! {
    ConnectionStringType {
        ApiHub => "ApiHub",
        Custom => "Custom",
        DocDb => "DocDb",
        EventHub => "EventHub",
        MySql => "MySql",
        NotificationHub => "NotificationHub",
        PostgreSql => "PostgreSQL",
        RedisCache => "RedisCache",
        SqlAzure => "SQLAzure",
        SqlServer => "SQLServer",
        ServiceBus => "ServiceBus",
    }
}

string_enum! {
    ContinuousWebJobStatus {
        Initializing => "Initializing",
        PendingRestart => "PendingRestart",
        Running => "Running",
        Starting => "Starting",
        Stopped => "Stopped",
    }
}

string_enum! {
    CookieExpirationConvention {
        FixedTime => "FixedTime",
        IdentityProviderDerived => "IdentityProviderDerived",
    }
}

string_enum! {
    CustomHostNameDnsRecordType {
        A => "A",
        CName => "CName",
    }
}

string_enum! {
    DaprLogLevel {
        Debug => "debug",
        Error => "error",
        Info => "info",
        Warn => "warn",
    }
}

string_enum! {
    DatabaseType {
        LocalMySql => "LocalMySql",
        MySql => "MySql",
        PostgreSql => "PostgreSql",
        SqlAzure => "SqlAzure",
    }
}

string_enum! {
    DefaultAction {
        Allow => "Allow",
        Deny => "Deny",
    }
}

string_enum! {
    DeploymentBuildStatus {
        BuildAborted => "BuildAborted",
        BuildFailed => "BuildFailed",
        BuildInProgress => "BuildInProgress",
        BuildPending => "BuildPending",
        BuildRequestReceived => "BuildRequestReceived",
        BuildSuccessful => "BuildSuccessful",
        PostBuildRestartRequired => "PostBuildRestartRequired",
        RuntimeFailed => "RuntimeFailed",
        RuntimeStarting => "RuntimeStarting",
        RuntimeSuccessful => "RuntimeSuccessful",
        StartPolling => "StartPolling",
        StartPollingWithRestart => "StartPollingWithRestart",
        TimedOut => "TimedOut",
    }
}

string_enum! {
    DnsVerificationTestResult {
        Failed => "Failed",
        Passed => "Passed",
        Skipped => "Skipped",
    }
}

string_enum! {
    ForwardProxyConvention {
        Custom => "Custom",
        NoProxy => "NoProxy",
        Standard => "Standard",
    }
}

string_enum! {
    FrequencyUnit {
        Day => "Day",
        Hour => "Hour",
    }
}

string_enum! {
    FtpsState {
        AllAllowed => "AllAllowed",
        Disabled => "Disabled",
        FtpsOnly => "FtpsOnly",
    }
}

string_enum! {
    FunctionsDeploymentStorageType {
        BlobContainer => "blobContainer",
    }
}

string_enum! {
    HostNameType {
        Managed => "Managed",
        Verified => "Verified",
    }
}

string_enum! {
    HostType {
        Repository => "Repository",
        Standard => "Standard",
    }
}

string_enum! {
    IpFilterTag {
        Default => "Default",
        ServiceTag => "ServiceTag",
        XffProxy => "XffProxy",
    }
}

string_enum! {
    LogLevel {
        Error => "Error",
        Information => "Information",
        Off => "Off",
        Verbose => "Verbose",
        Warning => "Warning",
    }
}

string_enum! {
    MsDeployLogEntryType {
        Error => "Error",
        Message => "Message",
        Warning => "Warning",
    }
}

string_enum! {
    MsDeployProvisioningState {
        Accepted => "accepted",
        Canceled => "canceled",
        Failed => "failed",
        Running => "running",
        Succeeded => "succeeded",
    }
}

string_enum! {
    ManagedPipelineMode {
        Classic => "Classic",
        Integrated => "Integrated",
    }
}

string_enum! {
    MySqlMigrationType {
        LocalToRemote => "LocalToRemote",
        RemoteToLocal => "RemoteToLocal",
    }
}

string_enum! {
    OperationStatus {
        Created => "Created",
        Failed => "Failed",
        InProgress => "InProgress",
        Succeeded => "Succeeded",
        TimedOut => "TimedOut",
    }
}

string_enum! {
    PublicCertificateLocation {
        CurrentUserMy => "CurrentUserMy",
        LocalMachineMy => "LocalMachineMy",
        Unknown => "Unknown",
    }
}

string_enum! {
    PublishingProfileFormat {
        FileZilla3 => "FileZilla3",
        Ftp => "Ftp",
        WebDeploy => "WebDeploy",
    }
}

string_enum! {
    RedundancyMode {
        ActiveActive => "ActiveActive",
        Failover => "Failover",
        GeoRedundant => "GeoRedundant",
        Manual => "Manual",
        None => "None",
    }
}

string_enum! {
    ResolveStatus {
        AccessToKeyVaultDenied => "AccessToKeyVaultDenied",
        FetchTimedOut => "FetchTimedOut",
        Initialized => "Initialized",
        InvalidSyntax => "InvalidSyntax",
        MsiNotEnabled => "MSINotEnabled",
        OtherReasons => "OtherReasons",
        Resolved => "Resolved",
        SecretNotFound => "SecretNotFound",
        SecretVersionNotFound => "SecretVersionNotFound",
        UnauthorizedClient => "UnauthorizedClient",
        VaultNotFound => "VaultNotFound",
    }
}

string_enum! {
    RouteType {
        Default => "DEFAULT",
        Inherited => "INHERITED",
        Static => "STATIC",
    }
}

string_enum! {
    RuntimeName {
        Custom => "custom",
        DotnetIsolated => "dotnet-isolated",
        Java => "java",
        Node => "node",
        Powershell => "powershell",
        Python => "python",
    }
}

string_enum! {
    ScmType {
        BitbucketGit => "BitbucketGit",
        BitbucketHg => "BitbucketHg",
        CodePlexGit => "CodePlexGit",
        CodePlexHg => "CodePlexHg",
        Dropbox => "Dropbox",
        ExternalGit => "ExternalGit",
        ExternalHg => "ExternalHg",
        GitHub => "GitHub",
        LocalGit => "LocalGit",
        None => "None",
        OneDrive => "OneDrive",
        Tfs => "Tfs",
        Vso => "VSO",
        Vstsrm => "VSTSRM",
    }
}

string_enum! {
    SiteAvailabilityState {
        DisasterRecoveryMode => "DisasterRecoveryMode",
        Limited => "Limited",
        Normal => "Normal",
    }
}

string_enum! {
    SiteExtensionType {
        Gallery => "Gallery",
        WebRoot => "WebRoot",
    }
}

string_enum! {
    SiteLoadBalancing {
        LeastRequests => "LeastRequests",
        LeastResponseTime => "LeastResponseTime",
        PerSiteRoundRobin => "PerSiteRoundRobin",
        RequestHash => "RequestHash",
        WeightedRoundRobin => "WeightedRoundRobin",
        WeightedTotalTraffic => "WeightedTotalTraffic",
    }
}

string_enum! {
    SiteRuntimeState {
        Ready => "READY",
        Stopped => "STOPPED",
        Unknown => "UNKNOWN",
    }
}

string_enum! {
    SslState {
        Disabled => "Disabled",
        IpBasedEnabled => "IpBasedEnabled",
        SniEnabled => "SniEnabled",
    }
}

string_enum! {
    SupportedTlsVersions {
        OnePointZero => "1.0",
        OnePointOne => "1.1",
        OnePointTwo => "1.2",
        OnePointThree => "1.3",
    }
}

string_enum! {
    TlsCipherSuites {
        TlsAes128GcmSha256 => "TLS_AES_128_GCM_SHA256",
        TlsAes256GcmSha384 => "TLS_AES_256_GCM_SHA384",
        TlsEcdheEcdsaWithAes128CbcSha256 => "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256",
        TlsEcdheEcdsaWithAes128GcmSha256 => "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
        TlsEcdheEcdsaWithAes256GcmSha384 => "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
        TlsEcdheRsaWithAes128CbcSha => "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
        TlsEcdheRsaWithAes128CbcSha256 => "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256",
        TlsEcdheRsaWithAes128GcmSha256 => "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
        TlsEcdheRsaWithAes256CbcSha => "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
        TlsEcdheRsaWithAes256CbcSha384 => "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384",
        TlsEcdheRsaWithAes256GcmSha384 => "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
        TlsRsaWithAes128CbcSha => "TLS_RSA_WITH_AES_128_CBC_SHA",
        TlsRsaWithAes128CbcSha256 => "TLS_RSA_WITH_AES_128_CBC_SHA256",
        TlsRsaWithAes128GcmSha256 => "TLS_RSA_WITH_AES_128_GCM_SHA256",
        TlsRsaWithAes256CbcSha => "TLS_RSA_WITH_AES_256_CBC_SHA",
        TlsRsaWithAes256CbcSha256 => "TLS_RSA_WITH_AES_256_CBC_SHA256",
        TlsRsaWithAes256GcmSha384 => "TLS_RSA_WITH_AES_256_GCM_SHA384",
    }
}

string_enum! {
    TriggeredWebJobStatus {
        Error => "Error",
        Failed => "Failed",
        Success => "Success",
    }
}

string_enum! {
    UnauthenticatedClientAction {
        AllowAnonymous => "AllowAnonymous",
        RedirectToLoginPage => "RedirectToLoginPage",
    }
}

string_enum! {
    UnauthenticatedClientActionV2 {
        AllowAnonymous => "AllowAnonymous",
        RedirectToLoginPage => "RedirectToLoginPage",
        Return401 => "Return401",
        Return403 => "Return403",
    }
}

string_enum! {
    UsageState {
        Exceeded => "Exceeded",
        Normal => "Normal",
    }
}

string_enum! {
    WebJobType {
        Continuous => "Continuous",
        Triggered => "Triggered",
    }
}

string_enum! {
    WorkflowHealthState {
        Healthy => "Healthy",
        NotSpecified => "NotSpecified",
        Unhealthy => "Unhealthy",
        Unknown => "Unknown",
    }
}

string_enum! {
    WorkflowState {
        Completed => "Completed",
        Deleted => "Deleted",
        Disabled => "Disabled",
        Enabled => "Enabled",
        NotSpecified => "NotSpecified",
        Suspended => "Suspended",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case() {
        assert_eq!("sqlazure".parse::<ConnectionStringType>().unwrap(), ConnectionStringType::SqlAzure);
        assert_eq!(SupportedTlsVersions::from("1.2"), SupportedTlsVersions::OnePointTwo);
        assert_eq!(RuntimeName::from("DOTNET-ISOLATED").as_str(), "dotnet-isolated");
    }

    #[test]
    fn unknown_values_are_kept() {
        let state = BackupItemStatus::from("Archived");
        assert_eq!(state, BackupItemStatus::Other("Archived".into()));
        assert_eq!(state.to_string(), "Archived");
    }

    #[test]
    fn serde_uses_wire_spelling() {
        let json = serde_json::to_string(&FtpsState::FtpsOnly).unwrap();
        assert_eq!(json, r#""FtpsOnly""#);
        let back: ScmType = serde_json::from_str(r#""vstsrm""#).unwrap();
        assert_eq!(back, ScmType::Vstsrm);
    }

    #[test]
    fn possible_values_listed() {
        assert_eq!(TlsCipherSuites::possible_values().len(), 17);
        assert_eq!(SiteRuntimeState::possible_values(), &["READY", "STOPPED", "UNKNOWN"]);
        assert!(RedundancyMode::possible_values().contains(&"None"));
    }
}
