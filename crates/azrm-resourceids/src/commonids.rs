//! IDs shared across resource-manager packages.

use crate::segment::Segment;

crate::resource_id! {
    /// `/subscriptions/{subscriptionId}`
    pub struct SubscriptionId ("Subscription") {
        subscription_id,
    }
    segments = [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
    ];
}

crate::resource_id! {
    /// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}`
    pub struct ResourceGroupId ("Resource Group") {
        subscription_id,
        resource_group_name,
    }
    segments = [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
    ];
}

crate::resource_id! {
    /// An App Service site (web app or function app).
    pub struct AppServiceId ("App Service") {
        subscription_id,
        resource_group_name,
        site_name,
    }
    segments = [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web"),
        Segment::static_segment("staticSites", "sites"),
        Segment::user_specified("siteName"),
    ];
}

impl ResourceGroupId {
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(&self.subscription_id)
    }
}

impl AppServiceId {
    pub fn resource_group(&self) -> ResourceGroupId {
        ResourceGroupId::new(&self.subscription_id, &self.resource_group_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{recase, ResourceId, ResourceIdError};
    use pretty_assertions::assert_eq;

    const SITE: &str =
        "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.Web/sites/siteName";

    #[test]
    fn app_service_round_trip() {
        let id = AppServiceId::new("12345678-1234-9876-4563-123456789012", "example-resource-group", "siteName");
        assert_eq!(id.id(), SITE);
        assert_eq!(AppServiceId::parse(SITE).unwrap(), id);
        assert_eq!(SITE.parse::<AppServiceId>().unwrap(), id);
    }

    #[test]
    fn example_matches_format() {
        assert_eq!(AppServiceId::example(), SITE);
        assert_eq!(
            AppServiceId::format(),
            "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Web/sites/{siteName}"
        );
    }

    #[test]
    fn insensitive_keeps_user_casing() {
        let id = AppServiceId::parse_insensitively(
            "/SUBSCRIPTIONS/Sub1/RESOURCEGROUPS/Rg1/PROVIDERS/MICROSOFT.WEB/SITES/MySite",
        )
        .unwrap();
        assert_eq!(id, AppServiceId::new("Sub1", "Rg1", "MySite"));
        assert!(AppServiceId::parse("/SUBSCRIPTIONS/Sub1/resourceGroups/Rg1").is_err());
    }

    #[test]
    fn missing_segment_is_named() {
        let err = AppServiceId::parse("/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Web/sites")
            .unwrap_err();
        assert_eq!(err.missing_segment(), Some("siteName"));
        assert!(err.to_string().contains("App Service ID"));

        let err = ResourceGroupId::parse("/subscriptions/sub1").unwrap_err();
        assert_eq!(err.missing_segment(), Some("resourceGroupName"));
    }

    #[test]
    fn parse_error_is_wrapped() {
        let err = SubscriptionId::parse("/tenants/t1").unwrap_err();
        assert!(matches!(err, ResourceIdError::Parsing { .. }));
        assert!(err.to_string().starts_with(r#"parsing "/tenants/t1": "#));
    }

    #[test]
    fn validate_typed_and_untyped() {
        assert!(AppServiceId::validate(SITE).1.is_empty());
        assert_eq!(AppServiceId::validate("/subscriptions/s").1.len(), 1);

        let (warnings, errors) = AppServiceId::validate_value(&serde_json::json!(42), "app_service_id");
        assert!(warnings.is_empty());
        assert_eq!(
            errors,
            vec![ResourceIdError::ExpectedString { key: "app_service_id".into() }]
        );
        assert!(AppServiceId::validate_value(&serde_json::json!(SITE), "k").1.is_empty());
    }

    #[test]
    fn label() {
        let id = ResourceGroupId::new("sub1", "rg1");
        assert_eq!(
            id.to_string(),
            "Resource Group (Subscription: \"sub1\"\nResource Group Name: \"rg1\")"
        );
    }

    #[test]
    fn recasing() {
        assert_eq!(
            recase::<ResourceGroupId>("/SUBSCRIPTIONS/sub1/resourcegroups/RG1").unwrap(),
            "/subscriptions/sub1/resourceGroups/RG1"
        );
    }

    #[test]
    fn parents() {
        let site = AppServiceId::new("s", "rg", "app");
        assert_eq!(site.resource_group().subscription(), SubscriptionId::new("s"));
    }
}
