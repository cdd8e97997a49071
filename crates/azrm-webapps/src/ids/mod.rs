//! Resource IDs nested under `Microsoft.Web/sites`.
//!
//! Site-level IDs live in [`site`], their deployment-slot twins in [`slot`].

/// A literal segment: `fixed!(staticConfig = "config")`.
macro_rules! fixed {
    ($name:ident = $value:literal) => {
        ::azrm_resourceids::Segment::static_segment(stringify!($name), $value)
    };
}

/// A user-supplied segment named after the ID field it fills.
macro_rules! user {
    ($name:ident) => {
        ::azrm_resourceids::Segment::user_specified(stringify!($name))
    };
}

/// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Web/sites/{siteName}`
/// followed by `$extra`.
macro_rules! site_segments {
    ($($extra:expr),* $(,)?) => {
        [
            fixed!(staticSubscriptions = "subscriptions"),
            ::azrm_resourceids::Segment::subscription_id("subscriptionId"),
            fixed!(staticResourceGroups = "resourceGroups"),
            ::azrm_resourceids::Segment::resource_group("resourceGroupName"),
            fixed!(staticProviders = "providers"),
            ::azrm_resourceids::Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web"),
            fixed!(staticSites = "sites"),
            user!(siteName),
            $($extra),*
        ]
    };
}

/// The site prefix plus `/slots/{slotName}`, followed by `$extra`.
macro_rules! slot_segments {
    ($($extra:expr),* $(,)?) => {
        site_segments![
            fixed!(staticSlots = "slots"),
            user!(slotName),
            $($extra),*
        ]
    };
}

pub mod site;
pub mod slot;

pub use azrm_resourceids::commonids::{AppServiceId, ResourceGroupId, SubscriptionId};
pub use site::*;
pub use slot::*;
