/// Declare a typed resource ID.
///
/// ```
/// use azrm_resourceids::{resource_id, ResourceId, Segment};
///
/// resource_id! {
///     /// A resource group.
///     pub struct GroupId ("Group") {
///         subscription_id,
///         resource_group_name,
///     }
///     segments = [
///         Segment::static_segment("staticSubscriptions", "subscriptions"),
///         Segment::subscription_id("subscriptionId"),
///         Segment::static_segment("staticResourceGroups", "resourceGroups"),
///         Segment::resource_group("resourceGroupName"),
///     ];
/// }
///
/// let id = GroupId::new("sub1", "rg1");
/// assert_eq!(id.id(), "/subscriptions/sub1/resourceGroups/rg1");
/// assert_eq!(GroupId::parse(&id.id()).unwrap(), id);
/// ```
///
/// Fields are listed in the order of the value segments in the template.
#[macro_export]
macro_rules! resource_id {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident ($type_name:literal) {
            $( $field:ident ),+ $(,)?
        }
        segments = $segments:expr;
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        $vis struct $name {
            $( pub $field: ::std::string::String, )+
        }

        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($( $field: impl ::std::convert::Into<::std::string::String> ),+) -> Self {
                Self { $( $field: $field.into() ),+ }
            }
        }

        impl $crate::ResourceId for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn segments() -> &'static [$crate::Segment] {
                const SEGMENTS: &[$crate::Segment] = &$segments;
                SEGMENTS
            }

            fn values(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![$( self.$field.as_str() ),+]
            }

            fn from_values(mut values: ::std::vec::IntoIter<::std::string::String>) -> Self {
                Self { $( $field: values.next().unwrap_or_default() ),+ }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::ResourceId::fmt_label(self, f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ResourceIdError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::ResourceId>::parse(s)
            }
        }
    };
}
