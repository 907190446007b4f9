//! Macros for defining typed resource IDs.

/// Macro to define a typed resource ID from its segment table.
///
/// This generates a struct with one `String` field per scope component and
/// segment, plus:
/// - A `KIND` constant and a [`TypedResourceId`] impl carrying the [`IdSchema`]
/// - `new()` to build the ID from known components
/// - `parse()` to parse the canonical string
/// - `id()`, `Display` and `FromStr`
/// - `Serialize` and `Deserialize` as the canonical string
///
/// The scope is one of `tenant`, `subscription` or `resource_group`, which
/// adds no field, `subscription_id`, or `subscription_id` and
/// `resource_group` respectively. Each `providers` block lists its segments
/// as `field: "segmentKey"` in ID order.
///
/// # Example
///
/// ```ignore
/// define_resource_id! {
///     pub struct SubnetId: "subnet" {
///         scope: resource_group,
///         providers "Microsoft.Network" {
///             virtual_network_name: "virtualNetworks",
///             name: "subnets",
///         }
///     }
/// }
///
/// let id = SubnetId::new("sub", "rg1", "vnet1", "sn1");
/// let parsed: SubnetId = id.id().parse()?;
/// ```
///
/// [`TypedResourceId`]: crate::TypedResourceId
/// [`IdSchema`]: crate::IdSchema
#[macro_export]
macro_rules! define_resource_id {
    (
        @define
        $(#[$meta:meta])*
        $vis:vis $name:ident $kind:literal $scope:ident [$($scope_field:ident)*]
        $(providers $ns:literal { $($field:ident : $key:literal),* $(,)? })*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name {
            $(pub $scope_field: String,)*
            $($(pub $field: String,)*)*
        }

        impl $name {
            /// Catalog name of this resource type.
            pub const KIND: &'static str = $kind;

            /// Builds the ID from its components, in ID order.
            #[must_use]
            #[allow(clippy::too_many_arguments)]
            pub fn new(
                $($scope_field: impl Into<String>,)*
                $($($field: impl Into<String>,)*)*
            ) -> Self {
                Self {
                    $($scope_field: $scope_field.into(),)*
                    $($($field: $field.into(),)*)*
                }
            }

            /// Parses the ID from its canonical string.
            pub fn parse(input: &str) -> Result<Self, $crate::IdError> {
                $crate::parse_typed(input)
            }

            /// Formats the canonical ID string.
            #[must_use]
            pub fn id(&self) -> String {
                $crate::format_typed(self)
            }
        }

        impl $crate::TypedResourceId for $name {
            const SCHEMA: $crate::IdSchema = $crate::IdSchema {
                kind: $kind,
                type_name: stringify!($name),
                scope: $crate::IdScope::$scope,
                providers: &[$(
                    $crate::ProviderSpec {
                        namespace: $ns,
                        segments: &[$(
                            $crate::SegmentSpec {
                                field: stringify!($field),
                                key: $key,
                            },
                        )*],
                    },
                )*],
            };

            fn from_values(values: Vec<String>) -> Self {
                let mut values = values.into_iter();
                Self {
                    $($scope_field: values.next().unwrap_or_default(),)*
                    $($($field: values.next().unwrap_or_default(),)*)*
                }
            }

            fn values(&self) -> Vec<&str> {
                vec![
                    $(self.$scope_field.as_str(),)*
                    $($(self.$field.as_str(),)*)*
                ]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.id())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $kind:literal {
            scope: tenant,
            $($body:tt)*
        }
    ) => {
        $crate::define_resource_id!(@define $(#[$meta])* $vis $name $kind Tenant [] $($body)*);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $kind:literal {
            scope: subscription,
            $($body:tt)*
        }
    ) => {
        $crate::define_resource_id!(
            @define $(#[$meta])* $vis $name $kind Subscription [subscription_id] $($body)*
        );
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $kind:literal {
            scope: resource_group,
            $($body:tt)*
        }
    ) => {
        $crate::define_resource_id!(
            @define $(#[$meta])* $vis $name $kind ResourceGroup [subscription_id resource_group] $($body)*
        );
    };
}
