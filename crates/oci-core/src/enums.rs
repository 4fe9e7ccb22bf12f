//! String enums with forward-compatible decoding.
//!
//! Services add new enum values over time. Enums declared with [`oci_enum!`]
//! keep every value they do not know as `Unknown(String)` so that responses
//! from newer API versions still decode. Decoding matches the wire spelling
//! exactly, so a value always serializes back the way it arrived;
//! `lookup` and `FromStr` accept any casing for values typed by hand.

/// Declare a string-valued enum.
///
/// ```
/// oci_core::oci_enum! {
///     /// Volume lifecycle state.
///     pub enum VolumeLifecycleState {
///         /// Being provisioned.
///         Provisioning => "PROVISIONING",
///         /// Ready for use.
///         Available => "AVAILABLE",
///     }
/// }
///
/// let state: VolumeLifecycleState = "AVAILABLE".into();
/// assert_eq!(state, VolumeLifecycleState::Available);
/// assert_eq!(VolumeLifecycleState::values().len(), 2);
/// assert!(VolumeLifecycleState::from("RESTORING").is_unknown());
/// ```
#[macro_export]
macro_rules! oci_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value not known to this version of the bindings.
            Unknown(String),
        }

        impl $name {
            /// Wire representation of this value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// All known values.
            #[must_use]
            pub fn values() -> Vec<Self> {
                vec![$(Self::$variant),+]
            }

            /// Known value spelled exactly as on the wire.
            #[must_use]
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Case-insensitive lookup of a known value.
            #[must_use]
            pub fn lookup(value: &str) -> Option<Self> {
                $(
                    if value.eq_ignore_ascii_case($value) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            /// Returns true for values outside the known set.
            #[must_use]
            pub const fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from_wire(value).unwrap_or_else(|| Self::Unknown(value.to_string()))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::lookup(value).ok_or_else(|| {
                    $crate::Error::InvalidRequest(format!(
                        "unknown {} value: {value}",
                        stringify!($name)
                    ))
                })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::__serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

oci_enum! {
    /// Sort direction for list operations.
    pub enum SortOrder {
        /// Ascending.
        Asc => "ASC",
        /// Descending.
        Desc => "DESC",
    }
}

oci_enum! {
    /// Sort field for list operations.
    pub enum SortBy {
        /// Creation time.
        TimeCreated => "TIMECREATED",
        /// Display name.
        DisplayName => "DISPLAYNAME",
    }
}
