//! Models selected by a discriminator field.
//!
//! Request and response bodies such as volume sources or platform
//! configurations are JSON objects whose concrete shape is named by one
//! field (`type`, `sourceType`, ...). Types declared with [`oci_polymorphic!`]
//! decode the known shapes into their own structs and keep any other object
//! as an [`UnknownVariant`] that serializes back exactly as it was received.

use serde::de::{self, DeserializeOwned, Unexpected};
use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Payload of a discriminator value this version of the bindings does not
/// know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    /// Discriminator value as received.
    pub kind: String,
    /// Every other field of the object.
    pub fields: Map<String, Value>,
}

impl UnknownVariant {
    /// An unknown variant with no fields besides the discriminator.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Map::new(),
        }
    }

    /// Field `name` of the payload.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    #[doc(hidden)]
    pub fn serialize_tagged<S: Serializer>(
        &self,
        tag: &str,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut object = self.fields.clone();
        object.insert(tag.to_string(), Value::String(self.kind.clone()));
        object.serialize(serializer)
    }
}

#[doc(hidden)]
pub fn serialize_known<T: Serialize, S: Serializer>(
    tag: &str,
    kind: &str,
    payload: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let Value::Object(mut object) = serde_json::to_value(payload).map_err(ser::Error::custom)?
    else {
        return Err(ser::Error::custom(format!(
            "{kind} payload does not serialize to an object"
        )));
    };
    object.insert(tag.to_string(), Value::String(kind.to_string()));
    object.serialize(serializer)
}

#[doc(hidden)]
pub fn split_tagged<'de, D: Deserializer<'de>>(
    tag: &'static str,
    deserializer: D,
) -> Result<(String, Map<String, Value>), D::Error> {
    let mut object = Map::<String, Value>::deserialize(deserializer)?;
    match object.remove(tag) {
        Some(Value::String(kind)) => Ok((kind, object)),
        Some(_) => Err(de::Error::invalid_type(
            Unexpected::Other("non-string discriminator"),
            &"a string",
        )),
        None => Err(de::Error::missing_field(tag)),
    }
}

#[doc(hidden)]
pub fn deserialize_known<T: DeserializeOwned, E: de::Error>(
    fields: Map<String, Value>,
) -> Result<T, E> {
    serde_json::from_value(Value::Object(fields)).map_err(E::custom)
}

/// Declare an enum over JSON objects selected by a discriminator field.
///
/// Every variant wraps the struct holding that shape's fields. A trailing
/// `Unknown(UnknownVariant)` variant is added for values outside the known
/// set.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// pub struct FromVolume {
///     pub id: String,
/// }
///
/// oci_core::oci_polymorphic! {
///     /// Clone source.
///     #[derive(Debug, Clone, PartialEq, Eq)]
///     pub enum Source: "type" {
///         /// Another volume.
///         Volume(FromVolume) => "volume",
///     }
/// }
///
/// let json = r#"{"type":"snapshot","id":"a","at":"2024-01-01"}"#;
/// let source: Source = serde_json::from_str(json).unwrap();
/// assert!(source.is_unknown());
/// assert_eq!(source.kind(), "snapshot");
/// let back: serde_json::Value = serde_json::to_value(&source).unwrap();
/// assert_eq!(back, serde_json::from_str::<serde_json::Value>(json).unwrap());
/// ```
#[macro_export]
macro_rules! oci_polymorphic {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $tag:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($payload:ty) => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($payload),
            )+
            /// A discriminator value not known to this version of the bindings.
            Unknown($crate::polymorphic::UnknownVariant),
        }

        impl $name {
            /// Name of the discriminator field.
            pub const DISCRIMINATOR: &'static str = $tag;

            /// Value of the discriminator field.
            #[must_use]
            pub fn kind(&self) -> &str {
                match self {
                    $(Self::$variant(_) => $value,)+
                    Self::Unknown(unknown) => unknown.kind.as_str(),
                }
            }

            /// All known discriminator values.
            #[must_use]
            pub fn values() -> Vec<&'static str> {
                vec![$($value),+]
            }

            /// Returns true for discriminator values outside the known set.
            #[must_use]
            pub const fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                match self {
                    $(
                        Self::$variant(payload) => {
                            $crate::polymorphic::serialize_known($tag, $value, payload, serializer)
                        }
                    )+
                    Self::Unknown(unknown) => unknown.serialize_tagged($tag, serializer),
                }
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let (kind, fields) = $crate::polymorphic::split_tagged($tag, deserializer)?;
                match kind.as_str() {
                    $(
                        $value => $crate::polymorphic::deserialize_known(fields).map(Self::$variant),
                    )+
                    _ => Ok(Self::Unknown($crate::polymorphic::UnknownVariant { kind, fields })),
                }
            }
        }
    };
}
