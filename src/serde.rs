use std::fmt;

use serde::{
    de::{self, Deserializer, Visitor},
    Deserialize, Serialize, Serializer,
};

use crate::SleekId;

impl Serialize for SleekId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// Any string is accepted here. Checking the checksum needs the `Generator`
// which created the identifier, so validate after deserializing.
impl<'de> Deserialize<'de> for SleekId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SleekIdVisitor;

        impl<'de> Visitor<'de> for SleekIdVisitor {
            type Value = SleekId;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an identifier string")
            }
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(SleekId::from_string(value.to_owned()))
            }
            fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(SleekId::from_string(value))
            }
        }

        deserializer.deserialize_string(SleekIdVisitor)
    }
}
