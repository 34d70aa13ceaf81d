use std::fmt;

use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

/// A namespaced resource location, e.g. `minecraft:gameplay/fishing`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub namespace: String,
    pub path: String,
}

impl Identifier {
    pub fn new(namespace: &str, path: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        }
    }

    pub fn vanilla(path: &str) -> Self {
        Self {
            namespace: "minecraft".to_string(),
            path: path.to_string(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdentifierVisitor;

        impl Visitor<'_> for IdentifierVisitor {
            type Value = Identifier;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a valid Identifier (namespace:path)")
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(&v)
            }

            fn visit_str<E>(self, identifier: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match identifier.split_once(':') {
                    Some((namespace, path)) => Ok(Identifier {
                        namespace: namespace.to_string(),
                        path: path.to_string(),
                    }),
                    None => Err(serde::de::Error::custom("identifier can't be split")),
                }
            }
        }
        deserializer.deserialize_str(IdentifierVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::Identifier;

    #[test]
    fn display_roundtrip() {
        let id = Identifier::vanilla("gameplay/fishing");
        assert_eq!(id.to_string(), "minecraft:gameplay/fishing");

        let id = Identifier::new("angler", "fishing_fanatic");
        assert_eq!(id.to_string(), "angler:fishing_fanatic");
    }
}
