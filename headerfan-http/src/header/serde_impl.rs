use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::HeaderMap;

/// Serializes the single-value view from [`HeaderMap::flatten`], the shape host runtimes expect.
impl Serialize for HeaderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.flatten())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

struct HeaderMapVisitor;

impl<'de> Visitor<'de> for HeaderMapVisitor {
    type Value = HeaderMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of header names to a string or a list of strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut out = HeaderMap::with_capacity(access.size_hint().unwrap_or_default());
        while let Some((name, values)) = access.next_entry::<String, OneOrMany>()? {
            match values {
                OneOrMany::One(value) => out.append(name, value),
                OneOrMany::Many(values) => {
                    for value in values {
                        out.append(name.clone(), value);
                    }
                }
            }
        }
        Ok(out)
    }
}

/// Accepts both single-value (`{"a": "1"}`) and multi-value (`{"a": ["1", "2"]}`) header objects.
impl<'de> Deserialize<'de> for HeaderMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HeaderMapVisitor)
    }
}
