//! Front-matter parsing and validation

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fmt;

use super::LoadError;

/// Keys every blog post must carry
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "date", "author", "excerpt"];

/// Typed view of a validated front-matter block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogFrontmatter {
    #[serde(default, deserialize_with = "optional_scalar")]
    pub id: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(deserialize_with = "scalar_string")]
    pub date: String,
    #[serde(deserialize_with = "scalar_string")]
    pub author: String,
    #[serde(deserialize_with = "scalar_string")]
    pub excerpt: String,
    /// Anything except an explicit `false` keeps the post active
    #[serde(default = "default_active", deserialize_with = "unless_false")]
    pub active: bool,
    #[serde(default, deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
}

fn default_active() -> bool {
    true
}

impl BlogFrontmatter {
    /// Build the typed view from a raw front-matter mapping
    pub fn from_mapping(data: &Mapping, file_name: &str) -> Result<Self, LoadError> {
        serde_yaml::from_value(Value::Mapping(data.clone())).map_err(|e| LoadError::Parse {
            file: file_name.to_string(),
            message: e.to_string(),
        })
    }
}

/// Split a document into its front-matter mapping and body
///
/// Supports YAML (`---`) and JSON (`;;;`) header blocks. A document without
/// a header block yields an empty mapping and the full text as body. A
/// leading byte-order mark is ignored.
pub fn parse_frontmatter(content: &str) -> Result<(Mapping, &str), String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if content.starts_with("---") {
        return parse_yaml(content);
    }
    if content.starts_with(";;;") {
        return parse_json(content);
    }
    Ok((Mapping::new(), content))
}

fn parse_yaml(content: &str) -> Result<(Mapping, &str), String> {
    let rest = &content[3..];
    // The opening delimiter must sit on its own line
    let rest = match rest.find('\n') {
        Some(pos) if rest[..pos].trim().is_empty() => &rest[pos + 1..],
        _ => return Err("front-matter opening delimiter must be on its own line".to_string()),
    };

    let (yaml_content, remaining) = if let Some(tail) = rest.strip_prefix("---") {
        ("", tail)
    } else if let Some(end_pos) = rest.find("\n---") {
        (&rest[..end_pos], &rest[end_pos + 4..])
    } else {
        return Err("unterminated front-matter block".to_string());
    };

    // Drop the rest of the closing delimiter line
    let remaining = match remaining.find('\n') {
        Some(pos) => &remaining[pos + 1..],
        None => "",
    };
    let remaining = remaining.trim_start_matches(['\n', '\r']);

    if yaml_content.trim().is_empty() {
        return Ok((Mapping::new(), remaining));
    }

    match serde_yaml::from_str::<Value>(yaml_content) {
        Ok(Value::Mapping(map)) => Ok((map, remaining)),
        Ok(Value::Null) => Ok((Mapping::new(), remaining)),
        Ok(_) => Err("front-matter is not a key/value mapping".to_string()),
        Err(e) => Err(format!("Failed to parse YAML front-matter: {}", e)),
    }
}

fn parse_json(content: &str) -> Result<(Mapping, &str), String> {
    let rest = &content[3..];
    let end_pos = rest
        .find(";;;")
        .ok_or_else(|| "unterminated JSON front-matter block".to_string())?;
    let json_content = rest[..end_pos].trim();
    let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

    if json_content.is_empty() {
        return Ok((Mapping::new(), remaining));
    }

    // JSON is a subset of YAML, so the same value model covers both forms
    let json: serde_json::Value = serde_json::from_str(json_content)
        .map_err(|e| format!("Failed to parse JSON front-matter: {}", e))?;
    if !json.is_object() {
        return Err("front-matter is not a key/value mapping".to_string());
    }
    match serde_yaml::to_value(json) {
        Ok(Value::Mapping(map)) => Ok((map, remaining)),
        Ok(_) => Err("front-matter is not a key/value mapping".to_string()),
        Err(e) => Err(format!("Failed to convert JSON front-matter: {}", e)),
    }
}

/// Check that the required fields are present and non-empty
pub fn validate_frontmatter(data: &Mapping, file_name: &str) -> Result<(), LoadError> {
    let fields = missing_fields(data);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingFields {
            file: file_name.to_string(),
            fields,
        })
    }
}

/// Required fields that are absent, null, false, zero or empty
pub fn missing_fields(data: &Mapping) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !data.get(*field).is_some_and(is_truthy))
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => true,
    }
}

/// Render a scalar front-matter value as a string
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(&value).ok_or_else(|| de::Error::custom("expected a string value"))
}

fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(scalar_to_string)
        .filter(|s| !s.is_empty()))
}

fn unless_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(!matches!(value, Some(Value::Bool(false))))
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut tags = Vec::new();
            while let Some(item) = seq.next_element::<Value>()? {
                if let Some(tag) = scalar_to_string(&item) {
                    tags.push(tag);
                }
            }
            Ok(tags)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
