//! Raw catalog records as returned by the catalog service.
//!
//! The service speaks JSON with Portuguese field names. Everything except
//! the numeric id is optional on the wire; accessors coerce missing or
//! malformed values to safe defaults so a single bad record never aborts
//! a render.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Title used when the service omits one
pub const UNTITLED: &str = "Untitled";

/// Structural kind of a resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuralKind {
    /// Uploaded file (PDF, video, other documents)
    #[serde(rename = "UPLOAD")]
    Upload,

    /// External link
    #[serde(rename = "URL")]
    Url,

    /// Inline note
    #[serde(rename = "NOTA", alias = "NOTE")]
    Note,

    /// Anything the service sends that we don't know about
    #[default]
    #[serde(other)]
    Unknown,
}

/// A tag attached to a resource (also the payload of `GET tags`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTag {
    pub id: u64,

    #[serde(rename = "nome")]
    pub name: String,
}

/// A resource record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResource {
    pub id: u64,

    #[serde(rename = "titulo", default, deserialize_with = "lenient")]
    pub title: Option<String>,

    #[serde(rename = "estrutura", default, deserialize_with = "lenient")]
    pub kind: Option<StructuralKind>,

    /// Only meaningful for uploads
    #[serde(default, deserialize_with = "lenient")]
    pub mime_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Option<Vec<RawTag>>,

    #[serde(rename = "visualizacoes", default, deserialize_with = "lenient_count")]
    pub views: Option<i64>,

    #[serde(rename = "curtidas", default, deserialize_with = "lenient_count")]
    pub likes: Option<i64>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub downloads: Option<i64>,

    #[serde(rename = "is_destaque", default, deserialize_with = "lenient")]
    pub featured: Option<bool>,
}

impl RawResource {
    /// Title, or a placeholder when missing or blank
    pub fn title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or(UNTITLED)
    }

    pub fn kind(&self) -> StructuralKind {
        self.kind.unwrap_or_default()
    }

    /// Tags in the order the service sent them
    pub fn tags(&self) -> &[RawTag] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn views(&self) -> u64 {
        counter(self.views)
    }

    pub fn likes(&self) -> u64 {
        counter(self.likes)
    }

    pub fn downloads(&self) -> u64 {
        counter(self.downloads)
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// A playlist record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlaylist {
    pub id: u64,

    #[serde(rename = "titulo", default, deserialize_with = "lenient")]
    pub title: Option<String>,

    #[serde(rename = "quantidade_recursos", default, deserialize_with = "lenient_count")]
    pub resource_count: Option<i64>,
}

impl RawPlaylist {
    pub fn title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or(UNTITLED)
    }

    pub fn resource_count(&self) -> u64 {
        counter(self.resource_count)
    }
}

/// Paged list envelope (`{ items, total }`).
///
/// Records that fail to decode are skipped; the rest of the page survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "lenient_items")]
    pub items: Vec<T>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub total: Option<u64>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: None,
        }
    }
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = Some(items.len() as u64);
        Self { items, total }
    }

    /// Total reported by the service, falling back to the page length
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(self.items.len() as u64)
    }
}

/// Decode a value, mapping anything of the wrong shape to `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Decode a counter from an integer, an integral float or a numeric string
fn lenient_count<'de, D, N>(deserializer: D) -> Result<Option<N>, D::Error>
where
    D: Deserializer<'de>,
    N: TryFrom<i64>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let number = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(number.and_then(|n| N::try_from(n).ok()))
}

/// Decode a tag list, dropping tags without a usable id or name
fn lenient_tags<'de, D>(deserializer: D) -> Result<Option<Vec<RawTag>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(values)) => Some(
            values
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed catalog record");
                None
            }
        })
        .collect())
}

fn counter(value: Option<i64>) -> u64 {
    value.map(|v| v.max(0) as u64).unwrap_or(0)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
