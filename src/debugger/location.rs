use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// URL of the source a location points into.
///
/// `Absent` and `Unresolved` are different things: a source evaluated from a
/// string has no URL at all, while an unresolved URL means the caller never
/// looked it up. Only the latter is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SourceUrl {
    #[default]
    Unresolved,
    Absent,
    Url(String),
}

impl SourceUrl {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, SourceUrl::Unresolved)
    }

    /// The URL text, `None` for both unset states.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SourceUrl::Url(url) => Some(url.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for SourceUrl {
    fn from(url: &str) -> Self {
        SourceUrl::Url(url.to_string())
    }
}

impl From<Option<String>> for SourceUrl {
    fn from(url: Option<String>) -> Self {
        match url {
            Some(url) => SourceUrl::Url(url),
            None => SourceUrl::Absent,
        }
    }
}

// A missing field stays `Unresolved` through `#[serde(default)]`; an explicit
// null becomes `Absent`.
impl Serialize for SourceUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SourceUrl::Url(url) => serializer.serialize_str(url),
            SourceUrl::Absent | SourceUrl::Unresolved => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for SourceUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(SourceUrl::from)
    }
}

/// Read access shared by live and pending locations.
pub trait SourcePosition {
    fn source_url(&self) -> &SourceUrl;
    fn line(&self) -> Option<u32>;
    fn column(&self) -> Option<u32>;
}

/// A position inside a source currently loaded in the target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub source_id: String,
    #[serde(default, skip_serializing_if = "SourceUrl::is_unresolved")]
    pub source_url: SourceUrl,
    /// 1-based. `None` means the line was never set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// 0-based. `None` when only line precision is tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl Location {
    pub fn new(source_id: impl Into<String>, line: u32, column: Option<u32>) -> Self {
        Self {
            source_id: source_id.into(),
            source_url: SourceUrl::Unresolved,
            line: Some(line),
            column,
        }
    }

    pub fn with_source_url(mut self, source_url: impl Into<SourceUrl>) -> Self {
        self.source_url = source_url.into();
        self
    }
}

impl SourcePosition for Location {
    fn source_url(&self) -> &SourceUrl {
        &self.source_url
    }

    fn line(&self) -> Option<u32> {
        self.line
    }

    fn column(&self) -> Option<u32> {
        self.column
    }
}

/// A URL-addressed position, valid while its source is not loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingLocation {
    #[serde(default, skip_serializing_if = "SourceUrl::is_unresolved")]
    pub source_url: SourceUrl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl PendingLocation {
    pub fn new(source_url: impl Into<SourceUrl>, line: u32, column: Option<u32>) -> Self {
        Self {
            source_url: source_url.into(),
            line: Some(line),
            column,
        }
    }

    /// Re-attach the id of a freshly loaded source.
    pub fn resolve(&self, source_id: impl Into<String>) -> Location {
        Location {
            source_id: source_id.into(),
            source_url: self.source_url.clone(),
            line: self.line,
            column: self.column,
        }
    }
}

/// Keeps only `source_url`, `line` and `column`.
impl From<&Location> for PendingLocation {
    fn from(location: &Location) -> Self {
        Self {
            source_url: location.source_url.clone(),
            line: location.line,
            column: location.column,
        }
    }
}

impl SourcePosition for PendingLocation {
    fn source_url(&self) -> &SourceUrl {
        &self.source_url
    }

    fn line(&self) -> Option<u32> {
        self.line
    }

    fn column(&self) -> Option<u32> {
        self.column
    }
}
