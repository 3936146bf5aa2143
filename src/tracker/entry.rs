//! One tracked document and its wire form.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use crate::identity;

/// One tracked document: its current identity and display label.
///
/// The label is the document's basename at the time of its last
/// promotion; it is stored rather than re-derived so a persisted list
/// round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    uri: Url,
    file_name: String,
}

impl RecentEntry {
    /// Builds an entry for `uri`, deriving the display name from it.
    pub fn new(uri: Url) -> Self {
        let file_name = identity::display_name(&uri);
        Self { uri, file_name }
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The comparison key used for matching entries (see [`identity::path_key`]).
    pub fn path_key(&self) -> &str {
        identity::path_key(&self.uri)
    }

    /// The persisted JSON form of this entry.
    pub fn to_json(&self) -> Value {
        json!({
            "serializedUri": self.uri.as_str(),
            "fileName": self.file_name,
        })
    }

    /// Rebuilds an entry from its wire form.
    ///
    /// Returns `None` if the stored URI no longer parses; callers skip
    /// such entries rather than aborting hydration.
    pub fn from_serialized(serialized: &SerializedEntry) -> Option<Self> {
        let uri = Url::parse(&serialized.serialized_uri).ok()?;
        Some(Self {
            uri,
            file_name: serialized.file_name.clone(),
        })
    }
}

/// Wire form of an entry as stored under the workspace key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedEntry {
    #[serde(rename = "serializedUri")]
    pub serialized_uri: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}
