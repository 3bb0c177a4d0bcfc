//! Artist-related models.

use serde::{Deserialize, Serialize};

use super::common::ExternalUrls;

/// Artist when nested inside an album or track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimplifiedArtist {
    /// Type marker; always "artist" on the wire.
    #[serde(rename = "type", default = "default_artist_type")]
    pub type_: String,

    /// Service identifier. Absent for some local-file artists.
    #[serde(default)]
    pub id: Option<String>,

    /// Artist name.
    pub name: String,

    /// Canonical URI, e.g. `spotify:artist:...`.
    #[serde(default)]
    pub uri: Option<String>,

    /// API endpoint for the full artist.
    #[serde(default)]
    pub href: Option<String>,

    /// Links to the artist outside the API.
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

fn default_artist_type() -> String {
    "artist".to_string()
}

impl SimplifiedArtist {
    /// Create an artist with a name and service ID.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, id: S2) -> Self {
        let id = id.into();
        Self {
            type_: default_artist_type(),
            uri: Some(format!("spotify:artist:{}", id)),
            id: Some(id),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Join artist names with a separator.
pub(crate) fn join_names(artists: &[SimplifiedArtist], separator: &str) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
