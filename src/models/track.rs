//! Track-related models.

use serde::{Deserialize, Serialize};

use super::artist::{join_names, SimplifiedArtist};
use super::common::{checked, ExternalUrls, Restrictions};
use super::market::{parse_markets, Market};
use crate::error::ModelError;

/// Track when nested inside an album's track page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimplifiedTrack {
    /// Type marker; always "track" on the wire.
    #[serde(rename = "type", default = "default_track_type")]
    pub type_: String,

    /// Service identifier. Absent for local files.
    #[serde(default)]
    pub id: Option<String>,

    /// Track title.
    pub name: String,

    /// Canonical URI.
    #[serde(default)]
    pub uri: Option<String>,

    /// API endpoint for the full track.
    #[serde(default)]
    pub href: Option<String>,

    /// Disc number (1-indexed).
    #[serde(default = "default_one")]
    pub disc_number: u32,

    /// Track number on the disc (1-indexed).
    #[serde(default = "default_one")]
    pub track_number: u32,

    /// Duration in milliseconds.
    pub duration_ms: u64,

    /// Whether the track has explicit lyrics.
    #[serde(default)]
    pub explicit: bool,

    /// Artists who performed this track.
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,

    /// Raw country codes; omitted by the service when a market was requested.
    #[serde(default, deserialize_with = "checked::markets")]
    pub available_markets: Vec<String>,

    /// Set only when a market was requested.
    #[serde(default)]
    pub is_playable: Option<bool>,

    /// 30 second preview, when one exists.
    #[serde(default)]
    pub preview_url: Option<String>,

    #[serde(default)]
    pub restrictions: Option<Restrictions>,

    #[serde(default)]
    pub external_urls: ExternalUrls,
}

fn default_track_type() -> String {
    "track".to_string()
}

fn default_one() -> u32 {
    1
}

impl SimplifiedTrack {
    /// Markets the track is available in.
    pub fn markets(&self) -> Result<Vec<Market>, ModelError> {
        parse_markets(&self.available_markets)
    }

    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        join_names(&self.artists, separator)
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        let total_seconds = self.duration_ms / 1000;
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_duration_formatted() {
        let track = SimplifiedTrack {
            duration_ms: 215000, // 3:35
            ..Default::default()
        };
        assert_eq!(track.duration_formatted(), "03:35");
    }

    #[test]
    fn test_track_decodes_market_response() {
        let track: SimplifiedTrack = serde_json::from_value(serde_json::json!({
            "artists": [{"id": "1", "name": "Artist One", "type": "artist"}],
            "disc_number": 1,
            "duration_ms": 183000,
            "explicit": false,
            "id": "t1",
            "is_playable": true,
            "name": "Opening",
            "track_number": 1,
            "type": "track",
            "uri": "spotify:track:t1"
        }))
        .unwrap();
        assert_eq!(track.is_playable, Some(true));
        assert!(track.available_markets.is_empty());
        assert!(track.markets().unwrap().is_empty());
        assert_eq!(track.artists_string(", "), "Artist One");
    }

    #[test]
    fn test_track_accepts_any_iso_market() {
        let track: SimplifiedTrack = serde_json::from_value(serde_json::json!({
            "name": "Opening",
            "duration_ms": 1000,
            "available_markets": ["US", "AI", "VA", "GL", "AQ"]
        }))
        .unwrap();
        assert_eq!(
            track.markets().unwrap(),
            vec![Market::Us, Market::Ai, Market::Va, Market::Gl, Market::Aq]
        );
    }

    #[test]
    fn test_track_rejects_unknown_market() {
        let result = serde_json::from_value::<SimplifiedTrack>(serde_json::json!({
            "name": "Opening",
            "duration_ms": 1000,
            "available_markets": ["US", "ZZ"]
        }));
        assert!(result.is_err());
    }
}
