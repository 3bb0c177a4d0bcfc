//! Album-related models.
//!
//! [`SimplifiedAlbum`] is the projection the service embeds in other
//! responses; [`Album`] is what the album endpoint returns. Both keep the
//! raw wire strings and expose typed views through accessor methods.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::artist::{join_names, SimplifiedArtist};
use super::common::{
    checked, largest_image, parse_release, DatePrecision, ExternalIds, ExternalUrls, Image, Page,
    ReleaseDate, Restrictions,
};
use super::market::{parse_markets, Market};
use super::track::SimplifiedTrack;
use crate::error::ModelError;

/// Release classification of an album, or its relationship to an artist
/// when used as an album group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
    /// Only meaningful as an album group.
    AppearsOn,
}

impl AlbumType {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumType::Album => "album",
            AlbumType::Single => "single",
            AlbumType::Compilation => "compilation",
            AlbumType::AppearsOn => "appears_on",
        }
    }

    /// Parse an `album_type` value. Case-insensitive; `-` and `_` match
    /// each other.
    pub fn from_album_type(raw: &str) -> Result<Self, ModelError> {
        let normalized = raw.to_ascii_lowercase().replace('-', "_");
        Self::from_album_group(&normalized)
            .map_err(|_| ModelError::UnknownAlbumType(raw.to_string()))
    }

    /// Parse an `album_group` value. Exact match only.
    pub fn from_album_group(raw: &str) -> Result<Self, ModelError> {
        match raw {
            "album" => Ok(AlbumType::Album),
            "single" => Ok(AlbumType::Single),
            "compilation" => Ok(AlbumType::Compilation),
            "appears_on" => Ok(AlbumType::AppearsOn),
            other => Err(ModelError::UnknownAlbumType(other.to_string())),
        }
    }
}

impl fmt::Display for AlbumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlbumType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlbumType::from_album_type(s)
    }
}

fn checked_album_group<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    if let Some(ref s) = raw {
        AlbumType::from_album_group(s).map_err(de::Error::custom)?;
    }
    Ok(raw)
}

/// Kind of copyright statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyrightType {
    /// "C": copyright in the release.
    Copyright,
    /// "P": copyright in the sound recording.
    SoundPerformanceCopyright,
}

impl FromStr for CopyrightType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(CopyrightType::Copyright),
            "P" => Ok(CopyrightType::SoundPerformanceCopyright),
            other => Err(ModelError::UnknownCopyrightType(other.to_string())),
        }
    }
}

/// Copyright statement for an album.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Copyright {
    /// Raw copyright text, possibly starting with "(C)" or "(P)".
    pub text: String,

    /// Raw copyright type: "C" or "P".
    #[serde(rename = "type", deserialize_with = "checked::string::<_, CopyrightType>")]
    pub type_: String,
}

impl Copyright {
    /// Text with one leading "(P)" or "(C)" marker removed, then trimmed.
    pub fn clean_text(&self) -> &str {
        let text = self.text.as_str();
        text.strip_prefix("(P)")
            .or_else(|| text.strip_prefix("(C)"))
            .unwrap_or(text)
            .trim()
    }

    pub fn kind(&self) -> Result<CopyrightType, ModelError> {
        self.type_.parse()
    }
}

/// Accessors shared by both album projections.
macro_rules! album_accessors {
    ($ty:ty) => {
        impl $ty {
            /// Typed album type.
            pub fn album_kind(&self) -> Result<AlbumType, ModelError> {
                AlbumType::from_album_type(&self.album_type)
            }

            /// Markets the album is available in.
            pub fn markets(&self) -> Result<Vec<Market>, ModelError> {
                parse_markets(&self.available_markets)
            }

            /// Parsed release date, checked against the reported precision.
            pub fn release(&self) -> Result<Option<ReleaseDate>, ModelError> {
                parse_release(
                    self.release_date.as_deref(),
                    self.release_date_precision.as_deref(),
                )
            }

            /// Reported release date precision.
            pub fn precision(&self) -> Result<Option<DatePrecision>, ModelError> {
                self.release_date_precision
                    .as_deref()
                    .map(str::parse)
                    .transpose()
            }

            /// Whether the album can be played in `market`.
            ///
            /// Responses requested with a market omit the list; those
            /// report `false` here.
            pub fn is_available_in(&self, market: Market) -> bool {
                self.available_markets.iter().any(|c| c == market.code())
            }

            /// Get the primary artist name.
            pub fn primary_artist(&self) -> Option<&str> {
                self.artists.first().map(|a| a.name.as_str())
            }

            /// Get all artist names joined by a separator.
            pub fn artists_string(&self, separator: &str) -> String {
                join_names(&self.artists, separator)
            }

            /// Get the largest cover image available.
            pub fn largest_image(&self) -> Option<&Image> {
                largest_image(&self.images)
            }
        }
    };
}

/// Serde impls that run the field-level derive, then check that the
/// release date agrees with its precision.
macro_rules! release_checked_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                <$ty>::serialize(self, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let album = <$ty>::deserialize(deserializer)?;
                parse_release(
                    album.release_date.as_deref(),
                    album.release_date_precision.as_deref(),
                )
                .map_err(de::Error::custom)?;
                Ok(album)
            }
        }
    };
}

/// Album when nested inside another response.
///
/// `album_group` is only set when the album comes from an artist's album
/// listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(remote = "Self")]
pub struct SimplifiedAlbum {
    /// Type marker; always "album" on the wire.
    #[serde(rename = "type", default = "default_album_type")]
    pub type_: String,

    /// Raw album type: "album", "single" or "compilation".
    #[serde(deserialize_with = "checked::string::<_, AlbumType>")]
    pub album_type: String,

    /// Raw country codes; omitted by the service when a market was requested.
    #[serde(default, deserialize_with = "checked::markets")]
    pub available_markets: Vec<String>,

    #[serde(default)]
    pub external_urls: ExternalUrls,

    /// API endpoint for the full album.
    pub href: String,

    /// Service identifier, shared with the full album.
    pub id: String,

    /// Canonical URI, e.g. `spotify:album:...`.
    pub uri: String,

    /// Album title.
    pub name: String,

    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,

    /// Cover images, widest first as sent by the service.
    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub restrictions: Option<Restrictions>,

    /// Raw release date: "YYYY", "YYYY-MM" or "YYYY-MM-DD".
    #[serde(default, deserialize_with = "checked::optional::<_, ReleaseDate>")]
    pub release_date: Option<String>,

    /// Raw precision: "year", "month" or "day".
    #[serde(default, deserialize_with = "checked::optional::<_, DatePrecision>")]
    pub release_date_precision: Option<String>,

    #[serde(default)]
    pub total_tracks: Option<u32>,

    /// Raw relationship to the listed artist, exact wire spelling.
    #[serde(default, deserialize_with = "checked_album_group")]
    pub album_group: Option<String>,
}

fn default_album_type() -> String {
    "album".to_string()
}

album_accessors!(SimplifiedAlbum);
release_checked_serde!(SimplifiedAlbum);

impl SimplifiedAlbum {
    /// Typed album group; `None` when the response carried none.
    pub fn album_group_kind(&self) -> Result<Option<AlbumType>, ModelError> {
        self.album_group
            .as_deref()
            .map(AlbumType::from_album_group)
            .transpose()
    }
}

/// A full album record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(remote = "Self")]
pub struct Album {
    /// Type marker; always "album" on the wire.
    #[serde(rename = "type", default = "default_album_type")]
    pub type_: String,

    /// Raw album type: "album", "single" or "compilation".
    #[serde(deserialize_with = "checked::string::<_, AlbumType>")]
    pub album_type: String,

    /// Raw country codes; omitted by the service when a market was requested.
    #[serde(default, deserialize_with = "checked::markets")]
    pub available_markets: Vec<String>,

    #[serde(default)]
    pub external_urls: ExternalUrls,

    /// API endpoint for this album.
    pub href: String,

    /// Service identifier.
    pub id: String,

    /// Canonical URI.
    pub uri: String,

    /// Album title.
    pub name: String,

    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub restrictions: Option<Restrictions>,

    /// Raw release date.
    #[serde(default, deserialize_with = "checked::optional::<_, ReleaseDate>")]
    pub release_date: Option<String>,

    /// Raw precision.
    #[serde(default, deserialize_with = "checked::optional::<_, DatePrecision>")]
    pub release_date_precision: Option<String>,

    /// Total number of tracks in the album.
    pub total_tracks: u32,

    #[serde(default)]
    pub copyrights: Vec<Copyright>,

    /// Genres; usually empty for albums.
    #[serde(default)]
    pub genres: Vec<String>,

    /// Record label.
    pub label: String,

    /// Popularity between 0 and 100, derived from play counts.
    #[serde(deserialize_with = "checked::popularity")]
    pub popularity: u8,

    /// External identifiers such as "upc" or "ean".
    #[serde(default)]
    pub external_ids: ExternalIds,

    /// First page of the album's tracks.
    pub tracks: Page<SimplifiedTrack>,
}

album_accessors!(Album);
release_checked_serde!(Album);

impl Album {
    /// External identifiers as ordered `(key, value)` pairs.
    pub fn external_id_pairs(&self) -> Vec<(String, String)> {
        self.external_ids
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Copyright texts with their markers removed.
    pub fn copyright_texts(&self) -> Vec<&str> {
        self.copyrights.iter().map(Copyright::clean_text).collect()
    }

    /// Total duration of the tracks on the embedded page, in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.tracks.items.iter().map(|t| t.duration_ms).sum()
    }

    /// Tracks on the embedded page for a specific disc.
    pub fn tracks_for_disc(&self, disc_number: u32) -> Vec<&SimplifiedTrack> {
        self.tracks
            .items
            .iter()
            .filter(|t| t.disc_number == disc_number)
            .collect()
    }

    /// Project down to the simplified form. Identity fields are shared.
    pub fn simplified(&self) -> SimplifiedAlbum {
        SimplifiedAlbum {
            type_: self.type_.clone(),
            album_type: self.album_type.clone(),
            available_markets: self.available_markets.clone(),
            external_urls: self.external_urls.clone(),
            href: self.href.clone(),
            id: self.id.clone(),
            uri: self.uri.clone(),
            name: self.name.clone(),
            artists: self.artists.clone(),
            images: self.images.clone(),
            restrictions: self.restrictions.clone(),
            release_date: self.release_date.clone(),
            release_date_precision: self.release_date_precision.clone(),
            total_tracks: Some(self.total_tracks),
            album_group: None,
        }
    }
}
