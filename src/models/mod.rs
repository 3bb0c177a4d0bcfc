//! Data models for Spotify Web API responses.
//!
//! Records keep the raw wire strings the service sent. Typed views
//! (markets, album type, release date, copyright text) are computed on
//! each call by accessor methods. Values those accessors would reject are
//! already refused when decoding JSON.

pub mod album;
pub mod artist;
pub mod common;
pub mod market;
pub mod track;

// Re-exports for convenience
pub use album::{Album, AlbumType, Copyright, CopyrightType, SimplifiedAlbum};
pub use artist::SimplifiedArtist;
pub use common::{DatePrecision, ExternalIds, ExternalUrls, Image, Page, ReleaseDate, Restrictions};
pub use market::Market;
pub use track::SimplifiedTrack;
