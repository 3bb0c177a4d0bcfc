//! # spotweb
//!
//! Typed album models for the Spotify Web API, plus a helper that turns a
//! simplified album into the full one with a single follow-up request.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spotweb::{ClientConfig, Market, SpotifyApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = SpotifyApi::new(ClientConfig::from_env()?)?;
//!
//!     // One page of an artist's albums; items are simplified.
//!     if let Some(page) = api
//!         .get_artist_albums("0OdUWJ0sBjDrqHygGUXeCF", &[], Some(Market::Us), 10, 0)
//!         .await?
//!     {
//!         for simplified in &page.items {
//!             // Upgrade to the full album.
//!             if let Some(album) = simplified.full_album(&api, Some(Market::Us)).await? {
//!                 println!("{} ({}), label {}", album.name, album.album_kind()?, album.label);
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Models
//!
//! Records keep the raw wire values; accessors such as
//! [`SimplifiedAlbum::markets`], [`SimplifiedAlbum::release`] and
//! [`Copyright::clean_text`] compute typed views. Unknown market codes,
//! malformed release dates and unmatched album types fail decoding.
//!
//! ## Upgrade fetch
//!
//! [`SimplifiedAlbum::full_album`] takes any [`AlbumSource`] and returns
//! `Ok(None)` when the album does not exist.
//! [`SimplifiedAlbum::full_album_request`] returns an [`AlbumRequest`] that
//! does nothing until awaited.

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use api::{AlbumRequest, AlbumSource, SpotifyApi};
pub use config::ClientConfig;
pub use error::{ModelError, SpotifyError};
pub use models::{
    Album, AlbumType, Copyright, CopyrightType, DatePrecision, Market, Page, ReleaseDate,
    SimplifiedAlbum, SimplifiedArtist, SimplifiedTrack,
};
