//! API access for Spotify.
//!
//! - [`SpotifyApi`]: reqwest client for the album endpoints
//! - [`AlbumSource`]: the fetch capability the upgrade helper needs
//! - [`AlbumRequest`]: deferred form of [`SimplifiedAlbum::full_album`](crate::SimplifiedAlbum::full_album)

pub mod client;
pub mod source;
pub mod upgrade;

pub use client::SpotifyApi;
pub use source::AlbumSource;
pub use upgrade::AlbumRequest;
