//! The album-fetch capability consumed by the upgrade helper.
//!
//! [`SpotifyApi`](super::SpotifyApi) implements it against the real
//! service; tests substitute the mocks below.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Album, Market};

/// Anything that can fetch a full album by id.
#[async_trait]
pub trait AlbumSource: Send + Sync {
    /// Fetch one album. `Ok(None)` means the service has no such album
    /// for this id and market.
    async fn album(&self, id: &str, market: Option<Market>) -> Result<Option<Album>>;
}

/// Mock album sources for testing.
#[cfg(test)]
pub mod mocks {
    use std::sync::Mutex;

    use super::*;
    use crate::error::SpotifyError;

    /// What the mock answers with.
    pub enum Reply {
        Found(Album),
        NotFound,
        Unauthorized,
    }

    /// Mock source that records every request it receives.
    pub struct MockAlbumSource {
        reply: Reply,
        /// `(id, market)` of each call, in order.
        pub calls: Mutex<Vec<(String, Option<Market>)>>,
    }

    impl MockAlbumSource {
        pub fn found(album: Album) -> Self {
            Self::with_reply(Reply::Found(album))
        }

        pub fn not_found() -> Self {
            Self::with_reply(Reply::NotFound)
        }

        pub fn unauthorized() -> Self {
            Self::with_reply(Reply::Unauthorized)
        }

        fn with_reply(reply: Reply) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(String, Option<Market>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AlbumSource for MockAlbumSource {
        async fn album(&self, id: &str, market: Option<Market>) -> Result<Option<Album>> {
            self.calls.lock().unwrap().push((id.to_string(), market));
            match &self.reply {
                Reply::Found(album) => Ok(Some(album.clone())),
                Reply::NotFound => Ok(None),
                Reply::Unauthorized => Err(SpotifyError::Unauthorized(
                    "The access token expired".to_string(),
                )),
            }
        }
    }
}
