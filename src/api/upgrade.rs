//! Fetching the full album behind a simplified one.
//!
//! The album-fetch capability is passed in by the caller, so the model
//! records carry no client reference.

use std::fmt;
use std::future::IntoFuture;

use futures_util::future::BoxFuture;

use super::source::AlbumSource;
use crate::error::Result;
use crate::models::{Album, Market, SimplifiedAlbum};

impl SimplifiedAlbum {
    /// Fetch the full album with this album's id.
    ///
    /// Issues exactly one request. Returns `Ok(None)` when the service has
    /// no such album in `market`; any other error is returned as-is.
    pub async fn full_album<S>(&self, source: &S, market: Option<Market>) -> Result<Option<Album>>
    where
        S: AlbumSource + ?Sized,
    {
        source.album(&self.id, market).await
    }

    /// Package the same fetch as a request that has not started yet.
    ///
    /// Nothing is sent until the request is awaited or [`AlbumRequest::send`]
    /// is called.
    pub fn full_album_request<'a, S>(
        &self,
        source: &'a S,
        market: Option<Market>,
    ) -> AlbumRequest<'a, S>
    where
        S: AlbumSource + ?Sized,
    {
        AlbumRequest {
            source,
            id: self.id.clone(),
            market,
        }
    }
}

/// A deferred full-album fetch.
///
/// Each call to [`send`](Self::send) issues its own request; results are
/// not shared between calls.
pub struct AlbumRequest<'a, S: ?Sized> {
    source: &'a S,
    id: String,
    market: Option<Market>,
}

impl<'a, S: AlbumSource + ?Sized> AlbumRequest<'a, S> {
    /// Album id that will be requested.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn market(&self) -> Option<Market> {
        self.market
    }

    /// Start the request and wait for the response.
    pub async fn send(&self) -> Result<Option<Album>> {
        self.source.album(&self.id, self.market).await
    }
}

impl<S: ?Sized> Clone for AlbumRequest<'_, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            id: self.id.clone(),
            market: self.market,
        }
    }
}

impl<S: ?Sized> fmt::Debug for AlbumRequest<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlbumRequest")
            .field("id", &self.id)
            .field("market", &self.market)
            .finish_non_exhaustive()
    }
}

impl<'a, S: AlbumSource + ?Sized + 'a> IntoFuture for AlbumRequest<'a, S> {
    type Output = Result<Option<Album>>;
    type IntoFuture = BoxFuture<'a, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.send().await })
    }
}
