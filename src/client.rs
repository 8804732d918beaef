//! High-level client
//!
//! [`AmcClient`] bundles a transport, the shared credentials and the
//! configured base URL, and exposes one typed fetcher per API call.
//! Clients are cheap to clone; clones share credentials and connections.
//!
//! ```rust,ignore
//! use amc_api::{AmcClient, ClientConfig};
//!
//! let client = AmcClient::new(ClientConfig::builder().vendor_key("...").build())?;
//! let page = client.fetch_now_playing_movies(1, 10).await?;
//! for movie in page.items() {
//!     println!("{} ({})", movie.name, movie.rating.as_ref());
//! }
//! ```

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{Endpoint, ReqwestTransport, Transport};
use crate::models::{
    Movie, MovieId, MoviesPage, Page, Showtime, ShowtimeId, ShowtimesPage, Theatre, TheatreId,
    TheatresPage,
};
use crate::query::QueryParams;
use crate::resources::{MoviesTarget, ShowtimesTarget, TheatresTarget};
use crate::target::{LinkTarget, Target};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

/// Typed client for the AMC Theatres API
#[derive(Clone)]
pub struct AmcClient {
    base_url: Url,
    timeout: Duration,
    transport: Arc<dyn Transport>,
    credentials: Arc<Credentials>,
}

impl AmcClient {
    /// Create a client with the default HTTP transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Self::with_transport(config, transport)
    }

    /// Create a client from defaults plus `AMC_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::default().with_env_overrides()?)
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;

        let credentials = match config.vendor_key.as_deref() {
            Some(key) => Credentials::with_vendor_key(key),
            None => {
                warn!("No vendor key configured; requests will likely be rejected");
                Credentials::new()
            }
        };

        info!("AMC API client targeting {}", config.base_url);
        Ok(Self {
            base_url: config.base_url()?,
            timeout: config.timeout(),
            transport,
            credentials: Arc::new(credentials),
        })
    }

    /// Replace the vendor key for all subsequent requests, including those
    /// made through clones of this client
    pub fn set_vendor_key(&self, key: impl Into<String>) {
        self.credentials.set_vendor_key(key);
        debug!("Vendor key updated");
    }

    /// The shared credential store
    pub fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// An endpoint for arbitrary targets sharing this client's transport and credentials
    pub fn endpoint<T, M>(&self) -> Endpoint<T, M>
    where
        T: Target,
        M: DeserializeOwned,
    {
        Endpoint::from_parts(
            self.base_url.clone(),
            self.timeout,
            Arc::clone(&self.transport),
            Arc::clone(&self.credentials),
        )
    }

    /// Send any target and decode the response as `M`
    pub async fn request<T, M>(&self, target: &T) -> Result<M>
    where
        T: Target,
        M: DeserializeOwned,
    {
        self.endpoint::<T, M>().request(target).await
    }

    /// Like [`request`](Self::request); returns `None` if `cancel` fires first
    pub async fn request_cancellable<T, M>(
        &self,
        target: &T,
        cancel: &CancellationToken,
    ) -> Option<Result<M>>
    where
        T: Target,
        M: DeserializeOwned,
    {
        self.endpoint::<T, M>()
            .request_cancellable(target, cancel)
            .await
    }

    // ========================================================================
    // Movies
    // ========================================================================

    pub async fn fetch_active_movies(&self) -> Result<MoviesPage> {
        self.request(&MoviesTarget::Active).await
    }

    /// Movies with tickets on sale ahead of release
    pub async fn fetch_advance_ticket_movies(&self) -> Result<MoviesPage> {
        self.request(&MoviesTarget::Advance).await
    }

    /// All movies, with the release window bounded by today's local date
    pub async fn fetch_all_movies(&self, page_number: u32, page_size: u32) -> Result<MoviesPage> {
        self.fetch_all_movies_on(page_number, page_size, Local::now().date_naive())
            .await
    }

    /// All movies, with the release window bounded by `today`
    pub async fn fetch_all_movies_on(
        &self,
        page_number: u32,
        page_size: u32,
        today: NaiveDate,
    ) -> Result<MoviesPage> {
        self.request(&MoviesTarget::All {
            page_number,
            page_size,
            today,
        })
        .await
    }

    pub async fn fetch_coming_soon_movies(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<MoviesPage> {
        self.request(&MoviesTarget::ComingSoon {
            page_number,
            page_size,
        })
        .await
    }

    pub async fn fetch_now_playing_movies(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<MoviesPage> {
        self.request(&MoviesTarget::NowPlaying {
            page_number,
            page_size,
        })
        .await
    }

    pub async fn fetch_movie(&self, id: MovieId) -> Result<Movie> {
        self.request(&MoviesTarget::ById(id)).await
    }

    pub async fn fetch_movie_by_slug(&self, slug: &str) -> Result<Movie> {
        self.request(&MoviesTarget::BySlug(slug.to_string())).await
    }

    // ========================================================================
    // Theatres
    // ========================================================================

    pub async fn fetch_all_theatres(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<TheatresPage> {
        self.request(&TheatresTarget::All {
            page_number,
            page_size,
        })
        .await
    }

    pub async fn fetch_theatre(&self, id: TheatreId) -> Result<Theatre> {
        self.request(&TheatresTarget::ById(id)).await
    }

    pub async fn fetch_theatre_by_slug(&self, slug: &str) -> Result<Theatre> {
        self.request(&TheatresTarget::BySlug(slug.to_string())).await
    }

    // ========================================================================
    // Showtimes
    // ========================================================================

    /// Future showtimes at a theatre, optionally limited to one date
    pub async fn fetch_all_showtimes(
        &self,
        theatre: TheatreId,
        date: Option<NaiveDate>,
    ) -> Result<ShowtimesPage> {
        let target = match date {
            Some(date) => TheatresTarget::ShowtimesOnDate(theatre, date),
            None => TheatresTarget::Showtimes(theatre),
        };
        self.request(&target).await
    }

    pub async fn fetch_showtime(&self, id: ShowtimeId) -> Result<Showtime> {
        self.request(&ShowtimesTarget::ById(id)).await
    }

    /// Showtimes near a location on `date`, narrowed by optional `params`
    pub async fn fetch_showtimes(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        params: Option<QueryParams>,
    ) -> Result<ShowtimesPage> {
        self.request(&ShowtimesTarget::ByDateAndLocation {
            date,
            latitude,
            longitude,
            params,
        })
        .await
    }

    // ========================================================================
    // Paging
    // ========================================================================

    /// Fetch the page after `page`, or `None` on the last page
    pub async fn fetch_next<E>(&self, page: &Page<E>) -> Option<Result<Page<E>>>
    where
        E: DeserializeOwned,
    {
        let href = page.next_link()?;
        debug!("Following next link: {}", href);
        Some(self.request(&LinkTarget::new(href)).await)
    }
}

impl std::fmt::Debug for AmcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmcClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
