//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, MovieView, OutputFormat, PageArgs};
use crate::client::AmcClient;
use crate::config::ClientConfig;
use crate::models::{Embedded, Movie, MovieId, Page, Showtime, ShowtimeId, Theatre, TheatreId};
use crate::query::{QueryParams, QueryValue};
use anyhow::{bail, Context, Result};
use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = AmcClient::new(self.load_config()?).context("Failed to create API client")?;

        match &self.cli.command {
            Commands::Movies { view, paging } => self.movies(&client, *view, *paging).await,
            Commands::Movie { id } => {
                let movie = client
                    .fetch_movie(MovieId(*id))
                    .await
                    .with_context(|| format!("Failed to fetch movie {id}"))?;
                self.emit_item(&movie)
            }
            Commands::MovieSlug { slug } => {
                let movie = client
                    .fetch_movie_by_slug(slug)
                    .await
                    .with_context(|| format!("Failed to fetch movie '{slug}'"))?;
                self.emit_item(&movie)
            }
            Commands::Theatres { paging } => {
                let page = client
                    .fetch_all_theatres(paging.page, paging.page_size)
                    .await
                    .context("Failed to fetch theatres")?;
                self.emit_pages(&client, page, paging.all_pages).await
            }
            Commands::Theatre { id } => {
                let theatre = client
                    .fetch_theatre(TheatreId(*id))
                    .await
                    .with_context(|| format!("Failed to fetch theatre {id}"))?;
                self.emit_item(&theatre)
            }
            Commands::TheatreSlug { slug } => {
                let theatre = client
                    .fetch_theatre_by_slug(slug)
                    .await
                    .with_context(|| format!("Failed to fetch theatre '{slug}'"))?;
                self.emit_item(&theatre)
            }
            Commands::TheatreShowtimes {
                id,
                date,
                all_pages,
            } => {
                let page = client
                    .fetch_all_showtimes(TheatreId(*id), *date)
                    .await
                    .with_context(|| format!("Failed to fetch showtimes for theatre {id}"))?;
                self.emit_pages(&client, page, *all_pages).await
            }
            Commands::Showtime { id } => {
                let showtime = client
                    .fetch_showtime(ShowtimeId(*id))
                    .await
                    .with_context(|| format!("Failed to fetch showtime {id}"))?;
                self.emit_item(&showtime)
            }
            Commands::ShowtimesNear {
                date,
                lat,
                lon,
                params,
                all_pages,
            } => {
                let date = date.unwrap_or_else(|| Local::now().date_naive());
                let params = parse_params(params)?;
                let page = client
                    .fetch_showtimes(date, *lat, *lon, params)
                    .await
                    .with_context(|| format!("Failed to fetch showtimes near {lat},{lon}"))?;
                self.emit_pages(&client, page, *all_pages).await
            }
        }
    }

    /// Build the client configuration: file, then environment, then flags
    fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => ClientConfig::default(),
        };
        let mut config = config
            .with_env_overrides()
            .context("Invalid environment configuration")?;

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(key) = &self.cli.vendor_key {
            config.vendor_key = Some(key.clone());
        }
        if let Some(secs) = self.cli.timeout {
            config.timeout_secs = secs;
        }
        config.validate().context("Invalid configuration")?;

        debug!(
            "Using base URL {} with {:?} timeout",
            config.base_url,
            Duration::from_secs(config.timeout_secs)
        );
        Ok(config)
    }

    async fn movies(&self, client: &AmcClient, view: MovieView, paging: PageArgs) -> Result<()> {
        let PageArgs {
            page: number,
            page_size: size,
            all_pages,
        } = paging;

        let page = match view {
            MovieView::Active => client.fetch_active_movies().await,
            MovieView::Advance => client.fetch_advance_ticket_movies().await,
            MovieView::ComingSoon => client.fetch_coming_soon_movies(number, size).await,
            MovieView::NowPlaying => client.fetch_now_playing_movies(number, size).await,
            MovieView::All => client.fetch_all_movies(number, size).await,
        }
        .with_context(|| format!("Failed to fetch {view:?} movies"))?;

        self.emit_pages(client, page, all_pages).await
    }

    /// Print a page, then every following page when `follow` is set
    async fn emit_pages<E>(&self, client: &AmcClient, first: Page<E>, follow: bool) -> Result<()>
    where
        E: Embedded + Serialize + DeserializeOwned,
        E::Item: Summarize,
    {
        let mut page = first;
        let mut pages = 1;
        loop {
            self.emit_page(&page)?;
            if !follow {
                break;
            }
            match client.fetch_next(&page).await {
                Some(next) => {
                    page = next.with_context(|| format!("Failed to fetch page {}", pages + 1))?;
                    pages += 1;
                }
                None => break,
            }
        }
        info!("Fetched {} page(s)", pages);
        Ok(())
    }

    fn emit_page<E>(&self, page: &Page<E>) -> Result<()>
    where
        E: Embedded + Serialize,
        E::Item: Summarize,
    {
        match self.cli.format {
            OutputFormat::Summary => {
                println!(
                    "# page {} ({} per page, {} total)",
                    page.page_number, page.page_size, page.count
                );
                for item in page.items() {
                    println!("{}", item.summary());
                }
                Ok(())
            }
            _ => self.print_json(page),
        }
    }

    fn emit_item<T: Serialize + Summarize>(&self, item: &T) -> Result<()> {
        match self.cli.format {
            OutputFormat::Summary => {
                println!("{}", item.summary());
                Ok(())
            }
            _ => self.print_json(item),
        }
    }

    fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = if self.cli.format == OutputFormat::Json {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        }
        .context("Failed to render output")?;
        println!("{rendered}");
        Ok(())
    }
}

/// One-line description used by `--format summary`
pub trait Summarize {
    fn summary(&self) -> String;
}

impl Summarize for Movie {
    fn summary(&self) -> String {
        let runtime = self
            .run_time
            .map(|m| format!(", {m} min"))
            .unwrap_or_default();
        format!(
            "{}\t{} [{}{}] {}",
            self.id,
            self.name,
            self.rating.as_ref(),
            runtime,
            self.genre.as_ref()
        )
    }
}

impl Summarize for Theatre {
    fn summary(&self) -> String {
        let closed = if self.is_closed { " (closed)" } else { "" };
        format!(
            "{}\t{}{} - {}, {}",
            self.id, self.name, closed, self.location.city, self.location.state
        )
    }
}

impl Summarize for Showtime {
    fn summary(&self) -> String {
        let status = if self.is_canceled {
            " canceled"
        } else if self.is_sold_out {
            " sold out"
        } else {
            ""
        };
        format!(
            "{}\t{} {} auditorium {} {}{}",
            self.id,
            self.show_date_time_local.format("%Y-%m-%d %H:%M"),
            self.movie_name,
            self.auditorium,
            self.premium_format,
            status
        )
    }
}

/// Parse `key=value` pairs into query parameters
///
/// Values that read as integers, floats or booleans are sent as such;
/// everything else is sent as a string.
pub fn parse_params(raw: &[String]) -> Result<Option<QueryParams>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let mut params = QueryParams::new();
    for pair in raw {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("Query parameter '{pair}' must look like key=value");
        };
        if key.is_empty() {
            bail!("Query parameter '{pair}' has an empty key");
        }
        params.insert(key, parse_value(value));
    }
    Ok(Some(params))
}

fn parse_value(raw: &str) -> QueryValue {
    if let Ok(int) = raw.parse::<i64>() {
        return QueryValue::Int(int);
    }
    // Integers too wide for i64 go out verbatim rather than rounded
    let digits = raw.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return QueryValue::Str(raw.to_string());
    }
    if let Ok(float) = raw.parse::<f64>() {
        if float.is_finite() {
            return QueryValue::Float(float);
        }
    }
    raw.parse::<bool>()
        .map_or_else(|_| QueryValue::Str(raw.to_string()), QueryValue::Bool)
}
