use super::{check_slug, page_params, resource_headers, slug_segment};
use crate::decode::format_date;
use crate::error::Result;
use crate::models::MovieId;
use crate::target::{Target, Task};
use crate::types::Headers;
use chrono::NaiveDate;

/// Calls on `/v2/movies`
#[derive(Debug, Clone, PartialEq)]
pub enum MoviesTarget {
    /// Every movie; `today` bounds the release window on both sides
    All {
        page_number: u32,
        page_size: u32,
        today: NaiveDate,
    },
    NowPlaying { page_number: u32, page_size: u32 },
    ComingSoon { page_number: u32, page_size: u32 },
    /// Movies with advance tickets on sale
    Advance,
    Active,
    /// Active and digital on-demand movies
    AllActive,
    OnDemand,
    ById(MovieId),
    /// By dash-separated title
    BySlug(String),
    /// By internal release id
    ByInternalId(i64),
    /// On-demand movies similar to the given one
    SimilarOnDemand(MovieId),
}

impl Target for MoviesTarget {
    fn path(&self) -> String {
        match self {
            MoviesTarget::All { .. } => "/v2/movies".to_string(),
            MoviesTarget::NowPlaying { .. } => "/v2/movies/views/now-playing".to_string(),
            MoviesTarget::ComingSoon { .. } => "/v2/movies/views/coming-soon".to_string(),
            MoviesTarget::Advance => "/v2/movies/views/advance".to_string(),
            MoviesTarget::Active => "/v2/movies/views/active".to_string(),
            MoviesTarget::AllActive => "/v2/movies/views/all/active".to_string(),
            MoviesTarget::OnDemand => "/v2/movies/views/on-demand".to_string(),
            MoviesTarget::ById(id) => format!("/v2/movies/{id}"),
            MoviesTarget::BySlug(slug) => format!("/v2/movies/{}", slug_segment(slug)),
            MoviesTarget::ByInternalId(id) => format!("/v2/movies/internal-release/{id}"),
            MoviesTarget::SimilarOnDemand(id) => format!("/v2/movies/{id}/on-demand/similar"),
        }
    }

    fn headers(&self) -> Option<Headers> {
        Some(resource_headers())
    }

    fn task(&self) -> Task {
        match self {
            MoviesTarget::All {
                page_number,
                page_size,
                today,
            } => {
                let today = format_date(*today);
                Task::query(
                    page_params(*page_number, *page_size)
                        .with("start-date", today.as_str())
                        .with("end-date", today),
                )
            }
            MoviesTarget::NowPlaying {
                page_number,
                page_size,
            }
            | MoviesTarget::ComingSoon {
                page_number,
                page_size,
            } => Task::query(page_params(*page_number, *page_size)),
            _ => Task::Plain,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            MoviesTarget::BySlug(slug) => check_slug(slug),
            _ => Ok(()),
        }
    }
}
