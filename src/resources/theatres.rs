use super::{check_slug, page_params, resource_headers, slug_segment};
use crate::decode::format_date;
use crate::error::Result;
use crate::models::TheatreId;
use crate::target::{Target, Task};
use crate::types::Headers;
use chrono::NaiveDate;

/// Calls on `/v2/theatres`
#[derive(Debug, Clone, PartialEq)]
pub enum TheatresTarget {
    All { page_number: u32, page_size: u32 },
    ById(TheatreId),
    BySlug(String),
    /// All future showtimes at a theatre
    Showtimes(TheatreId),
    /// Showtimes at a theatre on one date
    ShowtimesOnDate(TheatreId, NaiveDate),
    /// Theatres currently playing the movie with this West World Media release number
    ByNowPlayingReleaseNumber(i64),
}

impl Target for TheatresTarget {
    fn path(&self) -> String {
        match self {
            TheatresTarget::All { .. } => "/v2/theatres".to_string(),
            TheatresTarget::ById(id) => format!("/v2/theatres/{id}"),
            TheatresTarget::BySlug(slug) => format!("/v2/theatres/{}", slug_segment(slug)),
            TheatresTarget::Showtimes(id) => format!("/v2/theatres/{id}/showtimes"),
            TheatresTarget::ShowtimesOnDate(id, date) => {
                format!("/v2/theatres/{id}/showtimes/{}", format_date(*date))
            }
            TheatresTarget::ByNowPlayingReleaseNumber(number) => {
                format!("/v2/theatres/views/now-playing/wmm-release-number/{number}")
            }
        }
    }

    fn headers(&self) -> Option<Headers> {
        Some(resource_headers())
    }

    fn task(&self) -> Task {
        match self {
            TheatresTarget::All {
                page_number,
                page_size,
            } => Task::query(page_params(*page_number, *page_size)),
            _ => Task::Plain,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            TheatresTarget::BySlug(slug) => check_slug(slug),
            _ => Ok(()),
        }
    }
}
