use super::{check_coordinate, format_coordinate, resource_headers};
use crate::decode::format_date;
use crate::error::Result;
use crate::models::ShowtimeId;
use crate::query::QueryParams;
use crate::target::{Target, Task};
use crate::types::Headers;
use chrono::NaiveDate;

/// Calls on `/v2/showtimes`
#[derive(Debug, Clone, PartialEq)]
pub enum ShowtimesTarget {
    ById(ShowtimeId),
    /// Showtimes near a location on a date
    ///
    /// Useful optional parameters include `movie`, `movie-id`, `radius`,
    /// `city` and `state`. The service ignores `city` unless `state` is set.
    ByDateAndLocation {
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        params: Option<QueryParams>,
    },
}

impl Target for ShowtimesTarget {
    fn path(&self) -> String {
        match self {
            ShowtimesTarget::ById(id) => format!("/v2/showtimes/{id}"),
            ShowtimesTarget::ByDateAndLocation {
                date,
                latitude,
                longitude,
                ..
            } => format!(
                "/v2/showtimes/views/current-location/{}/{}/{}",
                format_date(*date),
                format_coordinate(*latitude),
                format_coordinate(*longitude)
            ),
        }
    }

    fn headers(&self) -> Option<Headers> {
        Some(resource_headers())
    }

    fn task(&self) -> Task {
        match self {
            ShowtimesTarget::ByDateAndLocation {
                params: Some(params),
                ..
            } => Task::query(params.clone()),
            _ => Task::Plain,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            ShowtimesTarget::ByDateAndLocation {
                latitude,
                longitude,
                ..
            } => {
                check_coordinate("latitude", *latitude)?;
                check_coordinate("longitude", *longitude)
            }
            ShowtimesTarget::ById(_) => Ok(()),
        }
    }
}
