//! AMC resource targets
//!
//! One [`Target`](crate::target::Target) enum per resource family. Each
//! variant maps to a fixed path under `/v2`; listings take `page-number` and
//! `page-size` query parameters.

mod movies;
mod showtimes;
mod theatres;

pub use movies::MoviesTarget;
pub use showtimes::ShowtimesTarget;
pub use theatres::TheatresTarget;

use crate::error::{Error, Result};
use crate::query::{encode_path_segment, QueryParams};
use crate::types::Headers;

/// First page
pub const DEFAULT_PAGE_NUMBER: u32 = 1;
/// Results per page when the caller does not say
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Largest page the service will return
pub const MAX_PAGE_SIZE: u32 = 100;

/// Query parameters selecting one page of a listing
pub(crate) fn page_params(page_number: u32, page_size: u32) -> QueryParams {
    QueryParams::new()
        .with("page-number", page_number)
        .with("page-size", page_size)
}

/// Headers every resource request declares
pub(crate) fn resource_headers() -> Headers {
    Headers::from([("Accept".to_string(), "application/json".to_string())])
}

/// A slug must name exactly one resource: non-empty and not a dot segment
pub(crate) fn check_slug(slug: &str) -> Result<()> {
    match slug.trim() {
        "" => Err(Error::invalid_path_segment(slug, "slug is empty")),
        "." | ".." => Err(Error::invalid_path_segment(slug, "slug is a dot segment")),
        _ => Ok(()),
    }
}

/// Path form of a slug, escaped as a single segment
pub(crate) fn slug_segment(slug: &str) -> String {
    encode_path_segment(slug)
}

pub(crate) fn check_coordinate(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_path_segment(
            value.to_string(),
            format!("{name} must be a finite number"),
        ))
    }
}

/// Render a coordinate for a path segment, always with a decimal point
pub(crate) fn format_coordinate(value: f64) -> String {
    let rendered = value.to_string();
    if rendered.contains('.') || !value.is_finite() {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

#[cfg(test)]
mod tests;
