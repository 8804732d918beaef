//! Tests for the resource path tables

use super::*;
use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::http::{Endpoint, ReqwestTransport};
use crate::models::{MovieId, ShowtimeId, TheatreId};
use crate::query::{encode_query, to_query_string, QueryParams};
use crate::target::{Target, Task};
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use test_case::test_case;

fn endpoint<T: Target>() -> Endpoint<T, Value> {
    let config = ClientConfig::default();
    let transport = Arc::new(ReqwestTransport::new(&config).unwrap());
    Endpoint::new(&config, transport, Arc::new(Credentials::new())).unwrap()
}

fn query_of(target: &impl Target) -> Option<String> {
    target
        .task()
        .query_params()
        .map(|params| to_query_string(&encode_query(params).unwrap()))
}

fn labor_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 9, 6).unwrap()
}

#[test_case(MoviesTarget::NowPlaying { page_number: 1, page_size: 10 }, "/v2/movies/views/now-playing" ; "now playing")]
#[test_case(MoviesTarget::ComingSoon { page_number: 1, page_size: 10 }, "/v2/movies/views/coming-soon" ; "coming soon")]
#[test_case(MoviesTarget::Advance, "/v2/movies/views/advance" ; "advance")]
#[test_case(MoviesTarget::Active, "/v2/movies/views/active" ; "active")]
#[test_case(MoviesTarget::AllActive, "/v2/movies/views/all/active" ; "all active")]
#[test_case(MoviesTarget::OnDemand, "/v2/movies/views/on-demand" ; "on demand")]
#[test_case(MoviesTarget::ById(MovieId(66180)), "/v2/movies/66180" ; "by id")]
#[test_case(MoviesTarget::BySlug("dune-part-one".to_string()), "/v2/movies/dune-part-one" ; "by slug")]
#[test_case(MoviesTarget::ByInternalId(4411), "/v2/movies/internal-release/4411" ; "by internal id")]
#[test_case(MoviesTarget::SimilarOnDemand(MovieId(7)), "/v2/movies/7/on-demand/similar" ; "similar on demand")]
fn test_movie_paths(target: MoviesTarget, expected: &str) {
    assert_eq!(target.path(), expected);
}

#[test]
fn test_all_movies_bounds_release_window_by_today() {
    let target = MoviesTarget::All {
        page_number: 2,
        page_size: 25,
        today: labor_day(),
    };
    assert_eq!(target.path(), "/v2/movies");
    assert_eq!(
        query_of(&target).as_deref(),
        Some("page-number=2&page-size=25&start-date=2021-09-06&end-date=2021-09-06")
    );
}

#[test]
fn test_paged_movie_views_carry_page_params() {
    let target = MoviesTarget::ComingSoon {
        page_number: 3,
        page_size: 10,
    };
    assert_eq!(query_of(&target).as_deref(), Some("page-number=3&page-size=10"));
}

#[test]
fn test_unpaged_targets_are_plain() {
    assert_eq!(MoviesTarget::Active.task(), Task::Plain);
    assert_eq!(TheatresTarget::ById(TheatreId(610)).task(), Task::Plain);
    assert_eq!(ShowtimesTarget::ById(ShowtimeId(1)).task(), Task::Plain);
}

#[test_case(TheatresTarget::All { page_number: 1, page_size: 10 }, "/v2/theatres" ; "all")]
#[test_case(TheatresTarget::ById(TheatreId(610)), "/v2/theatres/610" ; "by id")]
#[test_case(TheatresTarget::BySlug("amc-34th-street-14".to_string()), "/v2/theatres/amc-34th-street-14" ; "by slug")]
#[test_case(TheatresTarget::Showtimes(TheatreId(610)), "/v2/theatres/610/showtimes" ; "showtimes")]
#[test_case(TheatresTarget::ShowtimesOnDate(TheatreId(610), labor_day()), "/v2/theatres/610/showtimes/2021-09-06" ; "showtimes on date")]
#[test_case(TheatresTarget::ByNowPlayingReleaseNumber(203_781), "/v2/theatres/views/now-playing/wmm-release-number/203781" ; "by release number")]
fn test_theatre_paths(target: TheatresTarget, expected: &str) {
    assert_eq!(target.path(), expected);
}

#[test]
fn test_all_theatres_paged() {
    let target = TheatresTarget::All {
        page_number: 1,
        page_size: MAX_PAGE_SIZE,
    };
    assert_eq!(query_of(&target).as_deref(), Some("page-number=1&page-size=100"));
}

#[test]
fn test_showtimes_near_location() {
    let target = ShowtimesTarget::ByDateAndLocation {
        date: labor_day(),
        latitude: 40.752,
        longitude: -74.0,
        params: None,
    };
    assert_eq!(
        target.path(),
        "/v2/showtimes/views/current-location/2021-09-06/40.752/-74.0"
    );
    assert_eq!(target.task(), Task::Plain);

    let target = ShowtimesTarget::ByDateAndLocation {
        date: labor_day(),
        latitude: 40.752,
        longitude: -73.995,
        params: Some(QueryParams::new().with("state", "NY").with("radius", 5)),
    };
    assert_eq!(query_of(&target).as_deref(), Some("state=NY&radius=5"));
}

#[test]
fn test_showtime_by_id_path() {
    assert_eq!(ShowtimesTarget::ById(ShowtimeId(90125)).path(), "/v2/showtimes/90125");
}

#[test]
fn test_resources_request_json() {
    let headers = MoviesTarget::Advance.headers().unwrap();
    assert_eq!(headers.get("Accept").map(String::as_str), Some("application/json"));
}

#[test_case(40.0, "40.0")]
#[test_case(-73.995, "-73.995")]
#[test_case(0.0, "0.0")]
fn test_format_coordinate(value: f64, expected: &str) {
    assert_eq!(format_coordinate(value), expected);
}

#[test_case("../theatres/610", "https://api.amctheatres.com/v2/movies/..%2Ftheatres%2F610" ; "dot segments stay inside the slug")]
#[test_case("dune?page-size=100", "https://api.amctheatres.com/v2/movies/dune%3Fpage-size%3D100" ; "question mark is not a query")]
#[test_case("a#b", "https://api.amctheatres.com/v2/movies/a%23b" ; "hash is not a fragment")]
#[test_case("dune part one", "https://api.amctheatres.com/v2/movies/dune%20part%20one" ; "space")]
fn test_movie_slug_is_one_segment(slug: &str, expected: &str) {
    let request = endpoint::<MoviesTarget>()
        .build_request(&MoviesTarget::BySlug(slug.to_string()))
        .unwrap();
    assert_eq!(request.url().as_str(), expected);
    assert_eq!(request.url().query(), None);
    assert_eq!(request.url().fragment(), None);
}

#[test]
fn test_theatre_slug_is_one_segment() {
    let request = endpoint::<TheatresTarget>()
        .build_request(&TheatresTarget::BySlug("amc/../610?x=1".to_string()))
        .unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://api.amctheatres.com/v2/theatres/amc%2F..%2F610%3Fx%3D1"
    );
}

#[test_case("" ; "empty")]
#[test_case("   " ; "blank")]
#[test_case("." ; "dot")]
#[test_case(".." ; "dot dot")]
fn test_unusable_slugs_are_rejected(slug: &str) {
    let err = endpoint::<MoviesTarget>()
        .build_request(&MoviesTarget::BySlug(slug.to_string()))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPathSegment { .. }));
    assert!(err.is_construction());

    let err = endpoint::<TheatresTarget>()
        .build_request(&TheatresTarget::BySlug(slug.to_string()))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPathSegment { .. }));
}

#[test_case(f64::NAN, -73.99 ; "nan latitude")]
#[test_case(40.75, f64::INFINITY ; "infinite longitude")]
#[test_case(f64::NEG_INFINITY, 0.0 ; "negative infinity")]
fn test_non_finite_coordinates_are_rejected(latitude: f64, longitude: f64) {
    let target = ShowtimesTarget::ByDateAndLocation {
        date: labor_day(),
        latitude,
        longitude,
        params: None,
    };
    let err = endpoint::<ShowtimesTarget>().build_request(&target).unwrap_err();
    assert!(matches!(err, Error::InvalidPathSegment { .. }));
    assert!(err.is_construction());
}

#[test]
fn test_finite_coordinates_build() {
    let target = ShowtimesTarget::ByDateAndLocation {
        date: labor_day(),
        latitude: 40.0,
        longitude: -73.995,
        params: None,
    };
    let request = endpoint::<ShowtimesTarget>().build_request(&target).unwrap();
    assert_eq!(
        request.url().path(),
        "/v2/showtimes/views/current-location/2021-09-06/40.0/-73.995"
    );
}
