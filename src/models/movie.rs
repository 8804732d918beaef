//! Movie resources

use super::common::{Attribute, Embedded, MovieId};
use crate::decode::{classified, serde_date, strict, Classified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};
use url::Url;

/// Primary genre of a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
pub enum Genre {
    #[strum(to_string = "Adventure")]
    Adventure,
    #[strum(to_string = "Animation")]
    Animation,
    #[strum(to_string = "Comedy")]
    Comedy,
    #[strum(to_string = "Western")]
    Western,
    #[strum(to_string = "Special Events")]
    SpecialEvents,
    #[strum(to_string = "Fantasy")]
    Fantasy,
    #[strum(to_string = "Musical")]
    Musical,
    #[strum(to_string = "Sci-Fi")]
    SciFi,
    #[strum(to_string = "Film Festival")]
    FilmFestival,
    #[strum(to_string = "Suspense")]
    Suspense,
    #[strum(to_string = "Family")]
    Family,
    #[strum(to_string = "Urban")]
    Urban,
    #[strum(to_string = "Romantic Comedy")]
    RomanticComedy,
    #[strum(to_string = "Action")]
    Action,
    #[strum(to_string = "Specialty")]
    Specialty,
    #[strum(to_string = "Documentary")]
    Documentary,
    #[strum(to_string = "Horror")]
    Horror,
    #[strum(to_string = "Drama")]
    Drama,
    #[strum(to_string = "Science Fiction")]
    ScienceFiction,
    #[strum(to_string = "unavailable")]
    Unavailable,
}

impl Classified for Genre {
    const SENTINEL: Self = Genre::Unavailable;
}

/// MPAA rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
pub enum MpaaRating {
    #[strum(to_string = "G")]
    G,
    #[strum(to_string = "PG")]
    Pg,
    #[strum(to_string = "PG13")]
    Pg13,
    #[strum(to_string = "14A")]
    FourteenA,
    #[strum(to_string = "R")]
    R,
    #[strum(to_string = "NC17")]
    Nc17,
    #[strum(to_string = "18A")]
    EighteenA,
    #[strum(to_string = "X")]
    X,
    #[strum(to_string = "NR")]
    NotRated,
    #[strum(to_string = "unrated")]
    Unrated,
}

impl Classified for MpaaRating {
    const SENTINEL: Self = MpaaRating::Unrated;
}

/// Tier of a movie for private theatre rentals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
pub enum RentalTier {
    #[strum(to_string = "Tier1")]
    Tier1,
    #[strum(to_string = "Tier2")]
    Tier2,
    #[strum(to_string = "unavailable")]
    Unavailable,
}

impl Classified for RentalTier {
    const SENTINEL: Self = RentalTier::Unavailable;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
pub enum PreferredMediaType {
    #[strum(to_string = "OnDemand")]
    OnDemand,
    #[strum(to_string = "Theatrical")]
    Theatrical,
}

/// Artwork and trailer locations for a movie
///
/// Values are kept as raw strings; the service sometimes sends empty or
/// relative values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieMedia {
    pub poster_thumbnail: Option<String>,
    pub poster_standard: Option<String>,
    pub poster_large: Option<String>,
    pub poster_dynamic: Option<String>,
    pub poster_alternate_dynamic: Option<String>,
    #[serde(rename = "poster3DDynamic")]
    pub poster_3d_dynamic: Option<String>,
    #[serde(rename = "posterIMAXDynamic")]
    pub poster_imax_dynamic: Option<String>,
    pub hero_desktop_dynamic: Option<String>,
    pub hero_mobile_dynamic: Option<String>,
    pub trailer_hd: Option<String>,
    pub trailer_mp4: Option<String>,
    pub trailer_teaser_dynamic: Option<String>,
    pub trailer_alternate_dynamic: Option<String>,
    pub on_demand_poster_dynamic: Option<String>,
    pub on_demand_trailer_mp4_dynamic: Option<String>,
    pub attributes: Option<Vec<Attribute>>,
}

impl MovieMedia {
    /// Poster candidates in preference order
    fn posters(&self) -> [Option<&str>; 8] {
        [
            self.poster_dynamic.as_deref(),
            self.poster_thumbnail.as_deref(),
            self.poster_large.as_deref(),
            self.poster_standard.as_deref(),
            self.poster_imax_dynamic.as_deref(),
            self.poster_alternate_dynamic.as_deref(),
            self.poster_3d_dynamic.as_deref(),
            self.on_demand_poster_dynamic.as_deref(),
        ]
    }
}

/// A movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub sortable_name: String,
    /// Comma-separated list of actors
    #[serde(default)]
    pub starring_actors: String,
    /// Comma-separated list of directors
    #[serde(default)]
    pub directors: String,
    #[serde(default = "classified::sentinel", with = "classified")]
    pub genre: Genre,
    #[serde(
        rename = "mpaaRating",
        default = "classified::sentinel",
        with = "classified"
    )]
    pub rating: MpaaRating,
    /// West World Media release number
    #[serde(rename = "wwmReleaseNumber", default)]
    pub release_number: Option<i64>,
    /// Total runtime in minutes
    #[serde(default)]
    pub run_time: Option<u32>,
    /// 0.0 to 1.0
    pub score: f64,
    pub slug: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub synopsis_tag_line: Option<String>,
    #[serde(with = "serde_date")]
    pub release_date_utc: DateTime<Utc>,
    #[serde(default, with = "serde_date::option")]
    pub earliest_showing_utc: Option<DateTime<Utc>>,
    pub has_scheduled_showtimes: bool,
    #[serde(default)]
    pub display_online_ticket_availability: Option<bool>,
    #[serde(with = "serde_date")]
    pub online_ticket_availability_date_utc: DateTime<Utc>,
    pub website_url: Url,
    pub showtimes_url: Url,
    #[serde(default)]
    pub distributor_id: Option<i64>,
    #[serde(default)]
    pub distributor_code: Option<String>,
    pub available_for_a_list: bool,
    #[serde(with = "strict")]
    pub preferred_media_type: PreferredMediaType,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default = "classified::sentinel", with = "classified")]
    pub private_theatre_rental_tier: RentalTier,
    #[serde(default)]
    pub media: MovieMedia,
}

impl Movie {
    /// First poster that parses as an absolute URL
    pub fn thumbnail_url(&self) -> Option<Url> {
        self.media
            .posters()
            .into_iter()
            .flatten()
            .find_map(|raw| Url::parse(raw).ok())
    }

    /// Actor names, split from the comma-separated field
    pub fn actors(&self) -> Vec<&str> {
        split_names(&self.starring_actors)
    }

    pub fn director_names(&self) -> Vec<&str> {
        split_names(&self.directors)
    }
}

fn split_names(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// `_embedded` block of a movie listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedMovies {
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl Embedded for EmbeddedMovies {
    type Item = Movie;

    fn items(&self) -> &[Movie] {
        &self.movies
    }
}
