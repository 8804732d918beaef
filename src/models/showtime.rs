//! Showtime resources

use super::common::{Attribute, Embedded, MovieId, Page, ShowtimeId};
use super::movie::{Genre, MpaaRating};
use super::theatre::null_as_false;
use crate::decode::{classified, serde_date, Classified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
pub enum TicketType {
    #[strum(to_string = "adult")]
    Adult,
    #[strum(to_string = "child")]
    Child,
    #[strum(to_string = "senior")]
    Senior,
}

impl Classified for TicketType {
    const SENTINEL: Self = TicketType::Adult;
}

/// Display price of one ticket type; not final
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPrice {
    /// USD
    pub price: f64,
    #[serde(
        rename = "type",
        default = "classified::sentinel",
        with = "classified"
    )]
    pub ticket_type: TicketType,
    /// SKU used to assemble the product for an order
    pub sku: String,
    #[serde(default)]
    pub age_policy: Option<String>,
    /// USD
    pub tax: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowtimeMedia {
    pub hero_desktop_dynamic: Option<String>,
    pub hero_mobile_dynamic: Option<String>,
    pub poster_dynamic: Option<String>,
    pub poster_alternate_dynamic: Option<String>,
    #[serde(rename = "poster3DDynamic")]
    pub poster_3d_dynamic: Option<String>,
    #[serde(rename = "posterIMAXDynamic")]
    pub poster_imax_dynamic: Option<String>,
    pub trailer_teaser_dynamic: Option<String>,
    pub trailer_alternate_dynamic: Option<String>,
}

/// A single performance of a movie in an auditorium
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    pub id: ShowtimeId,
    pub performance_number: i64,
    pub movie_id: MovieId,
    pub movie_name: String,
    #[serde(default = "classified::sentinel", with = "classified")]
    pub genre: Genre,
    pub movie_url: Url,
    pub sortable_movie_name: String,
    #[serde(with = "serde_date")]
    pub show_date_time_utc: DateTime<Utc>,
    /// Wall-clock time at the theatre, stored without its offset
    #[serde(with = "serde_date")]
    pub show_date_time_local: DateTime<Utc>,
    #[serde(with = "serde_date")]
    pub sell_until_date_time_utc: DateTime<Utc>,
    pub auditorium: i64,
    pub layout_id: i64,
    /// Bumped whenever the auditorium layout changes
    pub layout_version_number: i64,
    pub is_sold_out: bool,
    pub is_almost_sold_out: bool,
    pub is_canceled: bool,
    pub utc_offset: String,
    pub purchase_url: Url,
    pub mobile_purchase_url: Url,
    #[serde(default)]
    pub run_time: Option<u32>,
    #[serde(
        rename = "mpaaRating",
        default = "classified::sentinel",
        with = "classified"
    )]
    pub rating: MpaaRating,
    pub premium_format: String,
    #[serde(default)]
    pub ticket_prices: Vec<TicketPrice>,
    #[serde(with = "serde_date")]
    pub last_updated_date_utc: DateTime<Utc>,
    #[serde(default)]
    pub media: ShowtimeMedia,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_embargoed: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_coming_soon: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_discount_matinee_priced: bool,
    #[serde(default)]
    pub discount_matinee_message: Option<String>,
    /// When an embargoed showtime becomes displayable
    #[serde(with = "serde_date")]
    pub visibility_date_time_utc: DateTime<Utc>,
    /// Cap for private theatre rentals
    #[serde(default)]
    pub maximum_intended_attendance: Option<u32>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Showtime {
    /// Whether tickets can still be bought at `at`
    pub fn is_on_sale(&self, at: DateTime<Utc>) -> bool {
        !self.is_canceled && !self.is_sold_out && at < self.sell_until_date_time_utc
    }

    pub fn price_for(&self, ticket_type: TicketType) -> Option<&TicketPrice> {
        self.ticket_prices.iter().find(|p| p.ticket_type == ticket_type)
    }
}

/// `_embedded` block of a showtime listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedShowtimes {
    #[serde(default)]
    pub showtimes: Vec<Showtime>,
}

impl Embedded for EmbeddedShowtimes {
    type Item = Showtime;

    fn items(&self) -> &[Showtime] {
        &self.showtimes
    }
}

/// A page of showtimes; carries `lastUpdatedDateUtc`
pub type ShowtimesPage = Page<EmbeddedShowtimes>;
