//! Theatre resources

use super::common::{Attribute, Embedded, TheatreId};
use crate::decode::{serde_date, strict};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};
use url::Url;

/// How concessions can reach the guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
pub enum ConcessionDeliveryOption {
    #[strum(to_string = "DeliveryToSeat")]
    DeliveryToSeat,
    #[strum(to_string = "ExpressPickup")]
    ExpressPickup,
}

/// A period during which a theatre is closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Closure {
    #[serde(with = "serde_date")]
    pub start_date_time_utc: DateTime<Utc>,
    /// `None` for an open-ended closure
    #[serde(default, with = "serde_date::option")]
    pub end_date_time_utc: Option<DateTime<Utc>>,
}

impl Closure {
    /// Whether `at` falls inside the closure
    pub fn covers(&self, at: DateTime<Utc>) -> bool {
        at >= self.start_date_time_utc && self.end_date_time_utc.map_or(true, |end| at < end)
    }
}

/// Where a theatre is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub state: String,
    pub state_name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub market_name: String,
    pub market_id: i64,
    #[serde(default)]
    pub city_url_suffix_text: Option<String>,
    #[serde(default)]
    pub state_url_suffix_text: Option<String>,
    #[serde(default)]
    pub market_url_suffix_text: Option<String>,
    /// Map image for directions to the theatre
    #[serde(default)]
    pub directions_url: Option<Url>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TheatreMedia {
    pub theatre_image_icon: Option<String>,
    pub theatre_image_standard: Option<String>,
    pub theatre_image_thumbnail: Option<String>,
    pub theatre_image_large: Option<String>,
    pub hero_desktop_dynamic: Option<String>,
    pub hero_mobile_dynamic: Option<String>,
    pub interior_dynamic: Option<String>,
    pub exterior_dynamic: Option<String>,
    pub promotion_dynamic: Option<String>,
}

/// A theatre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theatre {
    pub id: TheatreId,
    pub name: String,
    pub long_name: String,
    pub guest_services_phone_number: String,
    /// Current UTC offset of the theatre's timezone
    pub utc_offset: String,
    pub timezone: String,
    pub slug: String,
    #[serde(default)]
    pub facebook_url: Option<Url>,
    /// Why the theatre is temporarily closed, if it is
    #[serde(default)]
    pub outage_description: Option<String>,
    #[serde(default)]
    pub website_url: Option<Url>,
    pub loyalty_version_id: i64,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_closed: bool,
    #[serde(default)]
    pub closures: Vec<Closure>,
    #[serde(default, with = "serde_date::option")]
    pub last_business_date: Option<DateTime<Utc>>,
    pub ticketable: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub location: Location,
    #[serde(default)]
    pub media: TheatreMedia,
    #[serde(default)]
    pub redemption_methods: Vec<String>,
    /// West World Media theatre number
    #[serde(default)]
    pub west_world_media_number: Option<i64>,
    #[serde(
        default,
        deserialize_with = "strict::deserialize_vec",
        serialize_with = "strict::serialize_vec"
    )]
    pub concessions_delivery_options: Vec<ConcessionDeliveryOption>,
    /// Used when the flat tax amount is zero
    pub convenience_fee_tax_percent: f64,
    pub convenience_fee_tax_flat_amount: f64,
    /// Brand abbreviation (AMC, DIT, Classic)
    pub brand: String,
    pub subscription_usage_level: i64,
    pub online_concessions: bool,
    pub has_multiple_kitchens: bool,
    pub delivery_to_seat: bool,
}

impl Theatre {
    /// Whether the theatre has the attribute `code`
    pub fn has_attribute(&self, code: &str) -> bool {
        self.attributes.iter().any(|a| a.code.eq_ignore_ascii_case(code))
    }

    /// Closed outright, or inside a scheduled closure at `at`
    pub fn is_closed_at(&self, at: DateTime<Utc>) -> bool {
        self.is_closed || self.closures.iter().any(|c| c.covers(at))
    }
}

pub(super) fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// `_embedded` block of a theatre listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedTheatres {
    #[serde(default)]
    pub theatres: Vec<Theatre>,
}

impl Embedded for EmbeddedTheatres {
    type Item = Theatre;

    fn items(&self) -> &[Theatre] {
        &self.theatres
    }
}
