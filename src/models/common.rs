//! Shapes shared by every resource: HAL links, paging, attributes, ids

use crate::decode::serde_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A HAL link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    /// Whether `href` is a URI template that must be expanded before use
    #[serde(rename = "templated", default)]
    pub is_templated: bool,
}

/// The `_links` block of a paged listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
}

/// A page of results from a listing endpoint
///
/// `E` is the `_embedded` wrapper, e.g. [`EmbeddedMovies`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<E> {
    /// Results per page, up to 100
    pub page_size: u32,
    pub page_number: u32,
    /// Total number of results across all pages
    pub count: u64,
    /// When the listing was last refreshed; only showtime listings carry it
    #[serde(
        default,
        with = "serde_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated_date_utc: Option<DateTime<Utc>>,
    #[serde(rename = "_links")]
    pub links: Links,
    #[serde(rename = "_embedded")]
    pub embedded: E,
}

impl<E> Page<E> {
    /// Href of the next page, if there is one that can be followed as-is
    pub fn next_link(&self) -> Option<&str> {
        self.links
            .next
            .as_ref()
            .filter(|link| !link.is_templated)
            .map(|link| link.href.as_str())
    }

    pub fn has_next(&self) -> bool {
        self.next_link().is_some()
    }
}

impl<E: Embedded> Page<E> {
    /// Items on this page
    pub fn items(&self) -> &[E::Item] {
        self.embedded.items()
    }
}

/// An `_embedded` wrapper holding one list of items
pub trait Embedded {
    type Item;

    fn items(&self) -> &[Self::Item];
}

/// A named feature flag attached to a movie, theatre or showtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Movie identifier; not interchangeable with other entity ids
    MovieId
);
entity_id!(
    /// Theatre identifier
    TheatreId
);
entity_id!(ShowtimeId);
