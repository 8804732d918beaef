//! Response models
//!
//! Serde models for the movie, theatre and showtime resources. Field names
//! follow the service's camelCase JSON; unknown fields are ignored. Every
//! timestamp goes through [`decode_date`](crate::decode::decode_date) and
//! every classification through the case-insensitive enum resolver.

mod common;
mod movie;
mod showtime;
mod theatre;

pub use common::{Attribute, Embedded, Link, Links, MovieId, Page, ShowtimeId, TheatreId};
pub use movie::{EmbeddedMovies, Genre, Movie, MovieMedia, MpaaRating, PreferredMediaType, RentalTier};
pub use showtime::{
    EmbeddedShowtimes, Showtime, ShowtimeMedia, ShowtimesPage, TicketPrice, TicketType,
};
pub use theatre::{
    Closure, ConcessionDeliveryOption, EmbeddedTheatres, Location, Theatre, TheatreMedia,
};

/// A page of movies
pub type MoviesPage = Page<EmbeddedMovies>;
/// A page of theatres
pub type TheatresPage = Page<EmbeddedTheatres>;
