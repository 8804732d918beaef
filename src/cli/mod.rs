//! CLI module
//!
//! Command-line interface over [`AmcClient`](crate::client::AmcClient).
//!
//! # Commands
//!
//! - `movies [active|advance|coming-soon|now-playing|all]` - List movies
//! - `movie <id>` / `movie-slug <slug>` - Get one movie
//! - `theatres` - List theatres
//! - `theatre <id>` / `theatre-slug <slug>` - Get one theatre
//! - `theatre-showtimes <id> [--date]` - Showtimes at a theatre
//! - `showtime <id>` - Get one showtime
//! - `showtimes-near --lat --lon [--date] [-p key=value]` - Showtimes near a location

mod commands;
mod runner;

pub use commands::{Cli, Commands, MovieView, OutputFormat, PageArgs};
pub use runner::{parse_params, Runner, Summarize};
