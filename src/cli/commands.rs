//! CLI commands and argument parsing

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Query the AMC Theatres API from the command line
#[derive(Parser, Debug)]
#[command(name = "amc-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Vendor key (defaults to AMC_VENDOR_KEY)
    #[arg(short = 'k', long, global = true)]
    pub vendor_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Paging options shared by listing commands
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = crate::resources::DEFAULT_PAGE_NUMBER)]
    pub page: u32,

    /// Results per page (max 100)
    #[arg(long, default_value_t = crate::resources::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Keep following `next` links until the last page
    #[arg(long)]
    pub all_pages: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List movies
    Movies {
        /// Which listing to fetch
        #[arg(value_enum, default_value = "now-playing")]
        view: MovieView,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Get a movie by id
    Movie { id: i64 },

    /// Get a movie by slug
    MovieSlug { slug: String },

    /// List theatres
    Theatres {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Get a theatre by id
    Theatre { id: i64 },

    /// Get a theatre by slug
    TheatreSlug { slug: String },

    /// List showtimes at a theatre
    TheatreShowtimes {
        id: i64,

        /// Only showtimes on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Keep following `next` links until the last page
        #[arg(long)]
        all_pages: bool,
    },

    /// Get a showtime by id
    Showtime { id: i64 },

    /// List showtimes near a location
    ShowtimesNear {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Extra query parameter as key=value (repeatable), e.g. radius=10
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Keep following `next` links until the last page
        #[arg(long)]
        all_pages: bool,
    },
}

/// Movie listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MovieView {
    Active,
    Advance,
    ComingSoon,
    NowPlaying,
    All,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per line
    Json,
    /// Indented JSON
    Pretty,
    /// One summary line per item
    Summary,
}
