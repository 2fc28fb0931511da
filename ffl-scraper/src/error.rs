use thiserror::Error;
use url::Url;

/// An error type for the scraper
///
/// Every variant aborts the run. The only outcome the pipeline recovers from
/// is [`ListingError::EmptyListing`], which skips the year.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad year range or url pattern, caught before anything is fetched.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The request never produced a response (dns, connection, body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx.
    #[error("{url} responded with status {status}")]
    Status { url: Url, status: u16 },

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("couldn't derive a file name from {url}")]
    Slug { url: Url },

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a landing page didn't yield any data file links.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("no \"Complete listing\" row found on the landing page")]
    NoCompleteListing,

    #[error("the \"Complete listing\" row has no links")]
    EmptyListing,

    #[error("couldn't resolve link {href}: {source}")]
    InvalidHref {
        href: String,
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
