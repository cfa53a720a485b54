//! Atom and RSS 2.0 rendering of event selections.
//!
//! One neutral representation ([`entry::Feed`]) is built per request; the two
//! envelope serializers differ only in XML shape and content type.

use thiserror::Error;

pub mod atom;
pub mod entry;
pub mod rss;

mod xml;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Generated feed XML was not valid UTF-8")]
    InvalidUtf8,
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// The two supported feed envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedType {
    Atom,
    Rss,
}

impl FeedType {
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Atom => "application/atom+xml",
            Self::Rss => "application/rss+xml",
        }
    }

    /// Route suffix the feed is served under (`upcoming.<extension>`).
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Rss => "rss",
        }
    }

    /// ## Summary
    /// Renders `feed` in this envelope.
    ///
    /// ## Errors
    /// Returns a [`FeedError`] if XML writing fails.
    pub fn serialize(self, feed: &entry::Feed) -> FeedResult<String> {
        match self {
            Self::Atom => atom::serialize_atom(feed),
            Self::Rss => rss::serialize_rss(feed),
        }
    }
}

impl std::fmt::Display for FeedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
