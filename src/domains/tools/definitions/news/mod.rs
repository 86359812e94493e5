//! News tools module.
//!
//! Three pass-through tools over NewsAPI.org: parameters map directly onto
//! the remote query string and the response body is returned verbatim.
//! Unlike the dictionary service, failures here are NOT translated into
//! data - they propagate to the transport as protocol errors.

pub mod client;

pub mod everything;
pub mod list_sources;
pub mod top_headlines;

pub use client::{NewsClient, NewsError};

pub use everything::{EverythingParams, EverythingTool};
pub use list_sources::{ListSourcesParams, ListSourcesTool};
pub use top_headlines::{TopHeadlinesParams, TopHeadlinesTool};
