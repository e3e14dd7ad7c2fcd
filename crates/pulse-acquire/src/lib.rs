//! Response acquisition -- fetches raw profile bodies for the extraction
//! core. All network concerns (browser-like headers, jittered delays,
//! fallback URLs, debug dumps) live here; parsing does not.

mod client;
mod error;
mod instagram;
mod tiktok;

pub use client::ProfileClient;
pub use error::AcquireError;
