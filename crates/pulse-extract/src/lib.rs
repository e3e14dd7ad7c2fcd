//! Profile extraction core -- turns raw Instagram/TikTok response bodies
//! into normalized [`ProfileRecord`]s.
//!
//! Everything in this crate is a pure function of its input body: no I/O,
//! no shared state. Acquisition (HTTP) and presentation (the API facade)
//! live in sibling crates.

pub mod coerce;
pub mod engagement;
pub mod instagram;
pub mod links;
pub mod record;
pub mod tiktok;

pub use coerce::coerce_count;
pub use record::{Platform, ProfileRecord, NOT_AVAILABLE};
