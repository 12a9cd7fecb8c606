//! # insight-feedback
//!
//! State that lives next to the insight engine but is owned by the calling
//! layer.
//!
//! - [`LatestFeedbackIndex`]: reduces a feedback table to the most recent
//!   record per insight id and serves it to suppression through
//!   [`FeedbackIndex`](insight_types::FeedbackIndex)
//! - [`SeenStore`]: display-frequency TTL cache of when an insight was last
//!   shown on a screen. The engine never consults it.

#![deny(unsafe_code)]

pub mod error;
pub mod index;
pub mod seen;

pub use error::{FeedbackError, Result};
pub use index::LatestFeedbackIndex;
pub use seen::{SeenKey, SeenStore, SeenStoreConfig};
