//! Shared client pipeline for the CLARA attendance frontend.
//!
//! Everything in here is platform-agnostic: the browser specifics (file
//! handles, HTTP, DOM) are plugged in through the `MediaSource` and
//! `Transport` traits so the whole ingestion pipeline can be exercised
//! natively in tests.

pub mod api;
pub mod encoding;
pub mod error;
pub mod forms;
pub mod model;
pub mod routes;
pub mod submission;
