//! Native command-line client for the runtime UI backend.
//!
//! The binary in `main.rs` is a thin clap front-end; the transport lives in
//! [`client`] and the text rendering of transformed descriptors in
//! [`render`], so both can be exercised from integration tests.

pub mod client;
pub mod render;

pub use client::ApiClient;
