//! Gist Gateway Upstream Client
//!
//! This crate provides the client for the upstream GitHub gists listing,
//! mapping transport and status outcomes to typed results and projecting
//! each upstream record into a [`GistSummary`].

pub mod client;
pub mod error;
pub mod gist;

pub use client::{DEFAULT_USER_AGENT, GitHubClient, GitHubClientConfig};
pub use error::UpstreamError;
pub use gist::{GistSummary, NO_DESCRIPTION};
