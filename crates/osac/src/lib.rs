// Copyright 2026 osac Contributors
// SPDX-License-Identifier: Apache-2.0

//! osac — resolve and download open-source package archives from a
//! release-index site.
//!
//! Listing works in two levels: the index page maps a [`Product`] to its
//! [`Release`]s, and each release page lists its [`Package`]s.

pub mod config;
pub mod download;
pub mod http_client;
pub mod packages;
pub mod releases;
pub mod split;
pub mod types;

pub use config::ClientConfig;
pub use download::{download_packages, DownloadEvent};
pub use http_client::HttpClient;
pub use packages::{list_packages, parse_packages, select_packages};
pub use releases::{list_releases, parse_releases};
pub use split::{split_project_name, UNDETERMINED_VERSION};
pub use types::*;
