//! URL handling for sitemap entries.
//!
//! This module contains:
//! - Base URL validation and root URL derivation
//! - Resolution of relative entry URLs
//! - Path extraction and depth-bucket inference

pub mod normalizer;
pub mod utils;

pub use normalizer::{
    base_url_from_request, is_absolute, parse_base_url, resolve_url, root_url_from_request,
};
pub use utils::{depth_bucket, url_depth, url_path, DEPTH_BUCKETS};
