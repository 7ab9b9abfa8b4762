//! Third-party public-APIs directory proxy
//!
//! A thin pass-through: fetch the upstream listing, filter by category,
//! truncate to a limit. Filtering is separated from the fetch so it can be
//! tested without the network.

use crate::error::ApiError;
use auth_service_shared::types::{DirectoryEntry, DirectoryListing};
use tracing::warn;

/// Directory proxy service
pub struct DirectoryService;

impl DirectoryService {
    /// Fetch all entries from the upstream directory.
    ///
    /// Any upstream failure (network, timeout, non-2xx status, unparsable
    /// body) surfaces as an internal error.
    pub async fn fetch_entries(
        client: &reqwest::Client,
        url: &str,
    ) -> Result<Vec<DirectoryEntry>, ApiError> {
        let response = client
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                warn!(error = %e, "directory upstream request failed");
                ApiError::Internal(anyhow::anyhow!("directory upstream request failed: {}", e))
            })?;

        let listing = response.json::<DirectoryListing>().await.map_err(|e| {
            warn!(error = %e, "directory upstream returned an unparsable body");
            ApiError::Internal(anyhow::anyhow!(
                "directory upstream returned an unparsable body: {}",
                e
            ))
        })?;

        Ok(listing.entries)
    }

    /// Apply the query-driven category filter and limit truncation.
    ///
    /// The category match is case-insensitive equality; an absent or empty
    /// category applies no filter. A limit that does not parse as a
    /// non-negative integer is ignored.
    pub fn filter(
        entries: Vec<DirectoryEntry>,
        category: Option<&str>,
        limit: Option<&str>,
    ) -> Vec<DirectoryEntry> {
        let mut filtered = match category {
            Some(category) if !category.is_empty() => {
                let category = category.to_lowercase();
                entries
                    .into_iter()
                    .filter(|entry| entry.category.to_lowercase() == category)
                    .collect()
            }
            _ => entries,
        };

        if let Some(limit) = limit.and_then(|raw| raw.parse::<usize>().ok()) {
            filtered.truncate(limit);
        }

        filtered
    }
}

/// Build the shared HTTP client with a bounded total request timeout
pub fn build_http_client(timeout_secs: u64) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
}
