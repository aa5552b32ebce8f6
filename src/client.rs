//! Hangar API client for latest-version lookups

use serde::Deserialize;
use tracing::warn;

use crate::error::HangarError;
use crate::model::HangarVersion;

/// PaperMC's official Hangar instance
pub const HANGAR_PAPER: &str = "https://hangar.papermc.io";

/// PaperMC's development Hangar instance
pub const HANGAR_PAPER_DEV: &str = "https://hangar.papermc.dev";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Envelope returned by the versions listing endpoint
#[derive(Debug, Deserialize)]
struct VersionsResponse {
    result: Vec<HangarVersion>,
}

/// Optional filters for a version lookup.
///
/// Unset dimensions are omitted from the query entirely. Filter values are
/// appended verbatim, in channel/platform/platformVersion order, without
/// percent-encoding; a value containing a reserved character such as `&`
/// will corrupt the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionFilter {
    channel: Option<String>,
    platform: Option<String>,
    platform_version: Option<String>,
}

impl VersionFilter {
    /// Creates an empty filter that matches every version
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the lookup to a release channel
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Restricts the lookup to a target platform
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Restricts the lookup to a target platform version
    pub fn platform_version(mut self, platform_version: impl Into<String>) -> Self {
        self.platform_version = Some(platform_version.into());
        self
    }

    /// Query string for the listing endpoint. Always requests exactly one
    /// result from the remote service's most-recent-first ordering.
    fn query(&self) -> String {
        let mut query = String::from("limit=1&offset=0");

        if let Some(channel) = &self.channel {
            query.push_str("&channel=");
            query.push_str(channel);
        }

        if let Some(platform) = &self.platform {
            query.push_str("&platform=");
            query.push_str(platform);
        }

        if let Some(platform_version) = &self.platform_version {
            query.push_str("&platformVersion=");
            query.push_str(platform_version);
        }

        query
    }
}

/// Client bound to one Hangar instance.
///
/// Construction performs no I/O. The client holds no per-call state, so a
/// single instance may be shared and called from multiple threads. Each
/// lookup is one blocking round trip with no retry and no timeout beyond
/// what the transport applies.
pub struct HangarClient {
    client: reqwest::blocking::Client,
    base_url: String,
    log_failures: bool,
}

impl HangarClient {
    /// Creates a client for a custom Hangar instance.
    ///
    /// See [`HANGAR_PAPER`] and [`HANGAR_PAPER_DEV`] for the well-known
    /// instances.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            log_failures: false,
        }
    }

    /// Enables reporting of absorbed failures through `tracing::warn!`.
    /// Off by default. The lookup contract is unchanged either way.
    pub fn log_failures(mut self, enabled: bool) -> Self {
        self.log_failures = enabled;
        self
    }

    /// Returns the newest version of `author`/`slug` matching `filter`, or
    /// `None` if no version matches.
    ///
    /// Transport and response-shape failures are absorbed into `None` as
    /// well; callers that need to tell a failed request from an empty result
    /// use [`Self::try_find_latest_version`].
    pub fn find_latest_version(
        &self,
        author: &str,
        slug: &str,
        filter: &VersionFilter,
    ) -> Option<HangarVersion> {
        match self.try_find_latest_version(author, slug, filter) {
            Ok(version) => version,
            Err(err) => {
                if self.log_failures {
                    warn!("version lookup for {}/{} failed: {}", author, slug, err);
                }
                None
            }
        }
    }

    /// As [`Self::find_latest_version`], but keeps failures distinguishable
    /// from the normal no-matching-version outcome.
    pub fn try_find_latest_version(
        &self,
        author: &str,
        slug: &str,
        filter: &VersionFilter,
    ) -> Result<Option<HangarVersion>, HangarError> {
        let url = format!(
            "{}/api/v1/projects/{}/{}/versions?{}",
            self.base_url,
            author,
            slug,
            filter.query()
        );

        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(HangarError::Status(status));
        }

        let body = response.text()?;
        let envelope: VersionsResponse = serde_json::from_str(&body)
            .map_err(|e| HangarError::InvalidResponse(e.to_string()))?;

        Ok(envelope.result.into_iter().next())
    }
}

impl Default for HangarClient {
    /// Client bound to [`HANGAR_PAPER`]
    fn default() -> Self {
        Self::new(HANGAR_PAPER)
    }
}
