//! Value types for Hangar plugin versions

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One published version of a Hangar project.
///
/// A snapshot of a single entry from the versions listing endpoint. Records
/// are immutable, carry no reference to the client that produced them, and
/// compare structurally over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HangarVersion {
    name: String,
    #[serde(rename = "createdAt")]
    created: DateTime<Utc>,
    description: String,
}

impl HangarVersion {
    /// Creates a record from its parts. No validation is performed.
    pub fn new(
        name: impl Into<String>,
        created: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            created,
            description: description.into(),
        }
    }

    /// Display name of the version. Not guaranteed to be valid semver.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the version was published.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Changelog of the version, usually Markdown. May be empty.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for HangarVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.name,
            self.created.to_rfc3339(),
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> HangarVersion {
        HangarVersion::new(
            "1.2.0",
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            "fix bugs",
        )
    }

    #[test]
    fn versions_with_identical_fields_are_equal() {
        assert_eq!(sample(), sample());
    }

    #[test]
    fn changing_any_field_breaks_equality() {
        let base = sample();

        let renamed = HangarVersion::new("1.2.1", base.created(), base.description());
        assert_ne!(base, renamed);

        let republished = HangarVersion::new(
            base.name(),
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap(),
            base.description(),
        );
        assert_ne!(base, republished);

        let redescribed = HangarVersion::new(base.name(), base.created(), "add features");
        assert_ne!(base, redescribed);
    }

    #[test]
    fn deserializes_created_at_into_created() {
        let version: HangarVersion = serde_json::from_str(
            r#"{"name":"1.2.0","createdAt":"2023-01-01T00:00:00Z","description":"fix bugs"}"#,
        )
        .unwrap();

        assert_eq!(version, sample());
    }

    #[test]
    fn unknown_response_fields_are_ignored() {
        let version: HangarVersion = serde_json::from_str(
            r#"{
                "name": "1.2.0",
                "createdAt": "2023-01-01T00:00:00Z",
                "description": "fix bugs",
                "visibility": "public",
                "stats": {"totalDownloads": 42}
            }"#,
        )
        .unwrap();

        assert_eq!(version.name(), "1.2.0");
    }

    #[test]
    fn display_lists_all_fields() {
        let rendered = sample().to_string();
        assert!(rendered.contains("1.2.0"));
        assert!(rendered.contains("2023-01-01"));
        assert!(rendered.contains("fix bugs"));
    }
}
