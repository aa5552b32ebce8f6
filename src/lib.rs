//! Client library for [Hangar](https://hangar.papermc.io), PaperMC's plugin
//! repository.
//!
//! The crate answers one question: given a project's author and slug plus
//! optional release filters, what is the newest published version?
//! [`HangarClient::find_latest_version`] returns the newest matching
//! [`HangarVersion`], or `None` when no version matches or the request fails.
//!
//! # Modules
//!
//! - [`client`]: the lookup client and its filter type
//! - [`model`]: the version value type
//! - [`error`]: error types for failed lookups
//!
//! # Example
//!
//! ```no_run
//! use hangar_version::{HangarClient, VersionFilter};
//!
//! let client = HangarClient::default();
//! let filter = VersionFilter::new().channel("Release").platform("velocity");
//! if let Some(version) = client.find_latest_version("oskarzyg", "test", &filter) {
//!     println!("latest release: {}", version.name());
//! }
//! ```

pub mod client;
pub mod error;
pub mod model;

pub use client::{HANGAR_PAPER, HANGAR_PAPER_DEV, HangarClient, VersionFilter};
pub use error::HangarError;
pub use model::HangarVersion;
