//! # rpm-vercmp
//!
//! A pure rust implementation of the RPM version comparison algorithm, with
//! no dependency on librpm.
//!
//! Version identifiers of the form `[epoch:]version[-release]` are parsed into an
//! [`Evr`] and ordered the same way `rpm` orders packages when deciding upgrades.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use rpm_vercmp::{Evr, compare_versions, label_compare};
//!
//! let installed = Evr::parse("1.5-3");
//! let candidate = Evr::parse("2:1.5-3");
//!
//! // an explicit epoch beats any version difference
//! assert_eq!(label_compare(&candidate, &installed), Ordering::Greater);
//! assert!(candidate > installed);
//!
//! // tilde marks a pre-release
//! assert_eq!(compare_versions("1.0~rc1", "1.0"), Ordering::Less);
//!
//! let mut evrs = vec![Evr::parse("1.0-2"), Evr::parse("1.0~rc1-1"), Evr::parse("0.9")];
//! evrs.sort();
//! assert_eq!(evrs[0].to_string(), "0.9");
//! ```

#![allow(unknown_lints, clippy::uninlined_format_args)]

mod errors;
pub use crate::errors::*;

mod vercmp;
pub use crate::vercmp::compare_versions;

mod version;
pub use crate::version::*;
