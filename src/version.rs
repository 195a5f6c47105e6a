use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::vercmp::compare_versions;
use crate::{Error, Result};

/// A full RPM "version" specifier has 3 different components - Epoch, Version, and Release.
///
/// Epoch overrides all other fields and is generally only used as a last resort - in cases where
/// a change to the versioning scheme or packaging error creates a situation where newer packages
/// might otherwise sort as being older. A missing epoch is treated the same as an epoch of zero.
///
/// Version is the normal version string used by the upstream project. This shouldn't be tweaked
/// by the packager.
///
/// Release indicates firstly the number of times this package has been released - for instance,
/// with custom patches and backports not present in the upstream, but may also indicate other
/// details such as the OS it was built for (fc38, el9) or portions of a git commit hash.
///
/// Tilde (~) and caret (^) are special values used in particular situations. Including ~ in
/// a version is used for denoting pre-releases and will force it to sort as less than a version
/// without a tilde, e.g. 0.5.0~rc1 < 0.5.0. Including ^ in a version is used for denoting snapshots
/// not directly associated with an upstream release and will force it to sort higher, e.g.
/// 0.5.0 < 0.5.0^deadbeef
///
/// Equality and ordering follow [`label_compare`], so `1.0-1` and `0:1_0-1` are equal.
#[derive(Clone, Debug, Default)]
pub struct Evr<'a> {
    epoch: Option<u64>,
    version: Cow<'a, str>,
    release: Cow<'a, str>,
}

impl<'a> Evr<'a> {
    /// Create a new EVR
    pub fn new<T: Into<Cow<'a, str>>>(epoch: Option<u64>, version: T, release: T) -> Evr<'a> {
        Evr {
            epoch,
            version: version.into(),
            release: release.into(),
        }
    }

    /// Parse an `[epoch:]version[-release]` string.
    ///
    /// Parsing never fails. An epoch that isn't a run of ASCII digits is dropped and the EVR is
    /// left without one; an epoch too large for a `u64` saturates at `u64::MAX`. A missing
    /// release is left empty.
    ///
    /// ```
    /// use rpm_vercmp::Evr;
    ///
    /// let evr = Evr::parse("2:1.5-3");
    /// assert_eq!(evr.values(), (Some(2), "1.5", "3"));
    ///
    /// let evr = Evr::parse("1.5");
    /// assert_eq!(evr.values(), (None, "1.5", ""));
    /// ```
    pub fn parse(evr: &'a str) -> Self {
        let (epoch, version, release) = split_evr(evr);
        let epoch = epoch.and_then(|epoch| {
            let parsed = parse_epoch(epoch);
            if parsed.is_none() {
                log::debug!("Ignoring invalid epoch {:?} in {:?}", epoch, evr);
            }
            parsed
        });

        Evr::new(epoch, version, release)
    }

    /// Parse an `[epoch:]version[-release]` string, rejecting malformed input.
    ///
    /// Unlike [`Evr::parse`], this fails on an empty string, on an epoch that isn't an unsigned
    /// 32-bit integer (including an empty one, as in `:1.0`) and on an empty version.
    pub fn try_parse(evr: &'a str) -> Result<Self> {
        if evr.is_empty() {
            return Err(Error::Empty);
        }

        let (epoch, version, release) = split_evr(evr);
        let epoch = epoch
            .map(|epoch| {
                parse_epoch(epoch)
                    .filter(|&epoch| u32::try_from(epoch).is_ok())
                    .ok_or_else(|| Error::InvalidEpoch {
                        epoch: epoch.to_owned(),
                        evr: evr.to_owned(),
                    })
            })
            .transpose()?;

        if version.is_empty() {
            return Err(Error::MissingVersion {
                evr: evr.to_owned(),
            });
        }

        Ok(Evr::new(epoch, version, release))
    }

    /// The epoch value, if one was set
    pub fn epoch(&self) -> Option<u64> {
        self.epoch
    }

    /// The version value
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The release value
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Return the epoch, version and release values as a 3-element tuple
    pub fn values(&self) -> (Option<u64>, &str, &str) {
        (self.epoch(), self.version(), self.release())
    }

    /// Write an EVR string in a normalized form which always includes an epoch
    ///
    /// The standard string representation of an EVR will ignore the epoch if not set.  A package
    /// having no epoch value is equivalent to having an epoch of zero. Sometimes it is useful to
    /// write EVRs in a form such that equivalent values are represented identically, therefore,
    /// this "normalized" form will always include it.
    pub fn as_normalized_form(&self) -> String {
        let mut normalized = format!("{}:{}", self.epoch.unwrap_or(0), self.version);
        if !self.release.is_empty() {
            normalized.push('-');
            normalized.push_str(&self.release);
        }
        normalized
    }

    /// Detach the EVR from the string it was parsed from
    pub fn into_owned(self) -> Evr<'static> {
        Evr {
            epoch: self.epoch,
            version: Cow::Owned(self.version.into_owned()),
            release: Cow::Owned(self.release.into_owned()),
        }
    }

    /// Split an EVR string into its raw epoch, version and release parts as a 3-element tuple
    ///
    /// The epoch is everything before the first `:` and the release everything after the last
    /// `-`. Missing parts are returned as empty strings and the epoch isn't validated.
    pub fn parse_values(evr: &'a str) -> (&'a str, &'a str, &'a str) {
        let (epoch, version, release) = split_evr(evr);
        (epoch.unwrap_or(""), version, release)
    }
}

/// Returns the epoch part only if a `:` was present
fn split_evr(evr: &str) -> (Option<&str>, &str, &str) {
    let (epoch, vr) = match evr.split_once(':') {
        Some((epoch, vr)) => (Some(epoch), vr),
        None => (None, evr),
    };
    let (version, release) = vr.rsplit_once('-').unwrap_or((vr, ""));

    (epoch, version, release)
}

/// `u64::from_str` accepts a leading `+`, so check the digits first. Once the digits are
/// checked, overflow is the only way parsing can fail.
fn parse_epoch(epoch: &str) -> Option<u64> {
    if epoch.is_empty() || !epoch.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(epoch.parse().unwrap_or(u64::MAX))
}

impl<'a> From<(&'a str, &'a str, &'a str)> for Evr<'a> {
    fn from(val: (&'a str, &'a str, &'a str)) -> Self {
        Evr::new(parse_epoch(val.0), val.1, val.2)
    }
}

impl FromStr for Evr<'static> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Evr::try_parse(s).map(Evr::into_owned)
    }
}

impl fmt::Display for Evr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(epoch) = self.epoch {
            write!(f, "{}:", epoch)?;
        }

        write!(f, "{}", self.version)?;

        if !self.release.is_empty() {
            write!(f, "-{}", self.release)?;
        }

        Ok(())
    }
}

impl PartialEq for Evr<'_> {
    fn eq(&self, other: &Self) -> bool {
        label_compare(self, other) == Ordering::Equal
    }
}

impl Eq for Evr<'_> {}

impl PartialOrd for Evr<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evr<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        label_compare(self, other)
    }
}

/// Compare two EVRs the way `rpm.labelCompare` does: epoch first, then version, then release.
///
/// A missing epoch sorts the same as an epoch of zero.
pub fn label_compare(evr1: &Evr<'_>, evr2: &Evr<'_>) -> Ordering {
    let epoch_cmp = evr1.epoch.unwrap_or(0).cmp(&evr2.epoch.unwrap_or(0));
    if epoch_cmp != Ordering::Equal {
        return epoch_cmp;
    }

    let version_cmp = compare_versions(&evr1.version, &evr2.version);
    if version_cmp != Ordering::Equal {
        return version_cmp;
    }

    compare_versions(&evr1.release, &evr2.release)
}

/// Compare two strings as RPM EVR values
pub fn rpm_evr_compare(evr1: &str, evr2: &str) -> Ordering {
    let evr1 = Evr::parse(evr1);
    let evr2 = Evr::parse(evr2);
    evr1.cmp(&evr2)
}
