//! Derivation path parsing and hierarchical key derivation
//!
//! Paths are parsed into a structured segment list before any key material
//! is touched, so a malformed path is rejected up front rather than midway
//! through a derivation chain.

use crate::{Error, Result};
use bip32::{ChildNumber, XPrv};
use std::fmt;
use std::str::FromStr;

/// Hardened derivation offset (2^31)
const HARDENED_OFFSET: u32 = 1 << 31;

/// One step of a derivation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegment {
    /// Child index, below 2^31
    pub index: u32,
    /// Whether the child is derived hardened
    pub hardened: bool,
}

impl PathSegment {
    fn child_number(self) -> Result<ChildNumber> {
        ChildNumber::new(self.index, self.hardened).map_err(|e| Error::PathParse(e.to_string()))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)?;
        if self.hardened {
            write!(f, "'")?;
        }
        Ok(())
    }
}

/// A parsed derivation path.
///
/// Grammar: an optional leading `m` root marker followed by `/`-separated
/// segments, each a run of decimal digits with an optional hardened marker
/// suffix (`'`, `h`, or `H`). A path without the root marker is relative
/// and may be applied to an intermediate key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivationPath {
    segments: Vec<PathSegment>,
}

impl DerivationPath {
    /// Segments in derivation order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of derivation steps.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no steps (the bare root marker).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render the path in key-origin notation: `h` hardened markers and no
    /// `m/` prefix, the form Specter-Desktop expects (`48h/0h/0h/2h`).
    pub fn to_key_origin(&self) -> String {
        self.segments
            .iter()
            .map(|seg| {
                if seg.hardened {
                    format!("{}h", seg.index)
                } else {
                    seg.index.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('/').peekable();
        if parts.peek() == Some(&"m") {
            parts.next();
        }

        let segments = parts.map(parse_segment).collect::<Result<Vec<_>>>()?;
        Ok(Self { segments })
    }
}

fn parse_segment(part: &str) -> Result<PathSegment> {
    if part.is_empty() {
        return Err(Error::PathParse("empty path segment".to_string()));
    }

    let (digits, hardened) = match part
        .strip_suffix('\'')
        .or_else(|| part.strip_suffix('h'))
        .or_else(|| part.strip_suffix('H'))
    {
        Some(digits) => (digits, true),
        None => (part, false),
    };

    let index: u32 = digits
        .parse()
        .map_err(|e| Error::PathParse(format!("invalid index \"{digits}\": {e}")))?;
    if index >= HARDENED_OFFSET {
        return Err(Error::PathParse(format!(
            "index {index} must be below 2^31"
        )));
    }

    Ok(PathSegment { index, hardened })
}

/// Create the BIP32 master key from a seed.
pub fn master_key(seed: &[u8]) -> Result<XPrv> {
    XPrv::new(seed).map_err(|e| Error::InvalidSeed(e.to_string()))
}

/// Derive the child key at `path`, starting from `master`.
///
/// Hardened segments derive child `index + 2^31`; non-hardened segments
/// derive the parsed index itself. When a step fails, the partially
/// derived key is dropped before the error returns, which scrubs its
/// private scalar.
pub fn derive_path(master: &XPrv, path: &DerivationPath) -> Result<XPrv> {
    let mut key = master.clone();
    for segment in path.segments() {
        let child = segment.child_number()?;
        key = key
            .derive_child(child)
            .map_err(|e| Error::Derivation(format!("at segment {segment}: {e}")))?;
    }
    Ok(key)
}
