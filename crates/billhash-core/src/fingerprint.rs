//! Paragraph fingerprints.
//!
//! A fingerprint is the SHA-1 digest of a paragraph's canonical text, encoded
//! as UTF-8. It is only meant to tell accidental changes apart, not to resist
//! deliberate collisions.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha1::{Digest, Sha1};

use crate::document::Element;
use crate::error::BillhashError;
use crate::text::{canonicalize, element_text};

/// A 160-bit paragraph identity, shown as 40 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 20]);

impl Fingerprint {
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Fingerprint(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Fingerprint {
    type Err = BillhashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BillhashError::InvalidFingerprint(s.to_string());
        let bytes = hex::decode(s).map_err(|_| invalid())?;
        let bytes: [u8; 20] = bytes.try_into().map_err(|_| invalid())?;
        Ok(Fingerprint(bytes))
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Hash arbitrary text. Callers canonicalize first when they want the
/// paragraph equivalence; this function does not.
pub fn fingerprint_text(text: &str) -> Fingerprint {
    Fingerprint(Sha1::digest(text.as_bytes()).into())
}

/// Fingerprint of a paragraph element: extract, canonicalize, hash.
pub fn paragraph_fingerprint(paragraph: &Element) -> Fingerprint {
    fingerprint_text(&canonicalize(&element_text(paragraph)))
}

/// Read a newline-separated fingerprint list.
///
/// Surrounding whitespace is ignored, as are blank lines and lines starting
/// with `#`.
pub fn parse_fingerprint_list(text: &str) -> Result<HashSet<Fingerprint>, BillhashError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Fingerprint::from_str)
        .collect()
}
