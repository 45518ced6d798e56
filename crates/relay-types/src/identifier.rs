//! Identifier shapes and validation.
//!
//! A candidate is accepted when it matches one of two shapes, anchored
//! over the whole string:
//!
//! - [`IdentifierShape::Uuid`]: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`,
//!   36 characters, hex digits in either case.
//! - [`IdentifierShape::LongHex`]: 64 or more hex digits with no
//!   separators and no upper bound.
//!
//! Accepted values are kept exactly as submitted. Case is never
//! normalized.

use core::fmt;
use core::str::FromStr;

/// Length of a hyphenated UUID-like identifier.
pub const UUID_LEN: usize = 36;

/// Minimum length of a bare hexadecimal identifier.
pub const MIN_HEX_LEN: usize = 64;

/// Zero-indexed byte offsets of the hyphens in a UUID-like identifier.
const UUID_HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// The shape an accepted identifier matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierShape {
    /// Hyphenated 8-4-4-4-12 hex groups.
    Uuid,
    /// 64 or more hex digits.
    LongHex,
}

impl IdentifierShape {
    /// Classify a candidate, returning `None` when neither shape matches.
    pub fn classify(candidate: &str) -> Option<Self> {
        if is_uuid_like(candidate) {
            Some(Self::Uuid)
        } else if is_long_hex(candidate) {
            Some(Self::LongHex)
        } else {
            None
        }
    }
}

impl fmt::Display for IdentifierShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid => f.write_str("uuid"),
            Self::LongHex => f.write_str("hex"),
        }
    }
}

/// Returns `true` if `candidate` is an acceptable identifier.
pub fn is_valid(candidate: &str) -> bool {
    IdentifierShape::classify(candidate).is_some()
}

fn is_uuid_like(candidate: &str) -> bool {
    candidate.len() == UUID_LEN
        && candidate.bytes().enumerate().all(|(offset, byte)| {
            if UUID_HYPHENS.contains(&offset) {
                byte == b'-'
            } else {
                byte.is_ascii_hexdigit()
            }
        })
}

fn is_long_hex(candidate: &str) -> bool {
    candidate.len() >= MIN_HEX_LEN && candidate.bytes().all(|byte| byte.is_ascii_hexdigit())
}

/// Errors produced when validating an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The candidate matched neither accepted shape.
    #[error("invalid identifier {value:?} (length: {length})")]
    Invalid {
        /// The rejected value, as submitted.
        value: String,
        /// Length of the rejected value in characters.
        length: usize,
    },
}

/// A validated identifier.
///
/// Can only be built through [`Identifier::parse`] (or the equivalent
/// `FromStr`/`TryFrom` impls), so holding one proves the value matched an
/// accepted shape when it was created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    value: String,
    shape: IdentifierShape,
}

impl Identifier {
    /// Validate `candidate` and wrap it without altering its contents.
    pub fn parse(candidate: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = candidate.into();
        match IdentifierShape::classify(&value) {
            Some(shape) => Ok(Self { value, shape }),
            None => {
                let length = value.chars().count();
                Err(IdentifierError::Invalid { value, length })
            }
        }
    }

    /// The identifier exactly as it was submitted.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Which shape the identifier matched.
    pub const fn shape(&self) -> IdentifierShape {
        self.shape
    }

    /// Human-readable label shown next to the identifier on the status page.
    ///
    /// `(UUID)` for 36-character identifiers, `(Hex, N chars)` otherwise.
    pub fn label(&self) -> String {
        match self.shape {
            IdentifierShape::Uuid => String::from("(UUID)"),
            IdentifierShape::LongHex => format!("(Hex, {} chars)", self.value.len()),
        }
    }

    /// Consume the identifier and return the raw string.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.value
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE_UUID: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn hex_of_len(len: usize) -> String {
        "0123456789abcdef".chars().cycle().take(len).collect()
    }

    #[test]
    fn accepts_lowercase_uuid() {
        assert_eq!(IdentifierShape::classify(SAMPLE_UUID), Some(IdentifierShape::Uuid));
    }

    #[test]
    fn accepts_uppercase_and_mixed_case_uuid() {
        assert!(is_valid("123E4567-E89B-12D3-A456-426614174000"));
        assert!(is_valid("123e4567-E89b-12D3-a456-42661417400F"));
    }

    #[test]
    fn accepts_generated_uuids() {
        for _ in 0..32 {
            let id = uuid::Uuid::new_v4();
            assert!(is_valid(&id.hyphenated().to_string()));
            assert!(is_valid(&id.hyphenated().to_string().to_uppercase()));
        }
    }

    #[test]
    fn rejects_uuid_with_misplaced_hyphens() {
        assert!(!is_valid("123e45670-e89b-12d3-a456-42661417400"));
        assert!(!is_valid("123e4567-e89b-12d3-a456-4266-1417400"));
    }

    #[test]
    fn rejects_uuid_with_non_hex_digit() {
        assert!(!is_valid("123e4567-e89b-12d3-a456-42661417400g"));
        assert!(!is_valid("z23e4567-e89b-12d3-a456-426614174000"));
    }

    #[test]
    fn rejects_near_uuid_lengths() {
        assert!(!is_valid("123e4567-e89b-12d3-a456-42661417400"));
        assert!(!is_valid("123e4567-e89b-12d3-a456-4266141740000"));
    }

    #[test]
    fn rejects_other_uuid_encodings() {
        assert!(!is_valid("123e4567e89b12d3a456426614174000"));
        assert!(!is_valid("{123e4567-e89b-12d3-a456-426614174000}"));
        assert!(!is_valid("urn:uuid:123e4567-e89b-12d3-a456-426614174000"));
    }

    #[test]
    fn rejects_uuid_with_surrounding_text() {
        assert!(!is_valid(&format!(" {SAMPLE_UUID}")));
        assert!(!is_valid(&format!("{SAMPLE_UUID}\n")));
        assert!(!is_valid(&format!("x{SAMPLE_UUID}")));
    }

    #[test]
    fn long_hex_boundary_is_64() {
        assert!(!is_valid(&hex_of_len(63)));
        assert_eq!(
            IdentifierShape::classify(&hex_of_len(64)),
            Some(IdentifierShape::LongHex)
        );
        assert!(is_valid(&hex_of_len(65)));
    }

    #[test]
    fn long_hex_has_no_upper_bound() {
        assert!(is_valid(&hex_of_len(4096)));
    }

    #[test]
    fn long_hex_accepts_any_case() {
        assert!(is_valid(&hex_of_len(64).to_uppercase()));
        let mixed: String = hex_of_len(64)
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        assert!(is_valid(&mixed));
    }

    #[test]
    fn long_hex_rejects_hyphens_and_non_hex() {
        let mut with_hyphen = hex_of_len(70);
        with_hyphen.insert(10, '-');
        assert!(!is_valid(&with_hyphen));

        let mut with_g = hex_of_len(64);
        with_g.push('g');
        assert!(!is_valid(&with_g));
    }

    #[test]
    fn rejects_short_and_empty_strings() {
        assert!(!is_valid(""));
        assert!(!is_valid("abc"));
        assert!(!is_valid("deadbeef"));
    }

    #[test]
    fn rejects_non_ascii_even_at_valid_lengths() {
        assert!(!is_valid(&"é".repeat(36)));
        assert!(!is_valid(&"\u{FF10}".repeat(64)));
    }

    #[test]
    fn parse_preserves_case() {
        let raw = "ABCDEF01-2345-6789-abcd-EF0123456789";
        let id = Identifier::parse(raw).unwrap();
        assert_eq!(id.as_str(), raw);
        assert_eq!(id.to_string(), raw);
        assert_eq!(id.shape(), IdentifierShape::Uuid);
    }

    #[test]
    fn parse_error_reports_value_and_char_length() {
        let err = Identifier::parse("abc").unwrap_err();
        assert_eq!(
            err,
            IdentifierError::Invalid {
                value: String::from("abc"),
                length: 3,
            }
        );

        let err = Identifier::parse("héllo").unwrap_err();
        assert!(matches!(err, IdentifierError::Invalid { length: 5, .. }));
        assert_eq!(err.to_string(), "invalid identifier \"héllo\" (length: 5)");
    }

    #[test]
    fn label_for_uuid() {
        let id: Identifier = SAMPLE_UUID.parse().unwrap();
        assert_eq!(id.label(), "(UUID)");
    }

    #[test]
    fn label_for_long_hex_reports_length() {
        let id = Identifier::try_from(hex_of_len(64)).unwrap();
        assert_eq!(id.label(), "(Hex, 64 chars)");

        let id = Identifier::try_from(hex_of_len(100)).unwrap();
        assert_eq!(id.label(), "(Hex, 100 chars)");
    }

    #[test]
    fn into_inner_returns_original_string() {
        let raw = hex_of_len(80).to_uppercase();
        let id = Identifier::parse(raw.clone()).unwrap();
        assert_eq!(id.into_inner(), raw);
    }
}
