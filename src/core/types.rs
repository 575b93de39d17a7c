//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`SlotKind`] - The role/type a descriptor names (`int`, `char`, `bool`, `long`)
//! - [`SlotValue`] - A value of some kind
//! - [`Slot`] - A descriptor together with the value its unit wraps
//! - [`Fingerprint`] - Content hash of a composed hierarchy
//!
//! # Validation
//!
//! Slots are parsed from text of the form `kind` or `kind=literal`. Invalid
//! kinds and literals are rejected at construction time.
//!
//! # Examples
//!
//! ```
//! use hierarchy_builder::core::types::{Slot, SlotKind, SlotValue};
//!
//! let slot = Slot::parse("int=42").unwrap();
//! assert_eq!(slot.kind(), SlotKind::Int);
//! assert_eq!(slot.value(), &SlotValue::Int(42));
//!
//! // A bare kind wraps that kind's default value
//! assert_eq!(Slot::parse("bool").unwrap().to_string(), "bool=false");
//!
//! assert!(Slot::parse("float").is_err());
//! assert!(Slot::parse("int=abc").is_err());
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown slot kind '{0}' (expected one of: int, char, bool, long)")]
    UnknownKind(String),

    #[error("invalid {kind} literal '{literal}'")]
    InvalidLiteral { kind: SlotKind, literal: String },
}

/// The kind of value a descriptor names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// 32-bit signed integer
    Int,
    /// Unicode scalar value
    Char,
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Long,
}

impl SlotKind {
    /// Every kind, in declaration order.
    pub const ALL: [SlotKind; 4] = [SlotKind::Int, SlotKind::Char, SlotKind::Bool, SlotKind::Long];

    /// The kind's textual name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Int => "int",
            SlotKind::Char => "char",
            SlotKind::Bool => "bool",
            SlotKind::Long => "long",
        }
    }

    /// The value a bare descriptor of this kind wraps.
    pub fn default_value(&self) -> SlotValue {
        match self {
            SlotKind::Int => SlotValue::Int(0),
            SlotKind::Char => SlotValue::Char('\0'),
            SlotKind::Bool => SlotValue::Bool(false),
            SlotKind::Long => SlotValue::Long(0),
        }
    }

    /// Parse a literal of this kind.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidLiteral` if the literal does not parse.
    pub fn parse_value(&self, literal: &str) -> Result<SlotValue, TypeError> {
        let parsed = match self {
            SlotKind::Int => literal.parse().ok().map(SlotValue::Int),
            SlotKind::Char => parse_char(literal).map(SlotValue::Char),
            SlotKind::Bool => literal.parse().ok().map(SlotValue::Bool),
            SlotKind::Long => literal.parse().ok().map(SlotValue::Long),
        };
        parsed.ok_or_else(|| TypeError::InvalidLiteral {
            kind: *self,
            literal: literal.to_string(),
        })
    }
}

impl FromStr for SlotKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TypeError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a single character, accepting the escapes `char::escape_default` emits.
fn parse_char(literal: &str) -> Option<char> {
    let mut chars = literal.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(c);
    }

    match literal {
        "\\0" => Some('\0'),
        "\\n" => Some('\n'),
        "\\r" => Some('\r'),
        "\\t" => Some('\t'),
        "\\\\" => Some('\\'),
        "\\'" => Some('\''),
        "\\\"" => Some('"'),
        _ => literal
            .strip_prefix("\\u{")
            .and_then(|rest| rest.strip_suffix('}'))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32),
    }
}

/// A value wrapped by a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotValue {
    Int(i32),
    Char(char),
    Bool(bool),
    Long(i64),
}

impl SlotValue {
    /// The kind of this value.
    pub fn kind(&self) -> SlotKind {
        match self {
            SlotValue::Int(_) => SlotKind::Int,
            SlotValue::Char(_) => SlotKind::Char,
            SlotValue::Bool(_) => SlotKind::Bool,
            SlotValue::Long(_) => SlotKind::Long,
        }
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Int(v) => write!(f, "{}", v),
            SlotValue::Char(c) => write!(f, "{}", c.escape_default()),
            SlotValue::Bool(b) => write!(f, "{}", b),
            SlotValue::Long(v) => write!(f, "{}", v),
        }
    }
}

/// A descriptor and the value its unit wraps.
///
/// Displays as `kind=value` and parses back from the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slot {
    value: SlotValue,
}

impl Slot {
    /// Create a slot wrapping `value`.
    pub fn new(value: SlotValue) -> Self {
        Self { value }
    }

    /// Create a slot wrapping the default value of `kind`.
    pub fn of_kind(kind: SlotKind) -> Self {
        Self::new(kind.default_value())
    }

    /// Parse `kind` or `kind=literal`.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::UnknownKind` or `TypeError::InvalidLiteral`.
    pub fn parse(text: &str) -> Result<Self, TypeError> {
        match text.split_once('=') {
            Some((kind, literal)) => {
                let kind: SlotKind = kind.parse()?;
                Ok(Self::new(kind.parse_value(literal)?))
            }
            None => Ok(Self::of_kind(text.parse()?)),
        }
    }

    /// The descriptor's kind.
    pub fn kind(&self) -> SlotKind {
        self.value.kind()
    }

    /// The wrapped value.
    pub fn value(&self) -> &SlotValue {
        &self.value
    }
}

impl FromStr for Slot {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slot {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.to_string()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind(), self.value)
    }
}

/// A content hash of a hierarchy.
///
/// Computed from `(depth, text)` entries in traversal order, so two
/// hierarchies with the same shape and values share a fingerprint. Each
/// entry is hashed as fixed-width depth and length fields followed by the
/// text, so no text can imitate an entry boundary.
///
/// # Example
///
/// ```
/// use hierarchy_builder::core::types::Fingerprint;
///
/// let fp = Fingerprint::compute([(0, "int=0"), (1, "char=a")]);
/// let fp2 = Fingerprint::compute([(0, "int=0"), (1, "char=a")]);
/// assert_eq!(fp, fp2);
///
/// // Depth is part of the hash
/// let moved = Fingerprint::compute([(0, "int=0"), (0, "char=a")]);
/// assert_ne!(fp, moved);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute a fingerprint from `(depth, text)` entries.
    pub fn compute<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let mut hasher = Sha256::new();
        for (depth, text) in entries {
            let text = text.as_ref().as_bytes();
            hasher.update((depth as u64).to_le_bytes());
            hasher.update((text.len() as u64).to_le_bytes());
            hasher.update(text);
        }
        Self(hex::encode(hasher.finalize()))
    }

    /// Get the fingerprint as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get an abbreviated form of the fingerprint.
    pub fn short(&self, len: usize) -> &str {
        let end = len.min(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod slot_kind {
        use super::*;

        #[test]
        fn parses_every_kind() {
            for kind in SlotKind::ALL {
                assert_eq!(kind.as_str().parse::<SlotKind>(), Ok(kind));
            }
        }

        #[test]
        fn rejects_unknown() {
            assert_eq!(
                "Int".parse::<SlotKind>(),
                Err(TypeError::UnknownKind("Int".into()))
            );
            assert!("".parse::<SlotKind>().is_err());
        }

        #[test]
        fn default_values_match_kind() {
            for kind in SlotKind::ALL {
                assert_eq!(kind.default_value().kind(), kind);
            }
        }

        #[test]
        fn int_is_32_bit() {
            assert!(SlotKind::Int.parse_value("2147483647").is_ok());
            assert!(SlotKind::Int.parse_value("2147483648").is_err());
            assert!(SlotKind::Long.parse_value("2147483648").is_ok());
        }
    }

    mod slot {
        use super::*;

        #[test]
        fn bare_kind_uses_default() {
            assert_eq!(Slot::parse("int").unwrap().value(), &SlotValue::Int(0));
            assert_eq!(Slot::parse("long").unwrap().value(), &SlotValue::Long(0));
            assert_eq!(
                Slot::parse("char").unwrap().value(),
                &SlotValue::Char('\0')
            );
        }

        #[test]
        fn literals() {
            assert_eq!(Slot::parse("int=-3").unwrap().value(), &SlotValue::Int(-3));
            assert_eq!(
                Slot::parse("bool=true").unwrap().value(),
                &SlotValue::Bool(true)
            );
            assert_eq!(
                Slot::parse("char=x").unwrap().value(),
                &SlotValue::Char('x')
            );
            assert_eq!(
                Slot::parse("char==").unwrap().value(),
                &SlotValue::Char('=')
            );
        }

        #[test]
        fn invalid_literal_names_kind() {
            let err = Slot::parse("bool=yes").unwrap_err();
            assert_eq!(
                err,
                TypeError::InvalidLiteral {
                    kind: SlotKind::Bool,
                    literal: "yes".into()
                }
            );
            assert_eq!(err.to_string(), "invalid bool literal 'yes'");
        }

        #[test]
        fn char_escapes_round_trip() {
            for c in ['\0', '\n', '\t', '\\', '\'', '"', 'é', ' ', 'z'] {
                let slot = Slot::new(SlotValue::Char(c));
                let text = slot.to_string();
                assert_eq!(Slot::parse(&text).unwrap(), slot, "text was {}", text);
            }
        }

        #[test]
        fn default_char_display() {
            assert_eq!(Slot::of_kind(SlotKind::Char).to_string(), "char=\\u{0}");
        }

        #[test]
        fn multi_char_literal_rejected() {
            assert!(Slot::parse("char=ab").is_err());
            assert!(Slot::parse("char=").is_err());
            assert!(Slot::parse("char=\\u{110000}").is_err());
        }

        #[test]
        fn serde_as_string() {
            let slot = Slot::parse("long=-9").unwrap();
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, "\"long=-9\"");
            let parsed: Slot = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, slot);
        }

        #[test]
        fn serde_rejects_invalid() {
            assert!(serde_json::from_str::<Slot>("\"nope\"").is_err());
        }
    }

    mod fingerprint {
        use super::*;

        #[test]
        fn deterministic() {
            let a = Fingerprint::compute([(0, "x"), (1, "y")]);
            let b = Fingerprint::compute(vec![(0, String::from("x")), (1, String::from("y"))]);
            assert_eq!(a, b);
            assert_eq!(a.as_str().len(), 64);
        }

        #[test]
        fn order_sensitive() {
            let a = Fingerprint::compute([(0, "x"), (0, "y")]);
            let b = Fingerprint::compute([(0, "y"), (0, "x")]);
            assert_ne!(a, b);
        }

        #[test]
        fn text_cannot_forge_entry_boundary() {
            let joined = Fingerprint::compute([(2, "x\n2\0y")]);
            let split = Fingerprint::compute([(2, "x"), (2, "y")]);
            assert_ne!(joined, split);

            let joined = Fingerprint::compute([(0, "ab")]);
            let split = Fingerprint::compute([(0, "a"), (0, "b")]);
            assert_ne!(joined, split);
        }

        #[test]
        fn short_form() {
            let fp = Fingerprint::compute(std::iter::empty::<(usize, &str)>());
            assert_eq!(fp.short(8).len(), 8);
            assert_eq!(fp.short(100), fp.as_str());
        }
    }
}
