//! The eight format families a component code can take.
//!
//! A component code is 2–3 letters, 3–4 digits, optionally extended with a
//! single-letter sub-designator and a slash-delimited numeric suffix. Each
//! combination is its own family so a document's dominant convention can be
//! learned and enforced.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Confidence assigned to candidates in a base format family.
pub const BASE_CONFIDENCE: f32 = 0.90;

/// Confidence assigned to candidates in an extended format family.
///
/// Higher than [`BASE_CONFIDENCE`]: the optional suffix is rare in
/// accidental look-alike tokens, so a suffixed match carries lower
/// false-positive risk.
pub const EXTENDED_CONFIDENCE: f32 = 0.95;

/// One of the eight letter-count/digit-count/suffix families.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FormatTag {
    #[serde(rename = "2L3D")]
    TwoLetterThreeDigit,
    #[serde(rename = "2L3D_EXT")]
    TwoLetterThreeDigitExt,
    #[serde(rename = "2L4D")]
    TwoLetterFourDigit,
    #[serde(rename = "2L4D_EXT")]
    TwoLetterFourDigitExt,
    #[serde(rename = "3L3D")]
    ThreeLetterThreeDigit,
    #[serde(rename = "3L3D_EXT")]
    ThreeLetterThreeDigitExt,
    #[serde(rename = "3L4D")]
    ThreeLetterFourDigit,
    #[serde(rename = "3L4D_EXT")]
    ThreeLetterFourDigitExt,
}

impl FormatTag {
    /// All tags in declaration order. Iteration over this array (rather
    /// than a hash map) keeps dominant-format selection deterministic.
    pub const ALL: [FormatTag; 8] = [
        FormatTag::TwoLetterThreeDigit,
        FormatTag::TwoLetterThreeDigitExt,
        FormatTag::TwoLetterFourDigit,
        FormatTag::TwoLetterFourDigitExt,
        FormatTag::ThreeLetterThreeDigit,
        FormatTag::ThreeLetterThreeDigitExt,
        FormatTag::ThreeLetterFourDigit,
        FormatTag::ThreeLetterFourDigitExt,
    ];

    /// Short wire name, matching the serde representation.
    pub fn wire_name(self) -> &'static str {
        match self {
            FormatTag::TwoLetterThreeDigit => "2L3D",
            FormatTag::TwoLetterThreeDigitExt => "2L3D_EXT",
            FormatTag::TwoLetterFourDigit => "2L4D",
            FormatTag::TwoLetterFourDigitExt => "2L4D_EXT",
            FormatTag::ThreeLetterThreeDigit => "3L3D",
            FormatTag::ThreeLetterThreeDigitExt => "3L3D_EXT",
            FormatTag::ThreeLetterFourDigit => "3L4D",
            FormatTag::ThreeLetterFourDigitExt => "3L4D_EXT",
        }
    }

    /// True for the suffixed (extended) families.
    pub fn is_extended(self) -> bool {
        matches!(
            self,
            FormatTag::TwoLetterThreeDigitExt
                | FormatTag::TwoLetterFourDigitExt
                | FormatTag::ThreeLetterThreeDigitExt
                | FormatTag::ThreeLetterFourDigitExt
        )
    }

    /// The base tag of this tag's base/extended pair.
    pub fn base(self) -> FormatTag {
        match self {
            FormatTag::TwoLetterThreeDigitExt => FormatTag::TwoLetterThreeDigit,
            FormatTag::TwoLetterFourDigitExt => FormatTag::TwoLetterFourDigit,
            FormatTag::ThreeLetterThreeDigitExt => FormatTag::ThreeLetterThreeDigit,
            FormatTag::ThreeLetterFourDigitExt => FormatTag::ThreeLetterFourDigit,
            base => base,
        }
    }

    /// True when both tags belong to the same base/extended pair.
    pub fn same_family(self, other: FormatTag) -> bool {
        self.base() == other.base()
    }

    /// Detection confidence for candidates in this family.
    pub fn confidence(self) -> f32 {
        if self.is_extended() {
            EXTENDED_CONFIDENCE
        } else {
            BASE_CONFIDENCE
        }
    }
}

/// The eight anchored family patterns, in [`FormatTag::ALL`] order.
static FORMAT_PATTERNS: Lazy<[(FormatTag, Regex); 8]> = Lazy::new(|| {
    let pat = |p: &str| Regex::new(p).expect("format family pattern compiles");
    [
        (FormatTag::TwoLetterThreeDigit, pat(r"^[A-Z]{2}\d{3}$")),
        (
            FormatTag::TwoLetterThreeDigitExt,
            pat(r"^[A-Z]{2}\d{3}[A-Z]/\d{1,3}$"),
        ),
        (FormatTag::TwoLetterFourDigit, pat(r"^[A-Z]{2}\d{4}$")),
        (
            FormatTag::TwoLetterFourDigitExt,
            pat(r"^[A-Z]{2}\d{4}[A-Z]/\d{1,3}$"),
        ),
        (FormatTag::ThreeLetterThreeDigit, pat(r"^[A-Z]{3}\d{3}$")),
        (
            FormatTag::ThreeLetterThreeDigitExt,
            pat(r"^[A-Z]{3}\d{3}[A-Z]/\d{1,3}$"),
        ),
        (FormatTag::ThreeLetterFourDigit, pat(r"^[A-Z]{3}\d{4}$")),
        (
            FormatTag::ThreeLetterFourDigitExt,
            pat(r"^[A-Z]{3}\d{4}[A-Z]/\d{1,3}$"),
        ),
    ]
});

/// Classifies an upper-cased code into its format family.
///
/// The family patterns are anchored and mutually exclusive, so any code the
/// comprehensive scan pattern accepts lands in exactly one family. `None`
/// only for strings that never came out of that scan.
pub fn classify(normalized_code: &str) -> Option<FormatTag> {
    FORMAT_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(normalized_code))
        .map(|(tag, _)| *tag)
}
