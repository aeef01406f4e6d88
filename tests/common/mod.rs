//! Shared integration test fixtures for orthoscan.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{sample_catalog, SAMPLE_DATASET};
//! ```

#![allow(dead_code)]

use orthoscan::OrthographyCatalog;

/// A small dataset covering inheritance, a missing default and every support level.
///
/// Against [`SAMPLE_PROBE`]:
/// - English and English (South Africa): full
/// - French, German (Switzerland): basic
/// - German: minimal
/// - Polish, both Serbian entries: none
pub const SAMPLE_DATASET: &str = r#"{
    "en": {
        "DFLT": {
            "dflt": {
                "name": "English",
                "unicodes": {"base": ["a", "b", "c"], "punctuation": [".", ","]}
            },
            "ZA": {"name": "English (South Africa)"}
        }
    },
    "de": {
        "DFLT": {
            "dflt": {
                "name": "German",
                "unicodes": {
                    "base": ["a", "b", "c", "ä"],
                    "optional": ["ẞ", "a"],
                    "punctuation": [".", ",", "„", "“"]
                }
            },
            "CH": {
                "name": "German (Switzerland)",
                "unicodes": {"base": ["a", "b", "c", "ä"], "punctuation": [".", ",", "«", "»"]}
            }
        }
    },
    "fr": {
        "DFLT": {
            "dflt": {
                "name": "French",
                "unicodes": {
                    "base": [97, 98, 99, 233],
                    "optional": [339],
                    "punctuation": [".", ",", "«", "»"]
                }
            }
        }
    },
    "pl": {
        "DFLT": {
            "dflt": {
                "name": "Polish",
                "unicodes": {"base": ["a", "b", "c", "ą"], "punctuation": [".", ","]}
            }
        }
    },
    "sr": {
        "Cyrl": {
            "dflt": {
                "name": "Serbian (Cyrillic)",
                "unicodes": {"base": ["а", "б", "в"], "punctuation": [".", ","]}
            }
        },
        "Latn": {
            "RS": {
                "name": "Serbian (Latin, Serbia)",
                "unicodes": {"base": ["a", "b", "c", "đ"]}
            }
        }
    }
}"#;

/// Characters of an imaginary Western European font.
pub const SAMPLE_PROBE: &str = "abcäé.,«»";

pub fn sample_catalog() -> OrthographyCatalog {
    OrthographyCatalog::from_json_str(SAMPLE_DATASET).expect("sample dataset should parse")
}
