//! # Wordclock
//!
//! Wordclock is a small, deterministic engine that renders wall-clock time as natural-language
//! phrases such as "twenty past nine", "noon" or "quarter to eleven | monday the fifth".
//!
//! ## Features
//! - Rounds the time to a configurable number of minutes ("fuzziness"), carrying into the next
//!   hour and the next calendar day when needed.
//! - Two phrasing styles: relative ("ten to nine") and compact ("eight fifty").
//! - Exact midnight and noon literals, plus separate words for midnight and noon inside sentences.
//! - Optional date segment, with or without the weekday.
//! - Localizable through validated vocabulary tables; malformed locale data is rejected up front.
//! - Finds the next minute at which the phrase changes, so displays can redraw only when needed.
//! - Works on the local wall clock of any `chrono` date-time without converting time zones.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wordclock::{ClockFormatter, FormatOptions, Fuzziness, PhraseStyle};
//!
//! let formatter = ClockFormatter::english().expect("English vocabulary is valid");
//!
//! let options = FormatOptions::builder()
//!     .style(PhraseStyle::PastTo)
//!     .fuzziness(Fuzziness::new(5).unwrap())
//!     .show_date(true)
//!     .show_weekday(true)
//!     .build();
//!
//! // 23:58 on Saturday the sixth already reads as Sunday's midnight.
//! let time = NaiveDate::from_ymd_opt(2025, 9, 6)
//!     .unwrap()
//!     .and_hms_opt(23, 58, 0)
//!     .unwrap();
//!
//! assert_eq!(
//!     formatter.format_string(time, &options).unwrap(),
//!     "midnight | sunday the seventh"
//! );
//! ```
//!
//! ## Vocabulary
//!
//! A [`Vocabulary`] holds every word the formatter may use:
//!
//! | Table              | Entries | Placeholder     | Remarks                                        |
//! | ------------------ | ------- | --------------- | ---------------------------------------------- |
//! | Hour names         | 24      |                 | 0 is midnight, 12 is noon                      |
//! | Minute templates   | 61 each | one hour `%s`   | One table per [`PhraseStyle`], 0 and 60 on the hour |
//! | Sentence words     | 2 each  |                 | Midnight and noon inside a sentence            |
//! | Exact literals     | 2       |                 | Used at exactly 00:00 and 12:00                |
//! | Weekday templates  | 7       | one ordinal `%s`| Sunday first                                   |
//! | Date template      | 1       | one ordinal `%s`|                                                |
//! | Ordinals           | 31      |                 | "first" to "thirty-first"                      |
//!
//! Tables come from a [`Language`] implementation or, with the `serde` feature, from
//! deserialized [`VocabularyData`].

pub mod errors;
pub mod formatter;
pub mod iterator;
pub mod options;
pub mod rounding;
pub mod vocabulary;

pub use errors::{ClockError, ErrorKind};
pub use formatter::{ClockFormatter, Presentation};
pub use iterator::TransitionIter;
pub use options::{FormatOptions, FormatOptionsBuilder, Fuzziness, PhraseStyle, DEFAULT_DIVIDER};
pub use rounding::{RoundedInstant, WallClock};
pub use vocabulary::{English, Language, Meridiem, StyleData, Vocabulary, VocabularyData};
