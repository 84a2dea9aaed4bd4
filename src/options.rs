//! Per-call formatting options.
//!
//! Options are plain values handed to every [`ClockFormatter::format`] call, so one
//! formatter can serve many callers with different settings at once. Build them with
//! [`FormatOptions::builder`]:
//!
//! ```rust
//! use wordclock::options::{FormatOptions, Fuzziness, PhraseStyle};
//!
//! let options = FormatOptions::builder()
//!     .style(PhraseStyle::Compact)
//!     .fuzziness(Fuzziness::new(10).unwrap())
//!     .show_date(true)
//!     .build();
//!
//! assert_eq!(options.divider(), " | ");
//! ```
//!
//! [`ClockFormatter::format`]: crate::ClockFormatter::format

use std::str::FromStr;

use derive_builder::Builder;
use strum::{Display, EnumIs, EnumIter, EnumString, IntoStaticStr};

use crate::errors::ClockError;

/// Separator placed between the time and date segments when none is configured.
pub const DEFAULT_DIVIDER: &str = " | ";

/// The sentence-construction convention used to render a time.
///
/// Each variant owns a fixed-shape minute template table in the vocabulary, so the set is
/// closed: a settings key naming anything else is rejected rather than guessed at.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIs,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PhraseStyle {
    /// Relative phrasing: "ten past nine", "half past nine", "quarter to ten".
    #[default]
    #[strum(to_string = "past-to", serialize = "a")]
    PastTo,
    /// Additive phrasing: "nine ten", "nine forty-five".
    #[strum(to_string = "compact", serialize = "b")]
    Compact,
}

impl PhraseStyle {
    /// Resolve a settings key such as `"past-to"` or `"compact"`.
    pub fn from_key(key: &str) -> Result<Self, ClockError> {
        PhraseStyle::from_str(key.trim())
            .map_err(|_| ClockError::UnknownPhraseStyle(key.to_string()))
    }
}

/// Rounding granularity, in whole minutes, applied to the displayed time.
///
/// Always positive. Values larger than a day are allowed; the rounding grid stays anchored
/// at midnight of the timestamp's own day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "i64"))]
pub struct Fuzziness(u32);

impl Fuzziness {
    /// No rounding at all, every minute gets its own phrase.
    pub const EXACT: Fuzziness = Fuzziness(1);

    pub fn new(minutes: i64) -> Result<Self, ClockError> {
        if minutes <= 0 {
            return Err(ClockError::InvalidFuzziness(format!(
                "{minutes} minutes, must be positive"
            )));
        }
        u32::try_from(minutes)
            .map(Fuzziness)
            .map_err(|_| ClockError::InvalidFuzziness(format!("{minutes} minutes is too large")))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl Default for Fuzziness {
    fn default() -> Self {
        Fuzziness(5)
    }
}

impl std::fmt::Display for Fuzziness {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} min", self.0)
    }
}

impl TryFrom<i64> for Fuzziness {
    type Error = ClockError;

    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        Fuzziness::new(minutes)
    }
}

impl TryFrom<u32> for Fuzziness {
    type Error = ClockError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Fuzziness::new(i64::from(minutes))
    }
}

// Deserialization goes through here, so both `5` and `5.0` load.
impl TryFrom<f64> for Fuzziness {
    type Error = ClockError;

    fn try_from(minutes: f64) -> Result<Self, Self::Error> {
        if !minutes.is_finite() {
            return Err(ClockError::InvalidFuzziness(format!(
                "{minutes} is not a finite number"
            )));
        }
        if minutes.fract() != 0.0 {
            return Err(ClockError::InvalidFuzziness(format!(
                "{minutes} is not a whole number of minutes"
            )));
        }
        if minutes > f64::from(u32::MAX) {
            return Err(ClockError::InvalidFuzziness(format!(
                "{minutes} minutes is too large"
            )));
        }
        Fuzziness::new(minutes as i64)
    }
}

impl From<Fuzziness> for i64 {
    fn from(fuzziness: Fuzziness) -> Self {
        i64::from(fuzziness.0)
    }
}

/// Options for a single formatting call.
///
/// In order to build custom options use [`FormatOptions::builder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, build_fn(skip), pattern = "owned")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Which phrasing convention to use.
    pub style: PhraseStyle,
    /// Rounding granularity in minutes.
    pub fuzziness: Fuzziness,
    /// Append the date segment after the divider.
    pub show_date: bool,
    /// Include the weekday in the date segment. Has no effect unless `show_date` is set.
    pub show_weekday: bool,
    /// Separator between time and date, [`DEFAULT_DIVIDER`] when unset.
    #[builder(setter(into, strip_option))]
    pub divider: Option<String>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a builder for custom options.
    ///
    /// Equivalent to [`FormatOptionsBuilder::default`].
    pub fn builder() -> FormatOptionsBuilder {
        FormatOptionsBuilder::default()
    }

    pub fn divider(&self) -> &str {
        self.divider.as_deref().unwrap_or(DEFAULT_DIVIDER)
    }

    /// Whether the weekday actually ends up in the output.
    pub fn weekday_shown(&self) -> bool {
        self.show_date && self.show_weekday
    }
}

impl FormatOptionsBuilder {
    pub fn build(self) -> FormatOptions {
        let FormatOptionsBuilder {
            style,
            fuzziness,
            show_date,
            show_weekday,
            divider,
        } = self;
        FormatOptions {
            style: style.unwrap_or_default(),
            fuzziness: fuzziness.unwrap_or_default(),
            show_date: show_date.unwrap_or_default(),
            show_weekday: show_weekday.unwrap_or_default(),
            divider: divider.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("past-to", PhraseStyle::PastTo)]
    #[case("PAST-TO", PhraseStyle::PastTo)]
    #[case("a", PhraseStyle::PastTo)]
    #[case(" compact ", PhraseStyle::Compact)]
    #[case("B", PhraseStyle::Compact)]
    fn test_phrase_style_from_key(#[case] key: &str, #[case] expected: PhraseStyle) {
        assert_eq!(PhraseStyle::from_key(key).unwrap(), expected);
    }

    #[test]
    fn test_phrase_style_unknown_key() {
        let err = PhraseStyle::from_key("sideways").unwrap_err();
        assert_eq!(err, ClockError::UnknownPhraseStyle("sideways".to_string()));
        assert!(err.kind().is_invalid_input());
    }

    #[test]
    fn test_phrase_style_display_round_trips() {
        for style in PhraseStyle::iter() {
            assert_eq!(PhraseStyle::from_key(&style.to_string()).unwrap(), style);
        }
        assert_eq!(PhraseStyle::PastTo.to_string(), "past-to");
        let name: &'static str = PhraseStyle::Compact.into();
        assert_eq!(name, "compact");
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(-15)]
    #[case(i64::from(u32::MAX) + 1)]
    fn test_fuzziness_rejects(#[case] minutes: i64) {
        let err = Fuzziness::new(minutes).unwrap_err();
        assert!(err.is_invalid_fuzziness());
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(2.5)]
    #[case(0.0)]
    #[case(-5.0)]
    fn test_fuzziness_rejects_float(#[case] minutes: f64) {
        assert!(Fuzziness::try_from(minutes).is_err());
    }

    #[test]
    fn test_fuzziness_accepts() {
        assert_eq!(Fuzziness::new(1).unwrap(), Fuzziness::EXACT);
        assert_eq!(Fuzziness::try_from(15.0).unwrap().minutes(), 15);
        assert_eq!(Fuzziness::try_from(10u32).unwrap().minutes(), 10);
        assert_eq!(Fuzziness::default().minutes(), 5);
        assert!(Fuzziness::new(7).is_ok());
    }

    #[test]
    fn test_builder_defaults() {
        let options = FormatOptions::builder().build();
        assert_eq!(options, FormatOptions::default());
        assert_eq!(options.style, PhraseStyle::PastTo);
        assert_eq!(options.fuzziness.minutes(), 5);
        assert!(!options.show_date);
        assert_eq!(options.divider(), DEFAULT_DIVIDER);
    }

    #[test]
    fn test_builder_custom() {
        let options = FormatOptions::builder()
            .style(PhraseStyle::Compact)
            .fuzziness(Fuzziness::new(15).unwrap())
            .show_date(true)
            .show_weekday(true)
            .divider(" · ")
            .build();
        assert!(options.style.is_compact());
        assert_eq!(options.divider(), " · ");
        assert!(options.weekday_shown());
    }

    #[test]
    fn test_weekday_requires_date() {
        let options = FormatOptions::builder().show_weekday(true).build();
        assert!(!options.weekday_shown());
    }
}
