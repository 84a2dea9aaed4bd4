use std::sync::Arc;

use crate::errors::ClockError;
use crate::iterator::TransitionIter;
use crate::options::{FormatOptions, Fuzziness, PhraseStyle};
use crate::rounding::{self, RoundedInstant, WallClock};
use crate::vocabulary::{fill, Vocabulary};

/// The three displayable parts of a formatted time.
///
/// `divider` and `date` are empty when the date is not shown, so a display layer can style
/// each part on its own while the `Display` output stays identical to the joined string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Presentation {
    pub time: String,
    pub divider: String,
    pub date: String,
}

impl Presentation {
    /// The `(time, divider, date)` triple.
    pub fn segments(&self) -> (&str, &str, &str) {
        (&self.time, &self.divider, &self.date)
    }
}

impl std::fmt::Display for Presentation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.time, self.divider, self.date)
    }
}

impl From<Presentation> for String {
    fn from(presentation: Presentation) -> Self {
        presentation.to_string()
    }
}

/// Renders wall-clock times as phrases from a shared, immutable [`Vocabulary`].
///
/// The formatter holds no other state: style, fuzziness and date display are passed with
/// every call, so a single instance can be shared across threads without locking.
/// Switching locale means building a new formatter.
#[derive(Debug, Clone)]
pub struct ClockFormatter {
    vocabulary: Arc<Vocabulary>,
}

impl ClockFormatter {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary: Arc::new(vocabulary),
        }
    }

    pub fn from_shared(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    /// A formatter using the built-in English vocabulary.
    pub fn english() -> Result<Self, ClockError> {
        Ok(Self::new(Vocabulary::english()?))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Formats a time into its time, divider and date parts.
    ///
    /// The time is rounded to the nearest multiple of `options.fuzziness` minutes (halfway
    /// rounds up). When that crosses midnight the date part describes the following day.
    ///
    /// # Parameters
    ///
    /// - `time`: anything convertible to a [`WallClock`], such as a `NaiveDateTime` or a
    ///   `DateTime<Tz>`. Only its local wall-clock fields are used.
    /// - `options`: style, fuzziness and date display for this call.
    ///
    /// # Errors
    ///
    /// - `ClockError::InvalidTimestamp`: rounding carried the date out of the supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use wordclock::{ClockFormatter, FormatOptions};
    ///
    /// let formatter = ClockFormatter::english().expect("English vocabulary is valid");
    /// let time = NaiveDate::from_ymd_opt(2025, 9, 11)
    ///     .unwrap()
    ///     .and_hms_opt(2, 8, 0)
    ///     .unwrap();
    ///
    /// let options = FormatOptions::builder()
    ///     .show_date(true)
    ///     .show_weekday(true)
    ///     .build();
    /// let presentation = formatter.format(time, &options).unwrap();
    ///
    /// assert_eq!(presentation.time, "ten past two");
    /// assert_eq!(presentation.to_string(), "ten past two | thursday the eleventh");
    /// ```
    pub fn format<T: Into<WallClock>>(
        &self,
        time: T,
        options: &FormatOptions,
    ) -> Result<Presentation, ClockError> {
        let rounded = rounding::round(&time.into(), options.fuzziness)?;
        Ok(self.present(&rounded, options))
    }

    /// Formats a time into a single string, equal to the `Display` of [`Self::format`].
    pub fn format_string<T: Into<WallClock>>(
        &self,
        time: T,
        options: &FormatOptions,
    ) -> Result<String, ClockError> {
        self.format(time, options).map(String::from)
    }

    /// Renders an already rounded instant.
    pub fn present(&self, rounded: &RoundedInstant, options: &FormatOptions) -> Presentation {
        let time = self.time_text(rounded, options.style);
        if !options.show_date {
            return Presentation {
                time,
                ..Presentation::default()
            };
        }
        Presentation {
            time,
            divider: options.divider().to_string(),
            date: self.date_text(rounded, options.weekday_shown()),
        }
    }

    /// The instant `time` rounds to, without rendering it.
    pub fn round<T: Into<WallClock>>(
        &self,
        time: T,
        fuzziness: Fuzziness,
    ) -> Result<RoundedInstant, ClockError> {
        rounding::round(&time.into(), fuzziness)
    }

    /// The first minute after `time` whose phrase can differ, for scheduling redraws.
    pub fn next_transition<T: Into<WallClock>>(
        &self,
        time: T,
        fuzziness: Fuzziness,
    ) -> Result<WallClock, ClockError> {
        rounding::next_transition(&time.into(), fuzziness)
    }

    /// Iterates over every change of the displayed phrase, starting with `start` itself.
    pub fn transitions<T: Into<WallClock>>(
        &self,
        start: T,
        options: FormatOptions,
    ) -> TransitionIter {
        TransitionIter::new(self.clone(), start.into(), options)
    }

    fn time_text(&self, rounded: &RoundedInstant, style: PhraseStyle) -> String {
        let vocabulary = &self.vocabulary;
        if rounded.minute == 0 {
            return match rounded.hour {
                0 => vocabulary.exact_midnight().to_string(),
                12 => vocabulary.exact_noon().to_string(),
                hour => fill(vocabulary.minute_template(style, 0), vocabulary.hour_name(hour)),
            };
        }

        let hour = referenced_hour(style, rounded.hour, rounded.minute);
        fill(
            vocabulary.minute_template(style, rounded.minute),
            vocabulary.hour_word(style, hour),
        )
    }

    fn date_text(&self, rounded: &RoundedInstant, show_weekday: bool) -> String {
        let vocabulary = &self.vocabulary;
        let template = if show_weekday {
            vocabulary.weekday_template(rounded.weekday())
        } else {
            vocabulary.date_template()
        };
        fill(template, vocabulary.ordinal(rounded.day()))
    }
}

// Past/to phrasing names the upcoming hour once past the half hour ("quarter to three").
// Compact phrasing only ever adds minutes to the current hour.
fn referenced_hour(style: PhraseStyle, hour: u32, minute: u32) -> u32 {
    match style {
        PhraseStyle::PastTo if minute > 30 => (hour + 1) % 24,
        PhraseStyle::PastTo | PhraseStyle::Compact => hour,
    }
}
