use strum::EnumIs;

/// Broad classification of a [`ClockError`].
///
/// Both kinds are deterministic and input-dependent, so neither is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs)]
pub enum ErrorKind {
    /// The caller handed the formatter something it cannot format.
    InvalidInput,
    /// A vocabulary table failed validation while being constructed.
    Shape,
}

/// Represents errors that can occur while building a vocabulary or formatting a time.
///
/// `ClockError` is used throughout the `wordclock` crate and is exported for consuming
/// programs, which are expected to pick their own fallback (a digital clock, for example).
#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum ClockError {
    /// The timestamp does not resolve to a single wall-clock date and time.
    ///
    /// This happens for out-of-range calendar fields (February 30th, hour 24) and for
    /// local times skipped by a daylight saving transition.
    InvalidTimestamp(String),

    /// The fuzziness is zero, negative, fractional or not a finite number.
    InvalidFuzziness(String),

    /// A settings key did not name a known phrase style.
    UnknownPhraseStyle(String),

    /// A vocabulary table has the wrong number of entries.
    ShapeError {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    /// A vocabulary entry is the empty string.
    EmptyEntry { table: &'static str, index: usize },

    /// A vocabulary template does not contain exactly one `%s` placeholder.
    PlaceholderError { table: &'static str, index: usize },
}

impl ClockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClockError::InvalidTimestamp(_)
            | ClockError::InvalidFuzziness(_)
            | ClockError::UnknownPhraseStyle(_) => ErrorKind::InvalidInput,
            ClockError::ShapeError { .. }
            | ClockError::EmptyEntry { .. }
            | ClockError::PlaceholderError { .. } => ErrorKind::Shape,
        }
    }
}

impl std::fmt::Display for ClockError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ClockError::InvalidTimestamp(msg) => write!(f, "Invalid timestamp: {msg}"),
            ClockError::InvalidFuzziness(msg) => write!(f, "Invalid fuzziness: {msg}"),
            ClockError::UnknownPhraseStyle(key) => write!(f, "Unknown phrase style: {key}"),
            ClockError::ShapeError {
                table,
                expected,
                found,
            } => write!(
                f,
                "Vocabulary table '{table}' must have {expected} entries, found {found}."
            ),
            ClockError::EmptyEntry { table, index } => {
                write!(f, "Vocabulary table '{table}' has an empty entry at index {index}.")
            }
            ClockError::PlaceholderError { table, index } => write!(
                f,
                "Vocabulary table '{table}' entry {index} must contain exactly one '%s' placeholder."
            ),
        }
    }
}

impl std::error::Error for ClockError {}
