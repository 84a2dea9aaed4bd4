pub mod lang;
pub use lang::english::English;

use chrono::Weekday;

use crate::errors::ClockError;
use crate::options::PhraseStyle;

pub const HOURS_PER_DAY: usize = 24;
pub const MINUTE_TEMPLATES: usize = 61;
pub const DAYS_PER_WEEK: usize = 7;
pub const MAX_DAY_OF_MONTH: usize = 31;

/// Substitution marker used in every template.
pub const PLACEHOLDER: &str = "%s";

// This defines the contract for providing localized strings.
// Lengths are checked by `Vocabulary::from_language`.
pub trait Language {
    /// 24 names indexed by hour of day, index 0 is midnight and index 12 is noon.
    fn hour_names(&self) -> &'static [&'static str];
    /// 61 templates indexed by rounded minute, each with one hour placeholder.
    fn minute_templates(&self, style: PhraseStyle) -> &'static [&'static str];
    /// Word used in a sentence that refers to midnight ("ten past midnight").
    fn sentence_midnight(&self, style: PhraseStyle) -> &'static str;
    /// Word used in a sentence that refers to noon ("quarter to noon").
    fn sentence_noon(&self, style: PhraseStyle) -> &'static str;
    fn exact_midnight(&self) -> &'static str;
    fn exact_noon(&self) -> &'static str;
    /// 7 templates, Sunday first, each with one ordinal placeholder.
    fn weekday_templates(&self) -> &'static [&'static str];
    fn date_template(&self) -> &'static str;
    /// 31 day-of-month ordinals, "first" first.
    fn ordinals(&self) -> &'static [&'static str];
}

/// Midnight or noon, the two hours with their own sentence words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Midnight,
    Noon,
}

impl Meridiem {
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            0 => Some(Meridiem::Midnight),
            12 => Some(Meridiem::Noon),
            _ => None,
        }
    }
}

/// Raw, unvalidated strings for one phrase style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleData {
    pub minute_templates: Vec<String>,
    pub midnight: String,
    pub noon: String,
}

/// Raw, unvalidated vocabulary as supplied by a localization provider.
///
/// Turn it into a usable [`Vocabulary`] with [`Vocabulary::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VocabularyData {
    pub hour_names: Vec<String>,
    pub past_to: StyleData,
    pub compact: StyleData,
    pub exact_midnight: String,
    pub exact_noon: String,
    pub weekday_templates: Vec<String>,
    pub date_template: String,
    pub ordinals: Vec<String>,
}

impl VocabularyData {
    pub fn from_language<L: Language>(lang: &L) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let style = |style: PhraseStyle| StyleData {
            minute_templates: owned(lang.minute_templates(style)),
            midnight: lang.sentence_midnight(style).to_string(),
            noon: lang.sentence_noon(style).to_string(),
        };
        VocabularyData {
            hour_names: owned(lang.hour_names()),
            past_to: style(PhraseStyle::PastTo),
            compact: style(PhraseStyle::Compact),
            exact_midnight: lang.exact_midnight().to_string(),
            exact_noon: lang.exact_noon().to_string(),
            weekday_templates: owned(lang.weekday_templates()),
            date_template: lang.date_template().to_string(),
            ordinals: owned(lang.ordinals()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StyleTable {
    minute_templates: Box<[String; MINUTE_TEMPLATES]>,
    midnight: String,
    noon: String,
}

/// A validated, immutable vocabulary table.
///
/// Every array has its exact required length (enforced by the types), no entry is empty and
/// every template carries exactly one `%s`. Lookups therefore never fail; indices are reduced
/// into range before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    hour_names: Box<[String; HOURS_PER_DAY]>,
    past_to: StyleTable,
    compact: StyleTable,
    exact_midnight: String,
    exact_noon: String,
    weekday_templates: Box<[String; DAYS_PER_WEEK]>,
    date_template: String,
    ordinals: Box<[String; MAX_DAY_OF_MONTH]>,
}

impl Vocabulary {
    /// Validate raw locale data.
    ///
    /// # Errors
    ///
    /// - `ClockError::ShapeError` if an array has the wrong length.
    /// - `ClockError::EmptyEntry` if any name, literal or template is empty.
    /// - `ClockError::PlaceholderError` if a template lacks exactly one `%s`.
    pub fn new(data: VocabularyData) -> Result<Self, ClockError> {
        let VocabularyData {
            hour_names,
            past_to,
            compact,
            exact_midnight,
            exact_noon,
            weekday_templates,
            date_template,
            ordinals,
        } = data;

        let vocabulary = Vocabulary {
            hour_names: fixed("hour_names", hour_names)?,
            past_to: style_table(PhraseStyle::PastTo, past_to)?,
            compact: style_table(PhraseStyle::Compact, compact)?,
            exact_midnight: literal("exact_midnight", exact_midnight)?,
            exact_noon: literal("exact_noon", exact_noon)?,
            weekday_templates: templates("weekday_templates", weekday_templates)?,
            date_template: template("date_template", 0, date_template)?,
            ordinals: fixed("ordinals", ordinals)?,
        };
        log::debug!("vocabulary table validated");
        Ok(vocabulary)
    }

    /// Build and validate the vocabulary of a [`Language`].
    pub fn from_language<L: Language>(lang: &L) -> Result<Self, ClockError> {
        Vocabulary::new(VocabularyData::from_language(lang))
    }

    /// The built-in English vocabulary.
    pub fn english() -> Result<Self, ClockError> {
        Vocabulary::from_language(&English)
    }

    pub fn hour_name(&self, hour: u32) -> &str {
        &self.hour_names[hour as usize % HOURS_PER_DAY]
    }

    /// The hour as it reads inside a sentence: midnight and noon use the style's sentence
    /// words, every other hour its plain name.
    pub fn hour_word(&self, style: PhraseStyle, hour: u32) -> &str {
        let hour = hour % HOURS_PER_DAY as u32;
        match Meridiem::from_hour(hour) {
            Some(meridiem) => self.sentence_word(style, meridiem),
            None => self.hour_name(hour),
        }
    }

    pub fn minute_template(&self, style: PhraseStyle, minute: u32) -> &str {
        &self.style(style).minute_templates[minute as usize % MINUTE_TEMPLATES]
    }

    pub fn sentence_word(&self, style: PhraseStyle, meridiem: Meridiem) -> &str {
        let table = self.style(style);
        match meridiem {
            Meridiem::Midnight => &table.midnight,
            Meridiem::Noon => &table.noon,
        }
    }

    pub fn exact_midnight(&self) -> &str {
        &self.exact_midnight
    }

    pub fn exact_noon(&self) -> &str {
        &self.exact_noon
    }

    pub fn weekday_template(&self, weekday: Weekday) -> &str {
        &self.weekday_templates[weekday.num_days_from_sunday() as usize % DAYS_PER_WEEK]
    }

    pub fn date_template(&self) -> &str {
        &self.date_template
    }

    /// Ordinal for a 1-based day of month, clamped into 1..=31.
    pub fn ordinal(&self, day: u32) -> &str {
        let index = (day.clamp(1, MAX_DAY_OF_MONTH as u32) - 1) as usize;
        &self.ordinals[index]
    }

    fn style(&self, style: PhraseStyle) -> &StyleTable {
        match style {
            PhraseStyle::PastTo => &self.past_to,
            PhraseStyle::Compact => &self.compact,
        }
    }
}

/// Replace the single placeholder in a validated template.
pub(crate) fn fill(template: &str, value: &str) -> String {
    template.replacen(PLACEHOLDER, value, 1)
}

fn fixed<const N: usize>(
    table: &'static str,
    items: Vec<String>,
) -> Result<Box<[String; N]>, ClockError> {
    if let Some(index) = items.iter().position(|item| item.is_empty()) {
        log::debug!("rejecting vocabulary: empty entry {index} in {table}");
        return Err(ClockError::EmptyEntry { table, index });
    }
    let found = items.len();
    items.into_boxed_slice().try_into().map_err(|_| {
        log::debug!("rejecting vocabulary: {table} has {found} entries, expected {N}");
        ClockError::ShapeError {
            table,
            expected: N,
            found,
        }
    })
}

fn templates<const N: usize>(
    table: &'static str,
    items: Vec<String>,
) -> Result<Box<[String; N]>, ClockError> {
    let items = fixed::<N>(table, items)?;
    for (index, item) in items.iter().enumerate() {
        check_placeholder(table, index, item)?;
    }
    Ok(items)
}

fn template(table: &'static str, index: usize, item: String) -> Result<String, ClockError> {
    let item = literal(table, item)?;
    check_placeholder(table, index, &item)?;
    Ok(item)
}

fn literal(table: &'static str, item: String) -> Result<String, ClockError> {
    if item.is_empty() {
        log::debug!("rejecting vocabulary: {table} is empty");
        return Err(ClockError::EmptyEntry { table, index: 0 });
    }
    Ok(item)
}

fn check_placeholder(table: &'static str, index: usize, item: &str) -> Result<(), ClockError> {
    if item.matches(PLACEHOLDER).count() != 1 {
        log::debug!("rejecting vocabulary: {table}[{index}] has no single placeholder");
        return Err(ClockError::PlaceholderError { table, index });
    }
    Ok(())
}

fn style_table(style: PhraseStyle, data: StyleData) -> Result<StyleTable, ClockError> {
    let (table, midnight_table, noon_table) = match style {
        PhraseStyle::PastTo => ("past_to", "past_to.midnight", "past_to.noon"),
        PhraseStyle::Compact => ("compact", "compact.midnight", "compact.noon"),
    };
    let StyleData {
        minute_templates,
        midnight,
        noon,
    } = data;
    Ok(StyleTable {
        minute_templates: templates(table, minute_templates)?,
        midnight: literal(midnight_table, midnight)?,
        noon: literal(noon_table, noon)?,
    })
}
