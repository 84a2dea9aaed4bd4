use crate::options::PhraseStyle;
use crate::vocabulary::Language;

#[derive(Default, Clone, Copy)]
pub struct English;

static HOUR_NAMES: [&str; 24] = [
    "midnight", "one", "two", "three", "four", "five",
    "six", "seven", "eight", "nine", "ten", "eleven",
    "noon", "one", "two", "three", "four", "five",
    "six", "seven", "eight", "nine", "ten", "eleven",
];

// Index 0 and 60 are both "on the hour"; 60 only exists so the table covers every
// value rounding can touch before it normalizes into the next hour.
static PAST_TO: [&str; 61] = [
    "%s o'clock", "one past %s", "two past %s", "three past %s",
    "four past %s", "five past %s", "six past %s", "seven past %s",
    "eight past %s", "nine past %s", "ten past %s", "eleven past %s",
    "twelve past %s", "thirteen past %s", "fourteen past %s", "quarter past %s",
    "sixteen past %s", "seventeen past %s", "eighteen past %s", "nineteen past %s",
    "twenty past %s", "twenty-one past %s", "twenty-two past %s", "twenty-three past %s",
    "twenty-four past %s", "twenty-five past %s", "twenty-six past %s", "twenty-seven past %s",
    "twenty-eight past %s", "twenty-nine past %s", "half past %s", "twenty-nine to %s",
    "twenty-eight to %s", "twenty-seven to %s", "twenty-six to %s", "twenty-five to %s",
    "twenty-four to %s", "twenty-three to %s", "twenty-two to %s", "twenty-one to %s",
    "twenty to %s", "nineteen to %s", "eighteen to %s", "seventeen to %s",
    "sixteen to %s", "quarter to %s", "fourteen to %s", "thirteen to %s",
    "twelve to %s", "eleven to %s", "ten to %s", "nine to %s",
    "eight to %s", "seven to %s", "six to %s", "five to %s",
    "four to %s", "three to %s", "two to %s", "one to %s",
    "%s o'clock",
];

static COMPACT: [&str; 61] = [
    "%s o'clock", "%s oh one", "%s oh two", "%s oh three", "%s oh four",
    "%s oh five", "%s oh six", "%s oh seven", "%s oh eight", "%s oh nine",
    "%s ten", "%s eleven", "%s twelve", "%s thirteen", "%s fourteen",
    "%s fifteen", "%s sixteen", "%s seventeen", "%s eighteen", "%s nineteen",
    "%s twenty", "%s twenty-one", "%s twenty-two", "%s twenty-three", "%s twenty-four",
    "%s twenty-five", "%s twenty-six", "%s twenty-seven", "%s twenty-eight", "%s twenty-nine",
    "%s thirty", "%s thirty-one", "%s thirty-two", "%s thirty-three", "%s thirty-four",
    "%s thirty-five", "%s thirty-six", "%s thirty-seven", "%s thirty-eight", "%s thirty-nine",
    "%s forty", "%s forty-one", "%s forty-two", "%s forty-three", "%s forty-four",
    "%s forty-five", "%s forty-six", "%s forty-seven", "%s forty-eight", "%s forty-nine",
    "%s fifty", "%s fifty-one", "%s fifty-two", "%s fifty-three", "%s fifty-four",
    "%s fifty-five", "%s fifty-six", "%s fifty-seven", "%s fifty-eight", "%s fifty-nine",
    "%s o'clock",
];

static WEEKDAYS: [&str; 7] = [
    "sunday the %s", "monday the %s", "tuesday the %s", "wednesday the %s",
    "thursday the %s", "friday the %s", "saturday the %s",
];

static ORDINALS: [&str; 31] = [
    "first", "second", "third", "fourth", "fifth",
    "sixth", "seventh", "eighth", "ninth", "tenth",
    "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth",
    "sixteenth", "seventeenth", "eighteenth", "nineteenth", "twentieth",
    "twenty-first", "twenty-second", "twenty-third", "twenty-fourth", "twenty-fifth",
    "twenty-sixth", "twenty-seventh", "twenty-eighth", "twenty-ninth", "thirtieth",
    "thirty-first",
];

impl Language for English {
    fn hour_names(&self) -> &'static [&'static str] { &HOUR_NAMES }

    fn minute_templates(&self, style: PhraseStyle) -> &'static [&'static str] {
        match style {
            PhraseStyle::PastTo => &PAST_TO,
            PhraseStyle::Compact => &COMPACT,
        }
    }

    fn sentence_midnight(&self, style: PhraseStyle) -> &'static str {
        match style {
            PhraseStyle::PastTo => "midnight",
            PhraseStyle::Compact => "twelve",
        }
    }

    fn sentence_noon(&self, style: PhraseStyle) -> &'static str {
        match style {
            PhraseStyle::PastTo => "noon",
            PhraseStyle::Compact => "twelve",
        }
    }

    fn exact_midnight(&self) -> &'static str { "midnight" }
    fn exact_noon(&self) -> &'static str { "noon" }

    fn weekday_templates(&self) -> &'static [&'static str] { &WEEKDAYS }
    fn date_template(&self) -> &'static str { "the %s" }
    fn ordinals(&self) -> &'static [&'static str] { &ORDINALS }
}
