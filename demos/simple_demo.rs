use chrono::Local;
use wordclock::{ClockFormatter, FormatOptions, Fuzziness, PhraseStyle};

fn main() {
    // Example: Build a formatter for the built-in English vocabulary
    let formatter = ClockFormatter::english().expect("Couldn't build English vocabulary");

    let time = Local::now();
    println!("Current time is: {time}");

    // Example: Both phrasing styles at a few levels of fuzziness
    for style in [PhraseStyle::PastTo, PhraseStyle::Compact] {
        for minutes in [1, 5, 15] {
            let options = FormatOptions::builder()
                .style(style)
                .fuzziness(Fuzziness::new(minutes).expect("Positive fuzziness"))
                .build();
            let text = formatter.format_string(&time, &options).unwrap();
            println!("{style}, {minutes} min: {text}");
        }
    }

    // Example: Structured output with the date
    let options = FormatOptions::builder()
        .show_date(true)
        .show_weekday(true)
        .build();
    let presentation = formatter.format(&time, &options).unwrap();
    let (time_text, divider, date_text) = presentation.segments();
    println!("time: {time_text:?}, divider: {divider:?}, date: {date_text:?}");
    println!("joined: {presentation}");
}
