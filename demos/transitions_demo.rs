use chrono::Local;
use wordclock::{ClockFormatter, FormatOptions, Fuzziness};

fn main() {
    let formatter = ClockFormatter::english().expect("Couldn't build English vocabulary");
    let options = FormatOptions::builder()
        .fuzziness(Fuzziness::new(5).expect("Positive fuzziness"))
        .show_date(true)
        .show_weekday(true)
        .build();

    let time = Local::now();

    // Example: When does the display next need to redraw?
    let next = formatter.next_transition(&time, options.fuzziness).unwrap();
    println!("Current time is {time}, next redraw at {next}");

    // Example: The next 8 phrase changes, starting now
    for (at, presentation) in formatter.transitions(&time, options).take(8) {
        println!("{at}: {presentation}");
    }
}
