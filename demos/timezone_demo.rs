use chrono::Local;
use chrono_tz::Tz;
use wordclock::{ClockFormatter, FormatOptions};

fn main() {
    let formatter = ClockFormatter::english().expect("Couldn't build English vocabulary");
    let options = FormatOptions::builder().show_date(true).build();

    // The phrase always describes the wall clock of the zone the time is expressed in
    for name in ["America/New_York", "Europe/Stockholm", "Asia/Tokyo"] {
        let zone: Tz = name.parse().expect("Invalid timezone");
        let time = Local::now().with_timezone(&zone);
        println!("{name}: {}", formatter.format_string(&time, &options).unwrap());
    }
}
