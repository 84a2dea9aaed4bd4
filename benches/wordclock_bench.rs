use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use wordclock::{ClockFormatter, FormatOptions, Fuzziness, PhraseStyle};

fn format_full_day(formatter: &ClockFormatter, options: &FormatOptions) {
    let start = NaiveDate::from_ymd_opt(2025, 9, 6)
        .expect("Valid date")
        .and_hms_opt(0, 0, 0)
        .expect("Valid time");
    for minute in 0..24 * 60 {
        let time = start + chrono::Duration::minutes(minute);
        black_box(formatter.format_string(time, options).expect("Formattable time"));
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let formatter = ClockFormatter::english().expect("Couldn't build English vocabulary");
    let options = FormatOptions::builder()
        .style(PhraseStyle::PastTo)
        .fuzziness(Fuzziness::new(5).expect("Positive fuzziness"))
        .show_date(true)
        .show_weekday(true)
        .build();

    c.bench_function("format_full_day", |b| {
        b.iter(|| format_full_day(black_box(&formatter), black_box(&options)))
    });
    c.bench_function("transitions_take_100", |b| {
        b.iter(|| {
            let start = NaiveDate::from_ymd_opt(2025, 9, 6)
                .expect("Valid date")
                .and_hms_opt(8, 0, 0)
                .expect("Valid time");
            for item in formatter.transitions(start, options.clone()).take(100) {
                black_box(item);
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
