use chrono::{NaiveDateTime, TimeDelta};

use crate::formatter::{ClockFormatter, Presentation};
use crate::options::FormatOptions;
use crate::rounding::{WallClock, MINUTES_PER_DAY};

/// Yields each wall-clock minute at which the displayed phrase changes, together with the
/// phrase shown from that minute on.
///
/// The first item is the starting time itself. Iteration ends if the calendar runs out, or
/// once a whole day passes without a new phrase (fuzziness of a day or more with the date
/// hidden).
#[derive(Debug, Clone)]
pub struct TransitionIter {
    formatter: ClockFormatter,
    options: FormatOptions,
    current_time: WallClock,
    is_first: bool,
    last: Option<Presentation>,
}

impl TransitionIter {
    /// Creates a new `TransitionIter`.
    ///
    /// # Arguments
    ///
    /// * `formatter` - The formatter rendering each phrase.
    /// * `start_time` - The time to start iterating from.
    /// * `options` - Options applied to every phrase, fuzziness included.
    pub fn new(formatter: ClockFormatter, start_time: WallClock, options: FormatOptions) -> Self {
        TransitionIter {
            formatter,
            options,
            current_time: start_time,
            is_first: true,
            last: None,
        }
    }

    fn present(&self, time: WallClock) -> Option<Presentation> {
        self.formatter
            .format(time, &self.options)
            .map_err(|err| log::debug!("transition search stopped: {err}"))
            .ok()
    }
}

impl Iterator for TransitionIter {
    type Item = (WallClock, Presentation);

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_first {
            self.is_first = false;
            let presentation = self.present(self.current_time)?;
            self.last = Some(presentation.clone());
            return Some((self.current_time, presentation));
        }

        let last = self.last.take()?;
        // Rounding repeats every day, so a phrase unchanged for a day never changes.
        let limit = self
            .current_time
            .naive()
            .checked_add_signed(TimeDelta::minutes(MINUTES_PER_DAY as i64))
            .unwrap_or(NaiveDateTime::MAX);
        loop {
            let next = match self
                .formatter
                .next_transition(self.current_time, self.options.fuzziness)
            {
                Ok(next) => next,
                Err(err) => {
                    log::debug!("transition search stopped: {err}");
                    return None;
                }
            };
            if next.naive() > limit {
                log::debug!("phrase stays {last} forever after {}", self.current_time);
                return None;
            }

            self.current_time = next;
            let presentation = self.present(next)?;
            if presentation != last {
                self.last = Some(presentation.clone());
                return Some((next, presentation));
            }
        }
    }
}
