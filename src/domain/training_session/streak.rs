//! Training streak aggregation.
//!
//! A streak is a run of consecutive calendar days that each have a session.
//! Dates are walked newest first; any missing day ends the run.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::foundation::TrainingDate;

/// Summary of training consistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    /// Run of consecutive days reaching today, or yesterday while today
    /// has no session yet.
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_training_date: Option<TrainingDate>,
    /// Sessions in the calendar month of `today`.
    pub this_month_count: u32,
    pub total_count: u32,
}

impl StreakSummary {
    /// Computes the summary from every recorded session date.
    ///
    /// `dates` may arrive in any order and may contain duplicates.
    pub fn compute(dates: &[TrainingDate], today: NaiveDate) -> Self {
        let mut days: Vec<NaiveDate> = dates.iter().map(TrainingDate::as_naive).collect();
        days.sort_unstable_by(|a, b| b.cmp(a));
        days.dedup();

        let this_month_count = days
            .iter()
            .filter(|d| d.year() == today.year() && d.month() == today.month())
            .count() as u32;

        Self {
            current_streak: current_run(&days, today),
            longest_streak: longest_run(&days),
            last_training_date: days.first().copied().map(TrainingDate::from_naive),
            this_month_count,
            total_count: days.len() as u32,
        }
    }

    pub fn empty() -> Self {
        Self {
            current_streak: 0,
            longest_streak: 0,
            last_training_date: None,
            this_month_count: 0,
            total_count: 0,
        }
    }
}

/// `days` must be sorted newest first without duplicates.
fn longest_run(days: &[NaiveDate]) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous {
            Some(prev) if prev.pred_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}

/// `days` must be sorted newest first without duplicates.
fn current_run(days: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut past = days.iter().copied().skip_while(|d| *d > today).peekable();

    let anchor = match past.peek() {
        Some(&first) if first == today || Some(first) == today.pred_opt() => first,
        _ => return 0,
    };

    let mut expected = Some(anchor);
    let mut run = 0;
    for day in past {
        if Some(day) != expected {
            break;
        }
        run += 1;
        expected = day.pred_opt();
    }
    run
}
