//! 30/360 day count convention.

use super::DayCount;
use crate::types::Date;

/// Checks if a date is the last day of February.
///
/// Needed for the 30/360 US month-end rules.
#[inline]
fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

/// 30/360 US day count convention (Bond Basis).
///
/// Assumes 30-day months and a 360-day year.
///
/// # Rules
///
/// 1. If D1 is the last day of February, change D1 to 30
/// 2. If D1 is 31, change D1 to 30
/// 3. If D2 is the last day of February AND D1 was last day of February,
///    change D2 to 30
/// 4. If D2 is 31 AND D1 is now >= 30, change D2 to 30
///
/// # Formula
///
/// `days = 360 * (Y2 - Y1) + 30 * (M2 - M1) + (D2 - D1)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        let d1_was_feb_eom = is_last_day_of_february(start);

        // Rule 1: D1 at February end-of-month becomes 30
        if d1_was_feb_eom {
            d1 = 30;
        }
        // Rule 2: D1 of 31 becomes 30
        else if d1 == 31 {
            d1 = 30;
        }

        // Rule 3: D2 at February end-of-month becomes 30 when D1 was too
        if is_last_day_of_february(end) && d1_was_feb_eom {
            d2 = 30;
        }
        // Rule 4: D2 of 31 becomes 30 when D1 is already >= 30
        else if d2 == 31 && d1 >= 30 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}
