//! Proportional sub-period generation.

use crate::graha::Graha;

use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};

/// Snap the last child's end to the parent's end to absorb float drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Divide `parent` among `sequence` in proportion to each lord's years.
///
/// `sequence` lists `(lord, full_period_years)` in the order the children
/// run; `total_years` is the length of the whole cycle. Children are
/// contiguous, start at `parent.start_jd` and end exactly at
/// `parent.end_jd`.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(Graha, f64)],
    total_years: f64,
    child_level: DashaLevel,
) -> Vec<DashaPeriod> {
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for &(graha, years) in sequence {
        let duration = years / total_years * parent_duration;
        let end = cursor + duration;
        children.push(DashaPeriod {
            graha,
            level: child_level,
            start_jd: cursor,
            end_jd: end,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

/// Full period of `years` in days.
pub(crate) fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}
