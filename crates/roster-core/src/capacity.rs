//! Capacity arithmetic over assignment date ranges.
//!
//! The allocation check is a pure calculation: filter an engineer's
//! assignments to those overlapping a candidate window, sum their allocation
//! percentages, and compare the remainder against the candidate. Date ranges
//! are inclusive on both ends, so two assignments that merely touch on a
//! boundary day compete for that day's capacity.
//!
//! Callers fetch the assignment set and then call [`can_allocate`]; nothing
//! here serializes concurrent writers, so two of them can both pass the
//! check and jointly overcommit an engineer. [`CapacityCheck`] therefore
//! reports availability as a signed number that goes negative on such data
//! instead of panicking or clamping.

use chrono::NaiveDate;

use crate::id::Id;
use crate::model::Assignment;

/// Outcome of a capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityCheck {
    /// Whether the candidate allocation fits.
    pub allowed: bool,

    /// Spare capacity during the window, before the candidate lands.
    /// Negative when the engineer is already overcommitted.
    pub available_capacity: i64,
}

/// Whether the inclusive ranges `[a_start, a_end]` and `[b_start, b_end]`
/// share at least one day.
pub fn overlaps(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && b_start <= a_end
}

/// Sum of allocation percentages overlapping `[start, end]`.
///
/// An assignment whose id equals `exclude` is skipped; pass the assignment
/// being updated so its current allocation is not counted against itself.
pub fn allocated_during(
    assignments: &[Assignment],
    start: NaiveDate,
    end: NaiveDate,
    exclude: Option<Id>,
) -> i64 {
    assignments
        .iter()
        .filter(|a| exclude != Some(a.id))
        .filter(|a| overlaps(a.start_date, a.end_date, start, end))
        .map(|a| i64::from(a.allocation_percentage))
        .sum()
}

/// Sum of allocation percentages active on a single day.
pub fn allocated_on(assignments: &[Assignment], date: NaiveDate) -> i64 {
    allocated_during(assignments, date, date, None)
}

/// Decide whether `allocation` percent of an engineer fits in
/// `[start, end]`, given the engineer's `max_capacity` and existing
/// assignments.
///
/// The existing assignments are filtered to the window here, so callers
/// pass the engineer's full set. For updates, `exclude` names the
/// assignment being rewritten.
pub fn can_allocate(
    max_capacity: u32,
    assignments: &[Assignment],
    start: NaiveDate,
    end: NaiveDate,
    allocation: u32,
    exclude: Option<Id>,
) -> CapacityCheck {
    let available_capacity =
        i64::from(max_capacity) - allocated_during(assignments, start, end, exclude);
    CapacityCheck {
        allowed: i64::from(allocation) <= available_capacity,
        available_capacity,
    }
}

/// Highest concurrent allocation across the whole set.
///
/// The running sum only changes where an assignment begins, so evaluating
/// at each start date finds the maximum.
pub fn peak_allocation(assignments: &[Assignment]) -> i64 {
    assignments
        .iter()
        .map(|a| allocated_on(assignments, a.start_date))
        .max()
        .unwrap_or(0)
}
