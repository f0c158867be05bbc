use crate::holiday::HolidayCalendar;
use crate::model::Workday;
use crate::scheduler::PlanError;
use anyhow::Context;
use chrono::NaiveDate;

/// Énumère en ordre croissant les jours ouvrés de `[start, end]`,
/// fériés exclus. Fonction pure : relançable à volonté.
pub fn working_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &dyn HolidayCalendar,
) -> Result<Vec<NaiveDate>, PlanError> {
    if end < start {
        return Err(PlanError::InvalidDateRange { start, end });
    }

    let mut out = Vec::new();
    let mut current = start;
    while current <= end {
        if Workday::from_date(current).is_some() && !holidays.is_holiday(current) {
            out.push(current);
        }
        current = current.succ_opt().context("date overflow")?;
    }
    Ok(out)
}
