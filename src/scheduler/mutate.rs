use super::{PlanError, Planner};
use chrono::NaiveDate;

/// Réaffecte un jour déjà planifié à un autre membre, après contrôle
/// de disponibilité. L'invariant "un membre par date" est préservé.
pub(super) fn reassign(
    planner: &mut Planner,
    date: NaiveDate,
    name: &str,
) -> Result<(), PlanError> {
    if planner.roster.schedule.employee_on(date).is_none() {
        return Err(PlanError::UnknownDate(date));
    }
    let employee = planner
        .roster
        .find_employee(name)
        .ok_or_else(|| PlanError::UnknownEmployee(name.to_string()))?;
    if employee.is_unavailable(date) {
        return Err(PlanError::ReassignInvalid(
            "employee unavailable on that date",
        ));
    }
    let name = employee.name.clone();
    planner.roster.schedule.assign(date, name);
    Ok(())
}

/// Échange les affectations de deux dates du planning. Chaque membre doit
/// être disponible sur la date qu'il récupère.
pub(super) fn swap(planner: &mut Planner, a: NaiveDate, b: NaiveDate) -> Result<(), PlanError> {
    let name_a = planner
        .roster
        .schedule
        .employee_on(a)
        .ok_or(PlanError::UnknownDate(a))?
        .to_string();
    let name_b = planner
        .roster
        .schedule
        .employee_on(b)
        .ok_or(PlanError::UnknownDate(b))?
        .to_string();

    if name_a == name_b {
        return Err(PlanError::SwapInvalid(
            "both dates assigned to the same employee",
        ));
    }

    let emp_a = planner
        .roster
        .find_employee(&name_a)
        .ok_or_else(|| PlanError::UnknownEmployee(name_a.clone()))?;
    if emp_a.is_unavailable(b) {
        return Err(PlanError::SwapInvalid(
            "first employee unavailable on target date",
        ));
    }
    let emp_b = planner
        .roster
        .find_employee(&name_b)
        .ok_or_else(|| PlanError::UnknownEmployee(name_b.clone()))?;
    if emp_b.is_unavailable(a) {
        return Err(PlanError::SwapInvalid(
            "second employee unavailable on target date",
        ));
    }

    planner.roster.schedule.assign(a, name_b);
    planner.roster.schedule.assign(b, name_a);
    Ok(())
}
