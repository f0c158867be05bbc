use super::types::{AssignmentStats, UNRANKED};
use crate::holiday::HolidayCalendar;
use crate::model::{Employee, Schedule, Workday};

/// Recalcule les statistiques à partir d'un planning existant.
///
/// Chaque entrée `(date, membre)` est classée exactement comme pendant la
/// génération ; les dates fériées sont ignorées en bloc (cas d'un planning
/// sauvegardé avant un changement du calendrier férié). Sur une période sans
/// férié, le résultat est identique bit à bit aux stats capturées en direct.
pub fn reduce_stats(
    schedule: &Schedule,
    employees: &[Employee],
    holidays: &dyn HolidayCalendar,
) -> AssignmentStats {
    let mut stats = AssignmentStats::for_employees(employees);

    for (date, name) in schedule.iter() {
        if holidays.is_holiday(date) {
            continue;
        }
        // Membre inconnu du roster : la garde est comptée hors préférences.
        let rank = employees
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| Workday::from_date(date).and_then(|w| e.preference_rank(w)))
            .unwrap_or(UNRANKED);
        stats.record(name, (rank < UNRANKED).then_some(rank));
    }

    stats
}
