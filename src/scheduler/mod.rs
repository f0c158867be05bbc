mod assignment;
mod mutate;
mod stats;
mod types;

pub use stats::reduce_stats;
pub use types::{AssignmentStats, EmployeeStats, PlanError};

use crate::calendar;
use crate::holiday::HolidayCalendar;
use crate::model::{Employee, Roster, Schedule};
use chrono::NaiveDate;

/// Planner : encapsule un Roster et pilote la génération du roulement.
#[derive(Debug, Default)]
pub struct Planner {
    roster: Roster,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            roster: Roster::default(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn add_employees(&mut self, employees: Vec<Employee>) {
        self.roster.employees.extend(employees);
    }

    /// Génère le planning de `[start, end]` et le stocke dans le roster,
    /// en remplaçant intégralement le planning précédent.
    ///
    /// Les jours imprenables par tout le monde restent simplement absents
    /// du résultat ; les stats retournées sont celles du nouveau planning.
    pub fn generate(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        holidays: &dyn HolidayCalendar,
    ) -> Result<AssignmentStats, PlanError> {
        if self.roster.employees.is_empty() {
            return Err(PlanError::EmptyRoster);
        }
        let days = calendar::working_days(start, end, holidays)?;

        let mut schedule = Schedule::default();
        let mut stats = AssignmentStats::for_employees(&self.roster.employees);
        assignment::assign_round_robin(&self.roster.employees, days, &mut schedule, &mut stats);

        self.roster.schedule = schedule;
        Ok(stats)
    }

    /// Recalcule les stats du planning courant (fériés ignorés).
    pub fn recompute_stats(&self, holidays: &dyn HolidayCalendar) -> AssignmentStats {
        stats::reduce_stats(&self.roster.schedule, &self.roster.employees, holidays)
    }

    pub fn reassign(&mut self, date: NaiveDate, name: &str) -> Result<(), PlanError> {
        mutate::reassign(self, date, name)
    }

    pub fn swap(&mut self, a: NaiveDate, b: NaiveDate) -> Result<(), PlanError> {
        mutate::swap(self, a, b)
    }
}
