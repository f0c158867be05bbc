use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::Employee;

/// Rang fictif au-delà des 5 rangs réels : "aucune préférence".
/// Perd tout départage face à un rang 0..=4.
pub(super) const UNRANKED: usize = 5;

/// Compteurs d'un membre : total de gardes, histogramme par rang (0..=4),
/// gardes hors préférences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub shifts: u32,
    pub by_rank: [u32; 5],
    pub unranked: u32,
}

impl EmployeeStats {
    /// Comptabilise une garde classée au rang donné (`None` = hors préférences).
    pub fn record(&mut self, rank: Option<usize>) {
        self.shifts += 1;
        match rank {
            Some(r) if r < self.by_rank.len() => self.by_rank[r] += 1,
            _ => self.unranked += 1,
        }
    }

    /// Somme de l'histogramme, `unranked` compris. Toujours égale à `shifts`.
    pub fn classified(&self) -> u32 {
        self.by_rank.iter().sum::<u32>() + self.unranked
    }
}

/// Statistiques d'affectation par membre, ordonnées par nom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentStats {
    pub per_employee: BTreeMap<String, EmployeeStats>,
}

impl AssignmentStats {
    /// Initialise une entrée à zéro pour chaque membre du roster.
    pub fn for_employees(employees: &[Employee]) -> Self {
        let per_employee = employees
            .iter()
            .map(|e| (e.name.clone(), EmployeeStats::default()))
            .collect();
        Self { per_employee }
    }

    pub fn get(&self, name: &str) -> Option<&EmployeeStats> {
        self.per_employee.get(name)
    }

    pub(super) fn record(&mut self, name: &str, rank: Option<usize>) {
        self.per_employee.entry(name.to_string()).or_default().record(rank);
    }

    /// Total de gardes, tous membres confondus.
    pub fn total_shifts(&self) -> u32 {
        self.per_employee.values().map(|s| s.shifts).sum()
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid date range: {end} is before {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("roster has no employees")]
    EmptyRoster,
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("no assignment on {0}")]
    UnknownDate(NaiveDate),
    #[error("reassign invalid: {0}")]
    ReassignInvalid(&'static str),
    #[error("swap invalid: {0}")]
    SwapInvalid(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
