#![forbid(unsafe_code)]
//! Roulement — bibliothèque de planification équitable de jours ouvrés (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Attribution round-robin guidée par les préférences de jours.
//! - Congés, jours bloqués, fériés ; stats d'équité recalculables.
//! - Dates calendaires pures (pas de fuseaux) ; parsing ISO 8601.

pub mod calendar;
pub mod holiday;
pub mod io;
pub mod model;
pub mod scheduler;
pub mod storage;

pub use calendar::working_days;
pub use holiday::{FixedHolidays, HolidayCalendar, NoHolidays};
pub use model::{Employee, Roster, Schedule, Unavailability, Workday};
pub use scheduler::{reduce_stats, AssignmentStats, EmployeeStats, PlanError, Planner};
pub use storage::{JsonStorage, Storage};
