use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Jour ouvré (lundi–vendredi). Les week-ends n'existent pas dans ce domaine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Workday {
    pub const ALL: [Workday; 5] = [
        Workday::Monday,
        Workday::Tuesday,
        Workday::Wednesday,
        Workday::Thursday,
        Workday::Friday,
    ];

    /// `None` pour samedi/dimanche.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        match date.weekday() {
            Weekday::Mon => Some(Workday::Monday),
            Weekday::Tue => Some(Workday::Tuesday),
            Weekday::Wed => Some(Workday::Wednesday),
            Weekday::Thu => Some(Workday::Thursday),
            Weekday::Fri => Some(Workday::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Workday::Monday => "monday",
            Workday::Tuesday => "tuesday",
            Workday::Wednesday => "wednesday",
            Workday::Thursday => "thursday",
            Workday::Friday => "friday",
        }
    }
}

impl fmt::Display for Workday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Workday {
    type Err = String;

    /// Accepte les noms anglais (complets ou abrégés) et allemands,
    /// l'application d'origine étant germanophone.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" | "montag" => Ok(Workday::Monday),
            "tuesday" | "tue" | "dienstag" => Ok(Workday::Tuesday),
            "wednesday" | "wed" | "mittwoch" => Ok(Workday::Wednesday),
            "thursday" | "thu" | "donnerstag" => Ok(Workday::Thursday),
            "friday" | "fri" | "freitag" => Ok(Workday::Friday),
            other => Err(format!("unknown weekday: {other}")),
        }
    }
}

/// Indisponibilité d'un membre : soit une date de congé précise,
/// soit un jour de semaine bloqué en permanence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unavailability {
    Vacation(NaiveDate),
    WeekdayBlock(Workday),
}

impl Unavailability {
    /// Crée un congé en validant que la date tombe un jour ouvré.
    pub fn vacation(date: NaiveDate) -> Result<Self, String> {
        if Workday::from_date(date).is_none() {
            return Err(format!("vacation date {date} falls on a weekend"));
        }
        Ok(Unavailability::Vacation(date))
    }
}

/// Membre du roulement : nom unique, 5 jours préférés ordonnés (rang 0 = préféré),
/// indisponibilités embarquées.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub preferences: [Workday; 5],
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub absences: Vec<Unavailability>,
}

impl Employee {
    /// Valide le nom et l'unicité des 5 préférences.
    pub fn new<N: Into<String>>(name: N, preferences: [Workday; 5]) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("employee name cannot be empty".to_string());
        }
        for (i, a) in preferences.iter().enumerate() {
            if preferences.iter().skip(i + 1).any(|b| a == b) {
                return Err(format!("duplicate weekday in preferences: {a}"));
            }
        }
        Ok(Self {
            name,
            preferences,
            absences: Vec::new(),
        })
    }

    /// Rang (0..=4) de `day` dans les préférences, `None` si absent.
    pub fn preference_rank(&self, day: Workday) -> Option<usize> {
        self.preferences.iter().position(|w| *w == day)
    }

    /// Vrai si la date correspond à un congé ou à un jour bloqué.
    pub fn is_unavailable(&self, date: NaiveDate) -> bool {
        self.absences.iter().any(|entry| match entry {
            Unavailability::Vacation(d) => *d == date,
            Unavailability::WeekdayBlock(w) => Workday::from_date(date) == Some(*w),
        })
    }
}

/// Planning : au plus un membre par date, entrées triées par date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    entries: BTreeMap<NaiveDate, String>,
}

impl Schedule {
    /// Affecte `name` à `date`, en remplaçant l'affectation existante le cas échéant.
    pub fn assign<N: Into<String>>(&mut self, date: NaiveDate, name: N) {
        self.entries.insert(date, name.into());
    }

    pub fn employee_on(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.entries.iter().map(|(d, n)| (*d, n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Roster complet : membres + dernier planning généré.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub schedule: Schedule,
}

impl Roster {
    pub fn find_employee<'a>(&'a self, name: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.name == name)
    }
    pub fn find_employee_mut(&mut self, name: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.name == name)
    }
}
