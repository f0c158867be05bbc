use crate::holiday::FixedHolidays;
use crate::model::{Employee, Roster, Unavailability, Workday};
use crate::scheduler::AssignmentStats;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Import de membres depuis CSV: header `name,preferences[,absences]`.
///
/// `preferences` : exactement 5 noms de jours séparés par `;`
/// (rang 0 en premier). `absences` : mélange de dates ISO (congés) et de
/// noms de jours (blocages permanents), séparés par `;`.
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    let mut seen = BTreeSet::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let prefs = rec.get(1).context("missing preferences")?.trim();
        if name.is_empty() || prefs.is_empty() {
            bail!("invalid employee row (empty)");
        }
        if !seen.insert(name.to_string()) {
            bail!("duplicate employee name: {name}");
        }
        let preferences = parse_preferences(prefs)
            .with_context(|| format!("invalid preferences for {name}"))?;
        let mut employee = Employee::new(name, preferences).map_err(anyhow::Error::msg)?;
        if let Some(absences) = rec.get(2) {
            let absences = absences.trim();
            if !absences.is_empty() {
                employee.absences = parse_absences(absences)
                    .with_context(|| format!("invalid absences for {name}"))?;
            }
        }
        out.push(employee);
    }
    Ok(out)
}

/// Parse la liste ordonnée des 5 jours préférés.
pub fn parse_preferences(raw: &str) -> anyhow::Result<[Workday; 5]> {
    let days: Vec<Workday> = raw
        .split([';', ','])
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| chunk.parse::<Workday>().map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<_>>()?;
    let days: [Workday; 5] = days
        .try_into()
        .map_err(|v: Vec<Workday>| anyhow::anyhow!("expected 5 weekdays, got {}", v.len()))?;
    Ok(days)
}

/// Parse une liste d'indisponibilités (dates ISO et/ou jours, séparés par `;`).
pub fn parse_absences(raw: &str) -> anyhow::Result<Vec<Unavailability>> {
    raw.split(';')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| parse_absence_chunk(chunk.trim()))
        .collect()
}

fn parse_absence_chunk(chunk: &str) -> anyhow::Result<Unavailability> {
    if let Ok(date) = NaiveDate::parse_from_str(chunk, "%Y-%m-%d") {
        return Unavailability::vacation(date).map_err(anyhow::Error::msg);
    }
    let day: Workday = chunk
        .parse()
        .map_err(|_| anyhow::anyhow!("expected date or weekday: {chunk}"))?;
    Ok(Unavailability::WeekdayBlock(day))
}

/// Import de fériés depuis CSV: header `date[,label]` (le label est ignoré).
pub fn import_holidays_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<FixedHolidays> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut holidays = FixedHolidays::default();
    for rec in rdr.records() {
        let rec = rec?;
        let raw = rec.get(0).context("missing date")?.trim();
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid holiday date: {raw}"))?;
        holidays.add(date);
    }
    Ok(holidays)
}

/// Export JSON du roster (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning: header `date,weekday,employee`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "weekday", "employee"])?;
    for (date, name) in roster.schedule.iter() {
        let weekday = Workday::from_date(date).map(|d| d.label()).unwrap_or("");
        w.write_record([date.to_string().as_str(), weekday, name])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des stats: header `name,shifts,rank1..rank5,unranked`
pub fn export_stats_csv<P: AsRef<Path>>(path: P, stats: &AssignmentStats) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "name", "shifts", "rank1", "rank2", "rank3", "rank4", "rank5", "unranked",
    ])?;
    for (name, s) in &stats.per_employee {
        let mut row = vec![name.clone(), s.shifts.to_string()];
        row.extend(s.by_rank.iter().map(|c| c.to_string()));
        row.push(s.unranked.to_string());
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}
