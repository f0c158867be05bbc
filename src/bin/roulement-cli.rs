#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use roulement::{
    holiday::{HolidayCalendar, NoHolidays},
    io,
    model::Employee,
    scheduler::{AssignmentStats, Planner},
    storage::{JsonStorage, Storage},
    working_days,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification de roulement (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de roster
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un membre avec ses 5 jours préférés ordonnés
    AddEmployee {
        #[arg(long)]
        name: String,
        /// liste "monday;tuesday;wednesday;thursday;friday" (rang 0 en premier)
        #[arg(long)]
        preferences: String,
        /// dates ISO et/ou jours bloqués, ex. "2024-07-15;wednesday"
        #[arg(long)]
        absences: Option<String>,
    },

    /// Ajouter des indisponibilités à un membre existant
    AddAbsence {
        #[arg(long)]
        name: String,
        /// dates ISO et/ou jours bloqués, ex. "2024-07-15;wednesday"
        #[arg(long)]
        absences: String,
    },

    /// Importer des membres depuis un CSV
    ImportEmployees {
        #[arg(long)]
        csv: String,
    },

    /// Générer le planning (remplace intégralement le précédent)
    Generate {
        /// Date ISO (AAAA-MM-JJ), incluse
        #[arg(long)]
        start: String,
        /// Date ISO (AAAA-MM-JJ), incluse
        #[arg(long)]
        end: String,
        /// CSV de fériés `date[,label]`
        #[arg(long)]
        holidays: Option<String>,
        /// Export CSV des stats (optionnel)
        #[arg(long)]
        stats_csv: Option<String>,
    },

    /// Recalculer les stats du planning sauvegardé
    Stats {
        /// CSV de fériés `date[,label]` (dates fériées ignorées du décompte)
        #[arg(long)]
        holidays: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Lister le planning, avec filtres et exports optionnels
    List {
        /// Filtre par mois (1..=12)
        #[arg(long)]
        month: Option<u32>,
        /// Filtre par membre
        #[arg(long)]
        employee: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Réaffecter une date du planning à un autre membre
    Reassign {
        /// Date ISO (AAAA-MM-JJ)
        #[arg(long)]
        date: String,
        #[arg(long)]
        employee: String,
    },

    /// Échanger les affectations de deux dates
    Swap {
        /// Date ISO (AAAA-MM-JJ)
        #[arg(long)]
        date: String,
        /// Date ISO (AAAA-MM-JJ)
        #[arg(long)]
        with: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster)?;
    let mut planner = Planner::new();
    *planner.roster_mut() = storage.load_or_default()?;

    let code = match cli.cmd {
        Commands::AddEmployee {
            name,
            preferences,
            absences,
        } => {
            let prefs = io::parse_preferences(&preferences)?;
            if planner.roster().find_employee(&name).is_some() {
                bail!("employee already exists: {name}");
            }
            let mut employee = Employee::new(name, prefs).map_err(anyhow::Error::msg)?;
            if let Some(raw) = absences {
                employee.absences = io::parse_absences(&raw)?;
            }
            planner.add_employees(vec![employee]);
            storage.save(planner.roster())?;
            0
        }
        Commands::AddAbsence { name, absences } => {
            let entries = io::parse_absences(&absences)?;
            let employee = planner
                .roster_mut()
                .find_employee_mut(&name)
                .ok_or_else(|| anyhow::anyhow!("unknown employee: {}", name))?;
            employee.absences.extend(entries);
            storage.save(planner.roster())?;
            0
        }
        Commands::ImportEmployees { csv } => {
            let employees = io::import_employees_csv(csv)?;
            for e in &employees {
                if planner.roster().find_employee(&e.name).is_some() {
                    bail!("employee already exists: {}", e.name);
                }
            }
            planner.add_employees(employees);
            storage.save(planner.roster())?;
            0
        }
        Commands::Generate {
            start,
            end,
            holidays,
            stats_csv,
        } => {
            let start: NaiveDate = start.parse()?;
            let end: NaiveDate = end.parse()?;
            let holidays = load_holidays(holidays.as_deref())?;

            let stats = planner.generate(start, end, holidays.as_ref())?;
            storage.save(planner.roster())?;

            print_stats(&stats);
            if let Some(path) = stats_csv {
                io::export_stats_csv(path, &stats)?;
            }

            let supply = working_days(start, end, holidays.as_ref())?.len();
            let unassigned = supply - planner.roster().schedule.len();
            if unassigned > 0 {
                eprintln!("Warning: {unassigned} working day(s) left unassigned");
                // Code 2 = WARNING/INCOMPLETE
                2
            } else {
                0
            }
        }
        Commands::Stats { holidays, out_csv } => {
            let holidays = load_holidays(holidays.as_deref())?;
            let stats = planner.recompute_stats(holidays.as_ref());
            print_stats(&stats);
            if let Some(path) = out_csv {
                io::export_stats_csv(path, &stats)?;
            }
            0
        }
        Commands::List {
            month,
            employee,
            out_json,
            out_csv,
        } => {
            if let Some(path) = out_json {
                io::export_roster_json(path, planner.roster())?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, planner.roster())?;
            }
            // impression compacte
            for (date, name) in planner.roster().schedule.iter() {
                if month.map(|m| date.month() != m).unwrap_or(false) {
                    continue;
                }
                if employee.as_deref().map(|e| e != name).unwrap_or(false) {
                    continue;
                }
                println!("{} | {}", date, name);
            }
            0
        }
        Commands::Reassign { date, employee } => {
            let date: NaiveDate = date.parse()?;
            planner.reassign(date, &employee)?;
            storage.save(planner.roster())?;
            0
        }
        Commands::Swap { date, with } => {
            let a: NaiveDate = date.parse()?;
            let b: NaiveDate = with.parse()?;
            planner.swap(a, b)?;
            storage.save(planner.roster())?;
            0
        }
    };

    std::process::exit(code);
}

fn load_holidays(path: Option<&str>) -> Result<Box<dyn HolidayCalendar>> {
    match path {
        Some(p) => Ok(Box::new(io::import_holidays_csv(p)?)),
        None => Ok(Box::new(NoHolidays)),
    }
}

fn print_stats(stats: &AssignmentStats) {
    for (name, s) in &stats.per_employee {
        let ranks: Vec<String> = s.by_rank.iter().map(|c| c.to_string()).collect();
        println!(
            "{} | {} shift(s) | ranks [{}] | unranked {}",
            name,
            s.shifts,
            ranks.join(" "),
            s.unranked
        );
    }
}
