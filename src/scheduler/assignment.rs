use super::types::{AssignmentStats, UNRANKED};
use crate::model::{Employee, Schedule, Workday};
use chrono::NaiveDate;

/// Boucle round-robin : chaque membre, à son tour, prend le jour restant
/// le mieux classé dans ses préférences.
///
/// Règles de sélection, à chaque tour :
/// - seuls les jours où le membre est disponible sont candidats ;
/// - le rang le plus bas gagne, "aucune préférence" comptant pour [`UNRANKED`] ;
/// - à rang égal, le premier jour rencontré gagne (`remaining` est en ordre
///   croissant de dates, donc la date la plus proche est servie d'abord) ;
/// - sans jour disponible, le tour est passé sans affectation.
///
/// Garde-fou : un cycle complet sans la moindre affectation arrête la boucle,
/// les jours restants étant imprenables par tout le monde. Sans ce test,
/// `remaining` non vide suffirait à boucler indéfiniment.
pub(super) fn assign_round_robin(
    employees: &[Employee],
    mut remaining: Vec<NaiveDate>,
    schedule: &mut Schedule,
    stats: &mut AssignmentStats,
) {
    while !remaining.is_empty() {
        let mut assigned_this_cycle = false;

        for employee in employees {
            if remaining.is_empty() {
                break;
            }

            let mut best: Option<(usize, usize)> = None; // (rang, index dans remaining)
            for (index, day) in remaining.iter().enumerate() {
                if employee.is_unavailable(*day) {
                    continue;
                }
                let rank = Workday::from_date(*day)
                    .and_then(|w| employee.preference_rank(w))
                    .unwrap_or(UNRANKED);
                match best {
                    Some((r, _)) if r <= rank => {}
                    _ => best = Some((rank, index)),
                }
            }

            if let Some((rank, index)) = best {
                let day = remaining.remove(index);
                schedule.assign(day, employee.name.clone());
                let rank = (rank < UNRANKED).then_some(rank);
                stats.record(&employee.name, rank);
                assigned_this_cycle = true;
            }
        }

        if !assigned_this_cycle {
            break;
        }
    }
}
