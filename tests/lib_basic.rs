#![forbid(unsafe_code)]
use chrono::NaiveDate;
use roulement::{
    model::{Employee, Unavailability, Workday},
    scheduler::PlanError,
    working_days, NoHolidays, Planner,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn employee(name: &str, prefs: [Workday; 5]) -> Employee {
    Employee::new(name, prefs).unwrap()
}

const ASC: [Workday; 5] = [
    Workday::Monday,
    Workday::Tuesday,
    Workday::Wednesday,
    Workday::Thursday,
    Workday::Friday,
];
const DESC: [Workday; 5] = [
    Workday::Friday,
    Workday::Thursday,
    Workday::Wednesday,
    Workday::Tuesday,
    Workday::Monday,
];

#[test]
fn opposite_preferences_one_week() {
    let mut p = Planner::new();
    p.add_employees(vec![employee("alice", ASC), employee("bob", DESC)]);

    // 2024-01-01 est un lundi.
    let stats = p.generate(date(2024, 1, 1), date(2024, 1, 5), &NoHolidays).unwrap();

    let schedule = &p.roster().schedule;
    assert_eq!(schedule.len(), 5);
    assert_eq!(schedule.employee_on(date(2024, 1, 1)), Some("alice")); // lundi, rang 0
    assert_eq!(schedule.employee_on(date(2024, 1, 5)), Some("bob")); // vendredi, rang 0
    assert_eq!(schedule.employee_on(date(2024, 1, 2)), Some("alice")); // mardi, rang 1
    assert_eq!(schedule.employee_on(date(2024, 1, 4)), Some("bob")); // jeudi, rang 1
    assert_eq!(schedule.employee_on(date(2024, 1, 3)), Some("alice")); // mercredi, rang 2

    let alice = stats.get("alice").unwrap();
    assert_eq!(alice.shifts, 3);
    assert_eq!(alice.by_rank, [1, 1, 1, 0, 0]);
    assert_eq!(alice.unranked, 0);

    let bob = stats.get("bob").unwrap();
    assert_eq!(bob.shifts, 2);
    assert_eq!(bob.by_rank, [1, 1, 0, 0, 0]);
    assert_eq!(bob.unranked, 0);
}

#[test]
fn weekday_block_leaves_day_unassigned() {
    let mut p = Planner::new();
    let mut solo = employee("solo", ASC);
    solo.absences.push(Unavailability::WeekdayBlock(Workday::Wednesday));
    p.add_employees(vec![solo]);

    p.generate(date(2024, 1, 1), date(2024, 1, 5), &NoHolidays).unwrap();

    let schedule = &p.roster().schedule;
    assert_eq!(schedule.len(), 4);
    assert_eq!(schedule.employee_on(date(2024, 1, 3)), None); // mercredi bloqué
    for d in [1, 2, 4, 5] {
        assert_eq!(schedule.employee_on(date(2024, 1, d)), Some("solo"));
    }
}

#[test]
fn vacation_day_goes_to_other_employee() {
    let tuesday = date(2024, 1, 2);

    let mut p = Planner::new();
    let mut alice = employee("alice", ASC);
    alice.absences.push(Unavailability::vacation(tuesday).unwrap());
    p.add_employees(vec![alice, employee("bob", ASC)]);

    p.generate(date(2024, 1, 1), date(2024, 1, 5), &NoHolidays).unwrap();
    assert_eq!(p.roster().schedule.employee_on(tuesday), Some("bob"));
}

#[test]
fn vacation_day_absent_for_single_employee() {
    let tuesday = date(2024, 1, 2);

    let mut p = Planner::new();
    let mut solo = employee("solo", ASC);
    solo.absences.push(Unavailability::vacation(tuesday).unwrap());
    p.add_employees(vec![solo]);

    p.generate(date(2024, 1, 1), date(2024, 1, 5), &NoHolidays).unwrap();
    assert_eq!(p.roster().schedule.len(), 4);
    assert_eq!(p.roster().schedule.employee_on(tuesday), None);
}

#[test]
fn invalid_range_is_rejected() {
    let err = working_days(date(2024, 1, 6), date(2024, 1, 5), &NoHolidays).unwrap_err();
    assert!(matches!(err, PlanError::InvalidDateRange { .. }));

    let mut p = Planner::new();
    p.add_employees(vec![employee("solo", ASC)]);
    let err = p.generate(date(2024, 1, 6), date(2024, 1, 5), &NoHolidays).unwrap_err();
    assert!(matches!(err, PlanError::InvalidDateRange { .. }));
}

#[test]
fn empty_roster_is_rejected() {
    let mut p = Planner::new();
    let err = p.generate(date(2024, 1, 1), date(2024, 1, 5), &NoHolidays).unwrap_err();
    assert!(matches!(err, PlanError::EmptyRoster));
}

#[test]
fn fully_blocked_weekday_terminates() {
    // Tout le monde bloque le mercredi : le jour reste vacant, sans boucle infinie.
    let mut p = Planner::new();
    let mut alice = employee("alice", ASC);
    alice.absences.push(Unavailability::WeekdayBlock(Workday::Wednesday));
    let mut bob = employee("bob", DESC);
    bob.absences.push(Unavailability::WeekdayBlock(Workday::Wednesday));
    p.add_employees(vec![alice, bob]);

    p.generate(date(2024, 1, 1), date(2024, 1, 5), &NoHolidays).unwrap();
    assert_eq!(p.roster().schedule.len(), 4);
    assert_eq!(p.roster().schedule.employee_on(date(2024, 1, 3)), None);
}

#[test]
fn full_coverage_and_balanced_counts() {
    let mut p = Planner::new();
    p.add_employees(vec![
        employee("alice", ASC),
        employee("bob", DESC),
        employee(
            "carol",
            [
                Workday::Wednesday,
                Workday::Monday,
                Workday::Friday,
                Workday::Tuesday,
                Workday::Thursday,
            ],
        ),
    ]);

    // 4 semaines pleines = 20 jours ouvrés.
    let stats = p.generate(date(2024, 1, 1), date(2024, 1, 26), &NoHolidays).unwrap();
    assert_eq!(p.roster().schedule.len(), 20);
    assert_eq!(stats.total_shifts(), 20);

    // Équité : écart d'au plus 1 quand personne n'est indisponible.
    let counts: Vec<u32> = stats.per_employee.values().map(|s| s.shifts).collect();
    let max = counts.iter().max().unwrap();
    let min = counts.iter().min().unwrap();
    assert!(max - min <= 1);

    // Disponibilité et cohérence des stats.
    for (date, name) in p.roster().schedule.iter() {
        let e = p.roster().find_employee(name).unwrap();
        assert!(!e.is_unavailable(date));
    }
    for s in stats.per_employee.values() {
        assert_eq!(s.classified(), s.shifts);
    }
}

#[test]
fn tie_break_prefers_earliest_date() {
    // Préférences identiques sur deux semaines : à rang égal (deux lundis
    // restants), la date la plus proche est servie d'abord.
    let mut p = Planner::new();
    p.add_employees(vec![employee("alice", ASC), employee("bob", ASC)]);

    p.generate(date(2024, 1, 1), date(2024, 1, 12), &NoHolidays).unwrap();

    let schedule = &p.roster().schedule;
    assert_eq!(schedule.len(), 10);
    // alice joue avant bob : elle prend le lundi 1er, bob le lundi 8.
    assert_eq!(schedule.employee_on(date(2024, 1, 1)), Some("alice"));
    assert_eq!(schedule.employee_on(date(2024, 1, 8)), Some("bob"));
    assert_eq!(schedule.employee_on(date(2024, 1, 2)), Some("alice"));
    assert_eq!(schedule.employee_on(date(2024, 1, 9)), Some("bob"));
}

#[test]
fn reassign_and_swap_preserve_invariants() {
    let mut p = Planner::new();
    p.add_employees(vec![employee("alice", ASC), employee("bob", DESC)]);
    p.generate(date(2024, 1, 1), date(2024, 1, 5), &NoHolidays).unwrap();

    // lundi: alice -> bob
    p.reassign(date(2024, 1, 1), "bob").unwrap();
    assert_eq!(p.roster().schedule.employee_on(date(2024, 1, 1)), Some("bob"));
    assert_eq!(p.roster().schedule.len(), 5);

    // bob a maintenant lundi et mardi appartient à alice : échange
    p.swap(date(2024, 1, 1), date(2024, 1, 2)).unwrap();
    assert_eq!(p.roster().schedule.employee_on(date(2024, 1, 1)), Some("alice"));
    assert_eq!(p.roster().schedule.employee_on(date(2024, 1, 2)), Some("bob"));

    let err = p.reassign(date(2024, 1, 6), "alice").unwrap_err();
    assert!(matches!(err, PlanError::UnknownDate(_)));
    let err = p.reassign(date(2024, 1, 1), "ghost").unwrap_err();
    assert!(matches!(err, PlanError::UnknownEmployee(_)));
}

#[test]
fn reassign_rejects_unavailable_employee() {
    let wednesday = date(2024, 1, 3);

    let mut p = Planner::new();
    let mut bob = employee("bob", DESC);
    bob.absences.push(Unavailability::WeekdayBlock(Workday::Wednesday));
    p.add_employees(vec![employee("alice", ASC), bob]);
    p.generate(date(2024, 1, 1), date(2024, 1, 5), &NoHolidays).unwrap();

    assert_eq!(p.roster().schedule.employee_on(wednesday), Some("alice"));
    let err = p.reassign(wednesday, "bob").unwrap_err();
    assert!(matches!(err, PlanError::ReassignInvalid(_)));
}

#[test]
fn malformed_preferences_rejected_at_boundary() {
    let dup = [
        Workday::Monday,
        Workday::Monday,
        Workday::Wednesday,
        Workday::Thursday,
        Workday::Friday,
    ];
    assert!(Employee::new("dup", dup).is_err());
    assert!(Employee::new("  ", ASC).is_err());
    assert!(Unavailability::vacation(date(2024, 1, 6)).is_err()); // samedi
}
