use std::sync::Mutex;

use clue_sat::{
    clue::{
        roster::{Category, Roster},
        Game,
    },
    config::Config,
    misc::log::targets,
    reports::Entailment,
};
use log::{LevelFilter, Log, Metadata, Record};

/// Keeps the target of every record.
struct TargetLog {
    targets: Mutex<Vec<String>>,
}

impl Log for TargetLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut seen) = self.targets.lock() {
            seen.push(record.target().to_string());
        }
    }

    fn flush(&self) {}
}

static TARGET_LOG: TargetLog = TargetLog {
    targets: Mutex::new(Vec::new()),
};

#[test]
fn every_record_is_on_a_library_target() {
    if log::STATIC_MAX_LEVEL == LevelFilter::Off {
        return;
    }
    log::set_logger(&TARGET_LOG).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut config = Config::default();
    assert!(config.decision_polarity.set(false));

    let roster = Roster::new(
        &["a", "b", "c"],
        [
            Category::new("suspects", &["s1", "s2"]),
            Category::new("weapons", &["w1", "w2"]),
            Category::new("rooms", &["r1", "r2"]),
        ],
    )
    .unwrap();
    let mut game = Game::new(roster, config).unwrap();
    game.hand("a", &["s1", "w1"]).unwrap();
    game.suggest("a", "s2", "w2", "r1", Some("c"), None).unwrap();
    assert_eq!(game.query("b", "s2"), Ok(Entailment::False));
    assert_eq!(game.is_consistent(), Ok(true));

    let known = [
        targets::CONFIG,
        targets::SOLVE,
        targets::PROPAGATION,
        targets::DECISION,
        targets::BACKTRACK,
        targets::CLAUSE_DB,
        targets::ENTAILMENT,
        targets::EVENTS,
        targets::PARSE,
    ];

    let seen = TARGET_LOG.targets.lock().unwrap();
    assert!(seen.iter().any(|target| target == targets::SOLVE));
    assert!(seen.iter().any(|target| target == targets::CONFIG));
    for target in seen.iter() {
        assert!(known.contains(&target.as_str()), "Record on target {target}");
    }
}
