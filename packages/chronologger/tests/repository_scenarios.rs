//! Scenarios for building and querying timer trees through the public API.

use chronologger::{
    Clock, Error, EventFilter, RootTimeRepository, TimeEvent, TimeRepository, TimeUnit,
};

fn names(events: &[&TimeEvent]) -> Vec<String> {
    events.iter().map(|event| event.name().to_string()).collect()
}

#[test]
fn nested_phases_in_pre_order() {
    let clock = Clock::new();
    let mut repository = TimeRepository::new("test_repo");

    repository.register_root(clock.tick("root_tick")).unwrap();
    repository.register("phase1", "root_tick").unwrap();
    repository.register("phase1.1", "phase1").unwrap();
    repository.register("phase1.2", "phase1").unwrap();

    repository.add(clock.tick("phase1_tick"), "phase1").unwrap();
    repository.add(clock.tick("phase1.1_tick"), "phase1.1").unwrap();
    repository.add(clock.tick("phase1.2_tick"), "phase1.2").unwrap();

    assert_eq!(
        names(&repository.get_all(EventFilter::Regular, false)),
        ["phase1_tick", "phase1.1_tick", "phase1.2_tick"]
    );
}

#[test]
fn fresh_root_repository_has_single_root_event() {
    let repository = RootTimeRepository::new("r");

    let events = repository.get_all(EventFilter::Regular, true);

    assert_eq!(events.len(), 1);
    assert_eq!(events.first().unwrap().name(), "root");
}

#[test]
fn ticks_without_root_registration() {
    let clock = Clock::new();
    let mut repository = TimeRepository::new("test_repo");

    let ticks = [
        clock.tick("phase 1"),
        clock.tick("phase 2"),
        clock.tick("phase 3"),
    ];

    for tick in &ticks {
        repository.add_to_root(tick.clone());
    }

    let events = repository.get_all(EventFilter::Orphan, false);
    let expected: Vec<TimeEvent> = ticks.into_iter().map(TimeEvent::from).collect();
    let expected: Vec<&TimeEvent> = expected.iter().collect();

    assert_eq!(events, expected);
}

#[test]
fn failed_operations_leave_tree_unchanged() {
    let clock = Clock::new();
    let mut repository = TimeRepository::new("test_repo");
    repository.register("phase", "test_repo").unwrap();
    repository.add(clock.tick("first"), "phase").unwrap();

    let before = repository.render();

    assert!(matches!(
        repository.register("phase", "test_repo"),
        Err(Error::DuplicateName { .. })
    ));
    assert!(matches!(
        repository.register("new", "missing"),
        Err(Error::UnknownParent { .. })
    ));
    assert!(matches!(
        repository.add(clock.tick("lost"), "missing"),
        Err(Error::UnknownParent { .. })
    ));

    assert_eq!(repository.render(), before);
    assert_eq!(repository.recorder("phase").unwrap().len(), 1);
}

#[test]
#[cfg(not(miri))] // Test uses the real platform which cannot be executed under Miri.
fn real_ticks_are_ordered() {
    let clock = Clock::new();

    let first = clock.tick_in("first", TimeUnit::Nanoseconds);
    std::thread::sleep(std::time::Duration::from_millis(2));
    let second = clock.tick_in("second", TimeUnit::Milliseconds);

    assert!(first.secs() < second.secs());

    let period = &second - &first;
    assert!(period.elapsed() > 0.0);
    assert!(period.secs() >= 0.002);

    let as_ms = period.to(TimeUnit::Milliseconds);
    assert!((as_ms.secs() - period.secs()).abs() < 1e-9);
}

#[test]
fn render_lists_every_timer() {
    let clock = Clock::new();
    let mut repository = RootTimeRepository::new("report");

    repository.register("load", "root").unwrap();
    repository.register("parse", "load").unwrap();
    repository.add(clock.tick("begin"), "parse").unwrap();
    repository.add(clock.tick("end"), "parse").unwrap();

    let rendered = repository.render();
    let headers: Vec<_> = rendered
        .lines()
        .filter(|line| !line.trim_start().starts_with("- "))
        .map(str::trim_start)
        .collect();

    assert_eq!(headers.len(), 3);
    assert_eq!(*headers.first().unwrap(), "report (0)");
    assert_eq!(*headers.get(1).unwrap(), "load (1)");
    assert!(headers.get(2).unwrap().starts_with("parse (2) elapsed "));
    assert!(rendered.contains("\t- end: "));
}
