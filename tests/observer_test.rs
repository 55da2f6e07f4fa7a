//! Observer registry: fan-out order, duplicates, removal semantics.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::rstest;

use patternkit::observer::{
    LowStateObserver, Observer, ObserverSettings, Subject, ZeroOrHighObserver,
};
use patternkit::util::testing;
use patternkit::PatternError;

type Log = Rc<RefCell<Vec<String>>>;

/// Records every visit in a shared log, never reacts.
#[derive(Debug)]
struct Recorder {
    name: String,
    log: Log,
}

impl Recorder {
    fn new(name: &str, log: &Log) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            log: Rc::clone(log),
        })
    }
}

impl Observer for Recorder {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, subject: &Subject) -> Option<String> {
        self.log
            .borrow_mut()
            .push(format!("{}@{:?}", self.name, subject.state()));
        None
    }
}

/// Detaches `target` from the subject while being notified.
#[derive(Debug)]
struct Detacher {
    target: Rc<dyn Observer>,
}

impl Observer for Detacher {
    fn name(&self) -> &str {
        "detacher"
    }

    fn update(&self, subject: &Subject) -> Option<String> {
        subject.detach(&self.target).ok().map(|_| "detached".to_string())
    }
}

fn seeded(seed: u64) -> Subject {
    let settings = ObserverSettings {
        seed: Some(seed),
        ..ObserverSettings::default()
    };
    Subject::from_settings(&settings).unwrap()
}

#[rstest]
fn given_registered_observers_when_notify_then_each_visited_once_in_order() {
    testing::init_test_setup();
    let log: Log = Rc::default();
    let mut subject = Subject::new();
    for name in ["first", "second", "third"] {
        subject.attach(Recorder::new(name, &log));
    }
    subject.set_state(4);

    subject.notify();

    assert_eq!(
        *log.borrow(),
        vec!["first@Some(4)", "second@Some(4)", "third@Some(4)"]
    );
}

#[rstest]
fn given_duplicate_registration_when_notify_then_visited_per_registration() {
    let log: Log = Rc::default();
    let subject = Subject::new();
    let recorder = Recorder::new("dup", &log);
    subject.attach(recorder.clone());
    subject.attach(recorder.clone());

    subject.notify();
    assert_eq!(log.borrow().len(), 2);

    subject.detach(&recorder).unwrap();
    assert_eq!(subject.observer_count(), 1);
}

#[rstest]
fn given_observer_detached_mid_pass_when_notify_then_current_pass_unaffected() {
    let log: Log = Rc::default();
    let mut subject = Subject::new();
    subject.set_state(1);

    let victim: Rc<dyn Observer> = Recorder::new("victim", &log);
    subject.attach(Rc::new(Detacher {
        target: Rc::clone(&victim),
    }));
    subject.attach(Rc::clone(&victim));

    let reactions = subject.notify();
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].message, "detached");
    assert_eq!(*log.borrow(), vec!["victim@Some(1)"]);
    assert_eq!(subject.observer_count(), 1);

    subject.notify();
    assert_eq!(log.borrow().len(), 1);
}

#[rstest]
fn given_detached_observer_when_detached_again_then_not_found() {
    let subject = Subject::new();
    let observer = Rc::new(ZeroOrHighObserver::default());
    subject.attach(observer.clone());
    subject.detach(&observer).unwrap();

    assert_eq!(
        subject.detach(&observer),
        Err(PatternError::ObserverNotFound("Observer B".into()))
    );
}

#[rstest]
#[case(0, true, true)]
#[case(1, true, false)]
#[case(2, true, true)]
#[case(3, false, true)]
#[case(9, false, true)]
fn given_state_when_notify_then_threshold_observers_react(
    #[case] state: u32,
    #[case] a_fires: bool,
    #[case] b_fires: bool,
) {
    let mut subject = Subject::new();
    subject.attach(Rc::new(LowStateObserver::default()));
    subject.attach(Rc::new(ZeroOrHighObserver::default()));
    subject.set_state(state);

    let fired: Vec<String> = subject.notify().into_iter().map(|r| r.observer).collect();

    assert_eq!(fired.contains(&"Observer A".to_string()), a_fires);
    assert_eq!(fired.contains(&"Observer B".to_string()), b_fires);
}

#[rstest]
fn given_same_seed_when_running_business_logic_then_states_repeat() {
    let mut first = seeded(7);
    let mut second = seeded(7);
    for _ in 0..5 {
        first.run_business_logic();
        second.run_business_logic();
        assert_eq!(first.state(), second.state());
    }
}

#[rstest]
fn given_range_when_running_business_logic_then_state_stays_within() {
    let mut subject = Subject::with_range(4..6, Some(1)).unwrap();
    for _ in 0..50 {
        subject.run_business_logic();
        let state = subject.state().unwrap();
        assert!((4..6).contains(&state), "state out of range: {state}");
    }
}

#[rstest]
fn given_business_logic_when_run_then_observers_see_new_state() {
    let log: Log = Rc::default();
    let mut subject = seeded(3);
    subject.attach(Recorder::new("r", &log));

    subject.run_business_logic();

    let expected = format!("r@{:?}", subject.state());
    assert_eq!(*log.borrow(), vec![expected]);
}

#[rstest]
fn given_change_state_when_called_then_state_moves_without_notifying() {
    let log: Log = Rc::default();
    let mut subject = seeded(9);
    subject.attach(Recorder::new("r", &log));

    let state = subject.change_state();

    assert_eq!(subject.state(), Some(state));
    assert!(state < 10);
    assert!(log.borrow().is_empty());
}
