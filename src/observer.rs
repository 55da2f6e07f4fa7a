//! Subject/observer registry with synchronous fan-out.
//!
//! The subscriber list belongs to each `Subject` instance; two subjects never
//! share observers.

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::errors::{PatternError, PatternResult};

/// Tunables for the subject's random state and the two stock observers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObserverSettings {
    /// Inclusive lower bound of the random state
    pub state_min: u32,
    /// Exclusive upper bound of the random state
    pub state_max: u32,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
    /// Observer A reacts below this value
    pub low_limit: u32,
    /// Observer B reacts at zero or at/above this value
    pub high_floor: u32,
}

impl Default for ObserverSettings {
    fn default() -> Self {
        Self {
            state_min: 0,
            state_max: 10,
            seed: None,
            low_limit: 3,
            high_floor: 2,
        }
    }
}

/// What an observer reported during a notification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub observer: String,
    pub message: String,
}

/// Subscriber interface.
///
/// `update` receives the subject by shared reference: observers can read the
/// state but cannot change it.
pub trait Observer: fmt::Debug {
    fn name(&self) -> &str;

    /// Returns a message when the observer reacts, `None` when it ignores the
    /// event.
    fn update(&self, subject: &Subject) -> Option<String>;
}

pub struct Subject {
    state: Option<u32>,
    observers: RefCell<Vec<Rc<dyn Observer>>>,
    range: Range<u32>,
    rng: StdRng,
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("state", &self.state)
            .field("observers", &self.observers.borrow().len())
            .field("range", &self.range)
            .finish()
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject {
    /// Subject with state range `0..10` and an entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            state: None,
            observers: RefCell::new(Vec::new()),
            range: 0..10,
            rng: StdRng::from_entropy(),
        }
    }

    /// # Errors
    /// `InvalidStateRange` when `range` is empty.
    pub fn with_range(range: Range<u32>, seed: Option<u64>) -> PatternResult<Self> {
        if range.is_empty() {
            return Err(PatternError::InvalidStateRange {
                start: range.start,
                end: range.end,
            });
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            state: None,
            observers: RefCell::new(Vec::new()),
            range,
            rng,
        })
    }

    pub fn from_settings(settings: &ObserverSettings) -> PatternResult<Self> {
        Self::with_range(settings.state_min..settings.state_max, settings.seed)
    }

    /// Current state; `None` until the first mutation.
    pub fn state(&self) -> Option<u32> {
        self.state
    }

    pub fn set_state(&mut self, state: u32) {
        debug!(state, "State set");
        self.state = Some(state);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Appends to the subscriber list. Registering the same observer twice
    /// gets it notified twice.
    #[instrument(level = "debug", skip_all, fields(observer = observer.name()))]
    pub fn attach(&self, observer: Rc<dyn Observer>) {
        self.observers.borrow_mut().push(observer);
        info!("Subject: observer attached");
    }

    /// Removes the first registration of `observer` (matched by identity).
    ///
    /// # Errors
    /// `ObserverNotFound` if it is not registered.
    #[instrument(level = "debug", skip_all, fields(observer = observer.name()))]
    pub fn detach<O: Observer + ?Sized>(&self, observer: &Rc<O>) -> PatternResult<()> {
        let target = Rc::as_ptr(observer).cast::<()>();
        let mut observers = self.observers.borrow_mut();
        let pos = observers
            .iter()
            .position(|o| Rc::as_ptr(o).cast::<()>() == target)
            .ok_or_else(|| PatternError::ObserverNotFound(observer.name().to_string()))?;
        observers.remove(pos);
        info!("Subject: observer detached");
        Ok(())
    }

    /// Calls every registered observer once, in registration order.
    ///
    /// Iterates over a snapshot: attach/detach calls made by observers during
    /// the pass apply to the next pass.
    #[instrument(level = "debug", skip(self), fields(state = ?self.state))]
    pub fn notify(&self) -> Vec<Reaction> {
        let snapshot: Vec<Rc<dyn Observer>> = self.observers.borrow().clone();
        debug!(count = snapshot.len(), "Subject: notifying observers");
        snapshot
            .iter()
            .filter_map(|o| {
                o.update(self).map(|message| Reaction {
                    observer: o.name().to_string(),
                    message,
                })
            })
            .collect()
    }

    /// Moves the state to a new random value within the configured range
    /// without notifying anyone.
    pub fn change_state(&mut self) -> u32 {
        let state = self.rng.gen_range(self.range.clone());
        info!(state, "Subject: state changed");
        self.state = Some(state);
        state
    }

    /// `change_state` followed by `notify`.
    pub fn run_business_logic(&mut self) -> Vec<Reaction> {
        self.change_state();
        self.notify()
    }
}

/// "Observer A": reacts while the state is below `limit`.
#[derive(Debug, Clone)]
pub struct LowStateObserver {
    pub limit: u32,
}

impl Default for LowStateObserver {
    fn default() -> Self {
        Self { limit: 3 }
    }
}

impl Observer for LowStateObserver {
    fn name(&self) -> &str {
        "Observer A"
    }

    fn update(&self, subject: &Subject) -> Option<String> {
        let state = subject.state()?;
        (state < self.limit)
            .then(|| format!("reacted to the event (state below {})", self.limit))
    }
}

/// "Observer B": reacts when the state is zero or at least `floor`.
#[derive(Debug, Clone)]
pub struct ZeroOrHighObserver {
    pub floor: u32,
}

impl Default for ZeroOrHighObserver {
    fn default() -> Self {
        Self { floor: 2 }
    }
}

impl Observer for ZeroOrHighObserver {
    fn name(&self) -> &str {
        "Observer B"
    }

    fn update(&self, subject: &Subject) -> Option<String> {
        let state = subject.state()?;
        (state == 0 || state >= self.floor).then(|| {
            format!(
                "reacted to the event (state is 0 or at least {})",
                self.floor
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject_at(state: u32) -> Subject {
        let mut subject = Subject::new();
        subject.set_state(state);
        subject
    }

    #[test]
    fn given_state_two_when_notify_then_both_observers_fire() {
        let subject = subject_at(2);
        subject.attach(Rc::new(LowStateObserver::default()));
        subject.attach(Rc::new(ZeroOrHighObserver::default()));

        let reactions = subject.notify();
        let names: Vec<_> = reactions.iter().map(|r| r.observer.as_str()).collect();
        assert_eq!(names, ["Observer A", "Observer B"]);
    }

    #[test]
    fn given_unset_state_when_notify_then_nobody_reacts() {
        let subject = Subject::new();
        subject.attach(Rc::new(LowStateObserver::default()));
        subject.attach(Rc::new(ZeroOrHighObserver::default()));
        assert!(subject.notify().is_empty());
    }

    #[test]
    fn given_unregistered_observer_when_detach_then_not_found() {
        let subject = Subject::new();
        let stranger = Rc::new(LowStateObserver::default());
        assert_eq!(
            subject.detach(&stranger),
            Err(PatternError::ObserverNotFound("Observer A".into()))
        );
    }

    #[test]
    fn given_empty_range_when_constructing_then_error() {
        let err = Subject::with_range(5..5, None).unwrap_err();
        assert_eq!(err, PatternError::InvalidStateRange { start: 5, end: 5 });
    }

    #[test]
    fn given_two_subjects_when_attaching_to_one_then_other_stays_empty() {
        let first = Subject::new();
        let second = Subject::new();
        first.attach(Rc::new(LowStateObserver::default()));
        assert_eq!(first.observer_count(), 1);
        assert_eq!(second.observer_count(), 0);
    }
}
