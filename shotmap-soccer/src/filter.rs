//! Event predicates and filtering.

use crate::domain::Event;

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Player { name: String },
    Type { event_type: String },
}
impl Predicate {
    pub fn player(name: impl Into<String>) -> Self {
        Predicate::Player { name: name.into() }
    }

    pub fn event_type(event_type: impl Into<String>) -> Self {
        Predicate::Type {
            event_type: event_type.into(),
        }
    }

    pub fn test(&self, event: &Event) -> bool {
        match self {
            Predicate::Player { name } => event.player() == Some(name.as_str()),
            Predicate::Type { event_type } => &event.event_type == event_type,
        }
    }

    pub fn closure(self) -> impl FnMut(&Event) -> bool {
        move |event| self.test(event)
    }
}

pub type PredicateClosure = Box<dyn FnMut(&Event) -> bool>;

/// A conjunction of predicates; an empty set admits every event.
pub struct PredicateClosures {
    closures: Vec<PredicateClosure>,
}

impl<P: Into<PredicateClosure>> From<Vec<P>> for PredicateClosures {
    fn from(closurelikes: Vec<P>) -> Self {
        Self {
            closures: closurelikes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PredicateClosures> for PredicateClosure {
    fn from(mut predicates: PredicateClosures) -> Self {
        Box::new(move |event| {
            for closure in predicates.closures.iter_mut() {
                if !closure(event) {
                    return false;
                }
            }
            true
        })
    }
}

impl From<Predicate> for PredicateClosure {
    fn from(predicate: Predicate) -> Self {
        Box::new(predicate.closure())
    }
}

/// Selects events performed by `player` of the given `event_type`, by exact string equality.
pub fn player_events(player: &str, event_type: &str) -> PredicateClosures {
    PredicateClosures::from(vec![
        Predicate::player(player),
        Predicate::event_type(event_type),
    ])
}

/// Retains the events admitted by the predicate, preserving their order.
pub fn filter_events(
    events: impl IntoIterator<Item = Event>,
    closurelike: impl Into<PredicateClosure>,
) -> Vec<Event> {
    let mut closure = closurelike.into();
    retain_events(events, &mut closure)
}

/// As [`filter_events`], for a closure that is reused across several batches of events.
pub fn retain_events(
    events: impl IntoIterator<Item = Event>,
    closure: &mut PredicateClosure,
) -> Vec<Event> {
    events.into_iter().filter(|event| closure(event)).collect()
}
