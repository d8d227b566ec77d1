use std::cell::RefCell;

use ui_hooks::api::TouchCapabilityDetector;
use ui_hooks::host::{
    CapabilitySource, Handler, InMemoryCapability, Subscription, TOUCH_PRIMARY_QUERY,
};

/// Capability source that ignores unsubscribe and keeps invoking old handlers.
struct LeakyCapability {
    matches: bool,
    handlers: RefCell<Vec<Handler<bool>>>,
}

impl LeakyCapability {
    fn fire(&self, matches: bool) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler(matches);
        }
    }
}

impl CapabilitySource for LeakyCapability {
    fn matches(&self) -> bool {
        self.matches
    }

    fn subscribe_change(&self, handler: Handler<bool>) -> Subscription {
        self.handlers.borrow_mut().push(handler);
        Subscription::inert()
    }
}

#[test]
fn initial_value_matches_query() {
    let touch = InMemoryCapability::new(true);
    assert!(TouchCapabilityDetector::new(&touch).is_touch());

    let pointer = InMemoryCapability::new(false);
    assert!(!TouchCapabilityDetector::new(&pointer).is_touch());
}

#[test]
fn change_notification_updates_flag() {
    let environment = InMemoryCapability::new(false);
    let detector = TouchCapabilityDetector::new(&environment);
    assert!(detector.is_attached());
    assert_eq!(environment.subscriber_count(), 1);

    environment.set_matches(true);
    assert!(detector.is_touch());

    environment.set_matches(false);
    assert!(!detector.is_touch());
}

#[test]
fn detach_unsubscribes_and_keeps_last_value() {
    let environment = InMemoryCapability::new(false);
    let mut detector = TouchCapabilityDetector::new(&environment);
    environment.set_matches(true);

    detector.detach();
    assert!(!detector.is_attached());
    assert_eq!(environment.subscriber_count(), 0);

    environment.set_matches(false);
    assert!(detector.is_touch());

    detector.detach();
}

#[test]
fn detach_holds_even_when_source_keeps_stale_handlers() {
    let environment = LeakyCapability {
        matches: false,
        handlers: RefCell::new(Vec::new()),
    };
    let mut detector = TouchCapabilityDetector::new(&environment);

    environment.fire(true);
    assert!(detector.is_touch());

    detector.detach();
    environment.fire(false);
    assert!(detector.is_touch());
}

#[test]
fn dropping_detector_releases_subscription() {
    let environment = InMemoryCapability::new(true);
    {
        let _detector = TouchCapabilityDetector::new(&environment);
        assert_eq!(environment.subscriber_count(), 1);
    }
    assert_eq!(environment.subscriber_count(), 0);
}

#[test]
fn touch_primary_query_targets_coarse_pointers_without_hover() {
    assert!(TOUCH_PRIMARY_QUERY.contains("pointer: coarse"));
    assert!(TOUCH_PRIMARY_QUERY.contains("hover: none"));
}
