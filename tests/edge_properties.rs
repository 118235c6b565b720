use padlisten::{Button, ButtonEvent, ButtonTracker, EventKind};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

/// Edge kinds a tracker should report for `samples`, starting from released.
fn expected(samples: &[bool]) -> Vec<Option<EventKind>> {
    let mut previous = false;
    samples
        .iter()
        .map(|&current| {
            let kind = EventKind::from_edge(previous, current);
            previous = current;
            kind
        })
        .collect()
}

fn recording_tracker(button: Button) -> (ButtonTracker, Arc<Mutex<Vec<EventKind>>>) {
    let mut tracker = ButtonTracker::new(button);
    let seen = Arc::new(Mutex::new(Vec::new()));
    for kind in EventKind::ALL {
        let seen = seen.clone();
        tracker.subscribe(kind, move |ev: &ButtonEvent| seen.lock().unwrap().push(ev.kind));
    }
    (tracker, seen)
}

proptest! {
    #[test]
    fn events_follow_the_edge_table(samples in prop::collection::vec(any::<bool>(), 0..64)) {
        let (mut tracker, seen) = recording_tracker(Button::A);

        let returned: Vec<_> = samples.iter().map(|&s| tracker.update(s).unwrap()).collect();
        let want = expected(&samples);
        prop_assert_eq!(&returned, &want);

        let fired: Vec<EventKind> = want.into_iter().flatten().collect();
        let seen = seen.lock().unwrap();
        prop_assert_eq!(&*seen, &fired);

        if let Some(&last) = samples.last() {
            prop_assert_eq!(tracker.is_pressed(), last);
        }
    }

    #[test]
    fn repeated_sample_never_edges(samples in prop::collection::vec(any::<bool>(), 1..32)) {
        let (mut tracker, _) = recording_tracker(Button::B);
        for s in samples {
            tracker.update(s).unwrap();
            let again = tracker.update(s).unwrap();
            prop_assert_eq!(again, if s { Some(EventKind::Held) } else { None });
        }
    }

    #[test]
    fn every_registration_fires_once(n in 1usize..12) {
        let mut tracker = ButtonTracker::new(Button::Y);
        let order = Arc::new(Mutex::new(Vec::new()));
        for i in 0..n {
            let order = order.clone();
            tracker.subscribe(EventKind::Released, move |_| order.lock().unwrap().push(i));
        }
        tracker.update(true).unwrap();
        prop_assert!(order.lock().unwrap().is_empty());
        tracker.update(false).unwrap();
        let order = order.lock().unwrap();
        prop_assert_eq!(&*order, &(0..n).collect::<Vec<_>>());
    }
}

#[test]
fn press_hold_release_scenario() {
    let (mut tracker, seen) = recording_tracker(Button::X);

    tracker.update(true).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![EventKind::Pressed]);
    assert!(tracker.is_pressed());

    tracker.update(true).unwrap();
    assert_eq!(seen.lock().unwrap().last(), Some(&EventKind::Held));

    tracker.update(false).unwrap();
    assert_eq!(seen.lock().unwrap().last(), Some(&EventKind::Released));

    tracker.update(false).unwrap();
    assert_eq!(seen.lock().unwrap().len(), 3);
}
