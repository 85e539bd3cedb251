// Host-side tests for the submit -> generate -> shown lifecycle.

use instant::Instant;
use modelgen_core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn controller() -> LifecycleController<MemoryStore> {
    LifecycleController::new(MemoryStore::new())
}

#[test]
fn starts_idle() {
    let c = controller();
    assert_eq!(c.phase(), Phase::Idle);
    assert!(!c.is_loading());
    assert!(!c.show_model());
    assert_eq!(c.prompt(), "");
}

#[test]
fn submit_sets_loading_immediately_even_with_empty_prompt() {
    let mut c = controller();
    let t0 = Instant::now();
    c.submit(t0).unwrap();
    assert!(c.is_loading());
    assert!(!c.show_model());
    assert_eq!(c.phase(), Phase::Generating);
}

#[test]
fn completes_exactly_at_the_delay() {
    let mut c = controller();
    c.set_prompt("a crystal dragon");
    let t0 = Instant::now();
    c.submit(t0).unwrap();

    assert!(c.poll(t0 + ms(2999)).is_none());
    assert!(c.is_loading());

    let done = c.poll(t0 + ms(GENERATION_DELAY_MS)).expect("generation due");
    assert_eq!(done.generation, 1);
    assert_eq!(done.notification.title, "Model loaded.");
    assert_eq!(done.notification.status, Status::Success);
    assert!(done.notification.closable);
    assert!(!c.is_loading());
    assert!(c.show_model());
    assert_eq!(c.phase(), Phase::Shown);
}

#[test]
fn notification_is_one_shot() {
    let mut c = controller();
    let t0 = Instant::now();
    c.submit(t0).unwrap();
    assert!(c.poll(t0 + ms(3000)).is_some());
    assert!(c.poll(t0 + ms(3100)).is_none());
    assert!(c.poll(t0 + ms(10_000)).is_none());
}

#[test]
fn late_first_poll_still_completes_once() {
    // Frame loop suspended well past the deadline, e.g. a hidden tab.
    let mut c = controller();
    let t0 = Instant::now();
    c.submit(t0).unwrap();
    let late = t0 + ms(600_000);
    assert!(c.is_loading());
    let done = c.poll(late).unwrap();
    assert_eq!(done.generation, 1);
    assert!(c.show_model());
    assert!(!c.is_loading());
    assert!(c.poll(late + ms(16)).is_none());
    assert_eq!(c.completed_generations(), 1);
}

#[test]
fn store_holds_fixed_placements_regardless_of_prompt() {
    for prompt in ["", "spaceship", "ünïcödé ✨"] {
        let mut c = controller();
        c.set_prompt(prompt);
        let t0 = Instant::now();
        c.submit(t0).unwrap();
        c.poll(t0 + ms(3000)).unwrap();

        let list = try_read_placements(c.store()).unwrap();
        assert_eq!(list.positions(), vec![[0.0; 3], [0.0; 3]]);
        let rotations = list.rotations();
        assert_eq!(rotations[0], [0.0; 3]);
        assert!((rotations[1][1] - 1.5708).abs() < 1e-4);
        assert_eq!(rotations[1][0], 0.0);
        assert_eq!(rotations[1][2], 0.0);
    }
}

#[test]
fn store_entries_are_json_arrays_of_triples() {
    let mut c = controller();
    let t0 = Instant::now();
    c.submit(t0).unwrap();

    let raw = c.store().get(POSITIONS_KEY).unwrap();
    let positions: Vec<[f64; 3]> = serde_json::from_str(&raw).unwrap();
    assert_eq!(positions, vec![[0.0; 3], [0.0; 3]]);

    let raw = c.store().get(ROTATIONS_KEY).unwrap();
    let rotations: Vec<[f64; 3]> = serde_json::from_str(&raw).unwrap();
    assert_eq!(rotations.len(), 2);
    assert_eq!(rotations[0], [0.0; 3]);
    assert!((rotations[1][1] - 1.5708).abs() < 1e-4);
}

#[test]
fn completion_toast_expires_at_its_duration() {
    let mut c = controller();
    let t0 = Instant::now();
    c.submit(t0).unwrap();
    let done = c.poll(t0 + ms(3000)).unwrap();
    let n = done.notification;
    assert_eq!(n.title, "Model loaded.");
    assert_eq!(n.status, Status::Success);
    assert_eq!(n.duration, ms(NOTIFICATION_MS));

    let shown_at = t0 + ms(3000);
    assert!(!n.expired(shown_at, shown_at));
    assert!(!n.expired(shown_at, shown_at + n.duration - ms(1)));
    assert!(n.expired(shown_at, shown_at + n.duration));
    assert!(n.expired(shown_at, shown_at + n.duration + ms(1)));
    // A clock reading earlier than the show time counts as no time elapsed.
    assert!(!n.expired(shown_at + ms(10), shown_at));
}

#[test]
fn second_submit_while_pending_is_rejected_and_keeps_deadline() {
    let mut c = controller();
    let t0 = Instant::now();
    c.submit(t0).unwrap();

    let err = c.submit(t0 + ms(1000)).unwrap_err();
    assert_eq!(err, SubmitError::GenerationPending { remaining: ms(2000) });

    // Original deadline still applies; no restart.
    assert!(c.poll(t0 + ms(3000)).is_some());
    assert_eq!(c.completed_generations(), 1);
}

#[test]
fn resubmit_after_shown_keeps_model_visible() {
    let mut c = controller();
    let t0 = Instant::now();
    c.submit(t0).unwrap();
    c.poll(t0 + ms(3000)).unwrap();

    let t1 = t0 + ms(5000);
    c.submit(t1).unwrap();
    assert!(c.is_loading());
    assert!(c.show_model());
    assert_eq!(c.phase(), Phase::Generating);

    let done = c.poll(t1 + ms(3000)).unwrap();
    assert_eq!(done.generation, 2);
    assert!(c.show_model());
}

#[test]
fn cancel_returns_to_rest_without_notification() {
    let mut c = controller();
    let t0 = Instant::now();
    c.submit(t0).unwrap();
    assert!(c.cancel());
    assert!(!c.is_loading());
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.poll(t0 + ms(4000)).is_none());
    assert!(!c.cancel());
}

#[test]
fn remaining_counts_down() {
    let mut c = controller();
    let t0 = Instant::now();
    assert_eq!(c.remaining(t0), None);
    c.submit(t0).unwrap();
    assert_eq!(c.remaining(t0 + ms(500)), Some(ms(2500)));
    assert_eq!(c.remaining(t0 + ms(9000)), Some(Duration::ZERO));
}

#[test]
fn configured_delay_is_honoured() {
    let cfg = DemoConfig {
        generation_delay_ms: 10,
        ..DemoConfig::default()
    };
    let mut c = LifecycleController::with_config(MemoryStore::new(), &cfg);
    let t0 = Instant::now();
    c.submit(t0).unwrap();
    assert!(c.poll(t0 + ms(9)).is_none());
    assert!(c.poll(t0 + ms(10)).is_some());
}

struct FullStore;

impl ScratchStore for FullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }
    fn remove(&mut self, _key: &str) {}
}

#[test]
fn store_write_failure_does_not_fail_generation() {
    let mut c = LifecycleController::new(FullStore);
    let t0 = Instant::now();
    c.submit(t0).unwrap();
    assert!(c.poll(t0 + ms(3000)).is_some());
    assert!(SceneState::from_store(c.store(), &DemoConfig::default()).is_empty());
}
