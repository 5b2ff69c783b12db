use std::time::{Duration, Instant};

use toastline::{Phase, ToastEvent, ToastId, ToastManager, ToastSpec, ToastTimings};

const ENTER: Duration = Duration::from_millis(10);
const EXIT: Duration = Duration::from_millis(300);

fn timings() -> ToastTimings {
    ToastTimings::new()
        .enter_delay(ENTER)
        .exit_delay(EXIT)
        .default_duration(Duration::from_secs(4))
}

fn removed_ids(events: &[ToastEvent]) -> Vec<ToastId> {
    events
        .iter()
        .filter_map(|e| match e {
            ToastEvent::Removed(id) => Some(*id),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Unit state machine
// =============================================================================

#[test]
fn test_new_toast_starts_entering() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();

    let id = manager.add(ToastSpec::success("Saved"), t0);

    assert_eq!(manager.list().len(), 1);
    let record = manager.get(id).unwrap();
    assert_eq!(record.phase(), Phase::Entering);
    assert_eq!(record.kind().to_string(), "success");
    assert_eq!(record.message(), "Saved");
}

#[test]
fn test_enter_delay_fires_exactly_once() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    let id = manager.add(ToastSpec::info("hi"), t0);

    // Just before the enter deadline: still entering.
    manager.tick(t0 + ENTER - Duration::from_millis(1));
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Entering);

    manager.tick(t0 + ENTER);
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Visible);

    // Repeated ticks do not re-process the transition.
    manager.tick(t0 + ENTER);
    manager.take_events();
    manager.tick(t0 + ENTER + Duration::from_millis(1));
    assert!(manager.take_events().is_empty());
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Visible);
}

#[test]
fn test_auto_dismiss_window() {
    let duration = Duration::from_millis(4000);
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    let id = manager.add(ToastSpec::success("Saved").with_duration(duration), t0);

    manager.tick(t0 + ENTER);
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Visible);

    // No earlier than `duration` after becoming visible.
    manager.tick(t0 + ENTER + duration - Duration::from_millis(1));
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Visible);

    manager.tick(t0 + ENTER + duration);
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Exiting);
}

#[test]
fn test_exit_delay_is_constant_and_exact() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();

    // Two toasts with wildly different kinds and durations.
    let short = manager.add(ToastSpec::info("a").with_duration(Duration::from_millis(50)), t0);
    let long = manager.add(
        ToastSpec::error("b").with_duration(Duration::from_millis(800)),
        t0,
    );

    let short_exit = t0 + ENTER + Duration::from_millis(50);
    manager.tick(short_exit);
    assert_eq!(manager.get(short).unwrap().phase(), Phase::Exiting);

    manager.tick(short_exit + EXIT - Duration::from_millis(1));
    assert!(manager.get(short).is_some());
    manager.tick(short_exit + EXIT);
    assert!(manager.get(short).is_none());

    let long_exit = t0 + ENTER + Duration::from_millis(800);
    manager.tick(long_exit + EXIT - Duration::from_millis(1));
    assert!(manager.get(long).is_some());
    manager.tick(long_exit + EXIT);
    assert!(manager.get(long).is_none());
}

#[test]
fn test_zero_duration_never_auto_dismisses() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    let id = manager.add(ToastSpec::error("Failed").with_duration(Duration::ZERO), t0);

    manager.tick(t0 + ENTER);
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Visible);

    // Nothing is scheduled; hours later it is still visible.
    assert_eq!(manager.next_deadline(), None);
    manager.tick(t0 + Duration::from_secs(3600));
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Visible);
}

#[test]
fn test_explicit_dismiss_while_visible() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    let id = manager.add(ToastSpec::error("Failed").with_duration(Duration::ZERO), t0);
    manager.tick(t0 + ENTER);

    let t_dismiss = t0 + Duration::from_millis(500);
    manager.dismiss(id, t_dismiss);
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Exiting);

    manager.tick(t_dismiss + EXIT - Duration::from_millis(1));
    assert!(manager.get(id).is_some());
    manager.tick(t_dismiss + EXIT);
    assert!(manager.get(id).is_none());
}

#[test]
fn test_dismiss_cancels_pending_auto_dismiss() {
    let duration = Duration::from_millis(4000);
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    let id = manager.add(ToastSpec::info("x").with_duration(duration), t0);
    manager.tick(t0 + ENTER);

    let t_dismiss = t0 + Duration::from_millis(100);
    manager.dismiss(id, t_dismiss);
    manager.take_events();

    // The old auto-dismiss instant passes without effect; the toast is
    // already gone by then (exit ran from the dismissal instant).
    manager.tick(t0 + ENTER + duration);
    let events = manager.take_events();
    assert_eq!(removed_ids(&events), vec![id]);
    assert!(manager.get(id).is_none());
}

#[test]
fn test_dismiss_while_entering_goes_to_exiting() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    let id = manager.add(ToastSpec::info("x"), t0);

    manager.dismiss(id, t0 + Duration::from_millis(2));
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Exiting);

    // The stale enter deadline must not resurrect the toast.
    manager.tick(t0 + ENTER);
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Exiting);
}

#[test]
fn test_double_dismiss_produces_one_removal() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    let id = manager.add(ToastSpec::info("x").with_duration(Duration::ZERO), t0);
    manager.tick(t0 + ENTER);

    let t_dismiss = t0 + Duration::from_millis(20);
    manager.dismiss(id, t_dismiss);
    manager.dismiss(id, t_dismiss + Duration::from_millis(5));
    manager.tick(t_dismiss + EXIT + Duration::from_millis(10));

    let events = manager.take_events();
    assert_eq!(removed_ids(&events), vec![id]);
}

#[test]
fn test_non_dismissible_ignores_user_dismiss() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    let id = manager.add(
        ToastSpec::warning("locked")
            .with_duration(Duration::ZERO)
            .dismissible(false),
        t0,
    );
    manager.tick(t0 + ENTER);

    manager.dismiss(id, t0 + Duration::from_millis(50));
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Visible);

    // Caller-side removal still applies.
    manager.remove(id);
    assert!(manager.get(id).is_none());
}

#[test]
fn test_late_tick_advances_phases_in_order() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    let id = manager.add(ToastSpec::info("x").with_duration(Duration::from_millis(100)), t0);

    // One tick far past every deadline: the unit still walks through
    // Visible, Exiting, Dismissed sequentially.
    manager.tick(t0 + Duration::from_secs(10));
    assert!(manager.get(id).is_none());

    let phases: Vec<Phase> = manager
        .take_events()
        .into_iter()
        .filter_map(|e| match e {
            ToastEvent::PhaseChanged { phase, .. } => Some(phase),
            _ => None,
        })
        .collect();
    assert_eq!(phases, vec![Phase::Visible, Phase::Exiting, Phase::Dismissed]);
}

// =============================================================================
// Collection manager
// =============================================================================

#[test]
fn test_insertion_order_preserved() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();

    let a = manager.add(ToastSpec::info("a"), t0);
    let b = manager.add(ToastSpec::info("b"), t0);
    let c = manager.add(ToastSpec::info("c"), t0);

    let ids: Vec<ToastId> = manager.list().iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![a, b, c]);

    manager.remove(b);
    let ids: Vec<ToastId> = manager.list().iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    manager.add(ToastSpec::info("a"), t0);
    manager.take_events();

    manager.remove(ToastId::next());
    assert_eq!(manager.list().len(), 1);
    assert!(manager.take_events().is_empty());
}

#[test]
fn test_caller_supplied_id_is_used() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();

    let id = ToastId::from_raw(42);
    let returned = manager.add(ToastSpec::info("a").with_id(id), t0);
    assert_eq!(returned, id);
    assert!(manager.get(id).is_some());
}

#[test]
fn test_duplicate_id_add_is_ignored() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();

    let id = ToastId::from_raw(7);
    manager.add(ToastSpec::info("first").with_id(id), t0);
    manager.add(ToastSpec::info("second").with_id(id), t0);

    assert_eq!(manager.list().len(), 1);
    assert_eq!(manager.get(id).unwrap().message(), "first");
}

#[test]
fn test_capacity_evicts_oldest() {
    let mut manager = ToastManager::with_timings(timings().max_visible(2));
    let t0 = Instant::now();

    let a = manager.add(ToastSpec::info("a").with_duration(Duration::ZERO), t0);
    let b = manager.add(ToastSpec::info("b").with_duration(Duration::ZERO), t0);
    manager.tick(t0 + ENTER);

    let c = manager.add(ToastSpec::info("c"), t0 + Duration::from_millis(20));

    // Oldest was pushed into its exit transition, bypassing its timer.
    assert_eq!(manager.get(a).unwrap().phase(), Phase::Exiting);
    assert_eq!(manager.get(b).unwrap().phase(), Phase::Visible);
    assert_eq!(manager.get(c).unwrap().phase(), Phase::Entering);

    // A second overflowing add evicts the next-oldest, not the same one.
    let d = manager.add(ToastSpec::info("d"), t0 + Duration::from_millis(25));
    assert_eq!(manager.get(b).unwrap().phase(), Phase::Exiting);
    assert_eq!(manager.get(d).unwrap().phase(), Phase::Entering);
}

#[test]
fn test_clear_removes_everything_with_events() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    let a = manager.add(ToastSpec::info("a"), t0);
    let b = manager.add(ToastSpec::info("b"), t0);
    manager.take_events();

    manager.clear();
    assert!(manager.is_empty());
    assert_eq!(removed_ids(&manager.take_events()), vec![a, b]);
}

#[test]
fn test_next_deadline_tracks_earliest() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();
    assert_eq!(manager.next_deadline(), None);

    manager.add(ToastSpec::info("a"), t0);
    assert_eq!(manager.next_deadline(), Some(t0 + ENTER));

    let later = t0 + Duration::from_millis(5);
    manager.add(ToastSpec::info("b"), later);
    // Still the first toast's enter deadline.
    assert_eq!(manager.next_deadline(), Some(t0 + ENTER));
}

// =============================================================================
// Spec scenarios
// =============================================================================

#[test]
fn test_scenario_success_toast_full_life() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();

    let id = manager.add(
        ToastSpec::success("Saved").with_duration(Duration::from_millis(4000)),
        t0,
    );
    assert_eq!(manager.list().len(), 1);
    assert_eq!(manager.list()[0].phase(), Phase::Entering);

    manager.tick(t0 + ENTER);
    assert_eq!(manager.list()[0].phase(), Phase::Visible);

    manager.tick(t0 + ENTER + Duration::from_millis(4000));
    assert_eq!(manager.list()[0].phase(), Phase::Exiting);

    manager.tick(t0 + ENTER + Duration::from_millis(4000) + EXIT);
    assert!(manager.list().is_empty());

    let events = manager.take_events();
    assert_eq!(removed_ids(&events), vec![id]);
}

#[test]
fn test_scenario_persistent_error_toast() {
    let mut manager = ToastManager::with_timings(timings());
    let t0 = Instant::now();

    let id = manager.add(
        ToastSpec::error("Failed")
            .with_duration(Duration::ZERO)
            .dismissible(true),
        t0,
    );
    manager.tick(t0 + ENTER);

    // Left alone it never goes away.
    manager.tick(t0 + Duration::from_secs(600));
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Visible);

    // Explicit dismissal exits immediately and removes after the delay.
    let t_dismiss = t0 + Duration::from_secs(601);
    manager.dismiss(id, t_dismiss);
    assert_eq!(manager.get(id).unwrap().phase(), Phase::Exiting);
    manager.tick(t_dismiss + EXIT);
    assert!(manager.get(id).is_none());
}
