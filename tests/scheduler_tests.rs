// Host-side tests for the virtual-time scheduler.

use deck_core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn removal(ids: &mut EffectIds) -> (Deferred, EffectId) {
    let id = ids.next_id();
    (Deferred::RemoveEffect(id), id)
}

#[test]
fn tasks_release_in_due_order_then_insertion_order() {
    let mut ids = EffectIds::default();
    let (late, late_id) = removal(&mut ids);
    let (early_a, a_id) = removal(&mut ids);
    let (early_b, b_id) = removal(&mut ids);

    let mut sched = ManualScheduler::new();
    sched.schedule(ms(300), late);
    sched.schedule(ms(100), early_a);
    sched.schedule(ms(100), early_b);

    assert_eq!(
        sched.advance(ms(1_000)),
        vec![
            Deferred::RemoveEffect(a_id),
            Deferred::RemoveEffect(b_id),
            Deferred::RemoveEffect(late_id),
        ]
    );
    assert_eq!(sched.now(), ms(1_000));
    assert!(sched.is_idle());
}

#[test]
fn nothing_is_released_early() {
    let mut sched = ManualScheduler::new();
    sched.schedule(ms(10), Deferred::SpawnConfetti);
    assert!(sched.advance(ms(9)).is_empty());
    assert_eq!(sched.pending(), 1);
    assert_eq!(sched.advance(ms(1)), vec![Deferred::SpawnConfetti]);
}

#[test]
fn delays_are_relative_to_the_virtual_clock() {
    let mut sched = ManualScheduler::new();
    sched.advance(ms(500));
    sched.schedule(ms(100), Deferred::SpawnConfetti);
    assert!(sched.pop_due(ms(599)).is_none());
    assert_eq!(sched.pop_due(ms(600)), Some(Deferred::SpawnConfetti));
    assert_eq!(sched.now(), ms(600));
}

#[test]
fn zero_delay_runs_on_next_step() {
    let mut sched = ManualScheduler::new();
    sched.schedule(Duration::ZERO, Deferred::SpawnConfetti);
    assert_eq!(sched.advance(Duration::ZERO), vec![Deferred::SpawnConfetti]);
}

#[test]
fn clock_never_moves_backwards() {
    let mut sched = ManualScheduler::new();
    sched.advance_to(ms(50));
    sched.advance_to(ms(20));
    assert_eq!(sched.now(), ms(50));
}
