use space_shooter::entities::EntityKind;
use space_shooter::pool::{Handle, Pool};

fn pool() -> Pool {
    Pool::new(EntityKind::Asteroid, 20)
}

// ── construction ──────────────────────────────────────────────────────────────

#[test]
fn new_pool_is_empty_with_fixed_capacity() {
    let p = pool();
    assert_eq!(p.capacity(), 20);
    assert_eq!(p.active_count(), 0);
    assert!(!p.is_exhausted());
    assert_eq!(p.kind(), EntityKind::Asteroid);
}

// ── acquire ───────────────────────────────────────────────────────────────────

#[test]
fn acquire_places_active_entity() {
    let mut p = pool();
    let h = p.acquire(120.0, 0.0).unwrap();
    assert_eq!(h, Handle(0));
    let e = p.get(h).unwrap();
    assert!(e.active);
    assert_eq!((e.x, e.y), (120.0, 0.0));
    assert_eq!(e.age_ms, 0);
    assert_eq!(p.active_count(), 1);
}

#[test]
fn acquire_fails_softly_when_full() {
    let mut p = pool();
    for _ in 0..20 {
        assert!(p.acquire(0.0, 0.0).is_some());
    }
    assert!(p.is_exhausted());
    assert!(p.acquire(5.0, 5.0).is_none());
    assert_eq!(p.active_count(), 20);
}

#[test]
fn zero_capacity_pool_never_acquires() {
    let mut p = Pool::new(EntityKind::Projectile, 0);
    assert!(p.is_exhausted());
    assert!(p.acquire(1.0, 1.0).is_none());
    assert_eq!(p.active_count(), 0);
}

#[test]
fn acquire_reuses_first_free_slot() {
    let mut p = pool();
    let a = p.acquire(1.0, 1.0).unwrap();
    let b = p.acquire(2.0, 2.0).unwrap();
    let _c = p.acquire(3.0, 3.0).unwrap();
    p.release(b);
    p.release(a);
    assert_eq!(p.acquire(9.0, 9.0), Some(a));
    assert_eq!(p.acquire(9.0, 9.0), Some(b));
}

#[test]
fn reacquired_slot_is_reinitialised() {
    let mut p = pool();
    let h = p.acquire(1.0, 1.0).unwrap();
    {
        let e = p.get_mut(h).unwrap();
        e.vy = 200.0;
        e.angular_velocity = 90.0;
        e.age_ms = 4000;
    }
    p.release(h);
    let h2 = p.acquire(50.0, 60.0).unwrap();
    assert_eq!(h, h2);
    let e = p.get(h2).unwrap();
    assert_eq!(e.vy, 0.0);
    assert_eq!(e.angular_velocity, 0.0);
    assert_eq!(e.age_ms, 0);
    assert_eq!((e.x, e.y), (50.0, 60.0));
}

// ── release ───────────────────────────────────────────────────────────────────

#[test]
fn release_is_idempotent() {
    let mut p = pool();
    let h = p.acquire(0.0, 0.0).unwrap();
    assert!(p.release(h));
    assert!(!p.release(h));
    assert_eq!(p.active_count(), 0);
}

#[test]
fn release_of_unknown_handle_is_noop() {
    let mut p = pool();
    assert!(!p.release(Handle(99)));
    assert_eq!(p.active_count(), 0);
}

#[test]
fn released_entity_is_hidden() {
    let mut p = pool();
    let h = p.acquire(0.0, 0.0).unwrap();
    p.release(h);
    assert!(p.get(h).is_none());
    assert!(p.get_mut(h).is_none());
    assert_eq!(p.iter_active().count(), 0);
}

// ── iteration ─────────────────────────────────────────────────────────────────

#[test]
fn iter_active_skips_free_slots_in_order() {
    let mut p = pool();
    let handles: Vec<Handle> = (0..4).map(|i| p.acquire(i as f32, 0.0).unwrap()).collect();
    p.release(handles[1]);
    let seen: Vec<Handle> = p.iter_active().map(|(h, _)| h).collect();
    assert_eq!(seen, vec![Handle(0), Handle(2), Handle(3)]);
    assert_eq!(p.handles(), seen);
}
