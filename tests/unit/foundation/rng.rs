use super::*;

#[test]
fn seeded_rng_is_reproducible() {
    let mut a = SeededRng::from_seed_u64(7);
    let mut b = SeededRng::from_seed_u64(7);
    for _ in 0..32 {
        assert_eq!(a.next_unit(), b.next_unit());
    }
}

#[test]
fn seeded_rng_stays_in_unit_range() {
    let mut r = SeededRng::from_seed_u64(99);
    for _ in 0..1000 {
        let u = r.next_unit();
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn uniform_maps_linearly_and_allows_reversed_ranges() {
    let mut r = SequenceRng::new([0.0, 0.5, 0.25]);
    assert_eq!(r.uniform(10.0, 20.0), 10.0);
    assert_eq!(r.uniform(10.0, 20.0), 15.0);
    assert_eq!(r.uniform(10.0, 0.0), 7.5);
}

#[test]
fn uniform_int_never_reaches_upper_bound() {
    let mut r = SequenceRng::constant(1.0);
    assert_eq!(r.uniform_int(6, 10), 9);
    let mut r = SequenceRng::constant(0.0);
    assert_eq!(r.uniform_int(6, 10), 6);
}

#[test]
fn sequence_rng_wraps_and_counts() {
    let mut r = SequenceRng::new([0.1, 0.2]);
    assert_eq!(r.next_unit(), 0.1);
    assert_eq!(r.next_unit(), 0.2);
    assert_eq!(r.next_unit(), 0.1);
    assert_eq!(r.drawn(), 3);

    let mut empty = SequenceRng::default();
    assert_eq!(empty.next_unit(), 0.0);
}
