use pulse_bar::core::random;
use pulse_bar::{PulseError, SeededRandom, ThreadRandom};

#[test]
fn test_ten_thousand_draws_cover_the_range() {
    let mut rng = ThreadRandom;
    let mut counts = [0u32; 5];

    for _ in 0..10_000 {
        let value = random::in_range(&mut rng, 1, 5).unwrap();
        assert!((1..=5).contains(&value), "drew {} outside [1, 5]", value);
        counts[(value - 1) as usize] += 1;
    }

    for (i, count) in counts.iter().enumerate() {
        assert!(*count > 0, "value {} never drawn in 10k attempts", i + 1);
    }
}

#[test]
fn test_degenerate_range_always_returns_the_bound() {
    let mut rng = ThreadRandom;
    for _ in 0..100 {
        assert_eq!(random::in_range(&mut rng, 5, 5).unwrap(), 5);
    }
}

#[test]
fn test_inverted_range_fails_loudly() {
    let mut rng = SeededRandom::new(1);
    let result = random::in_range(&mut rng, 10, 1);
    assert!(matches!(
        result,
        Err(PulseError::InvalidRange { min: 10, max: 1 })
    ));
}

#[test]
fn test_seeded_draws_replay_identically() {
    let mut a = SeededRandom::new(99);
    let mut b = SeededRandom::new(99);

    for _ in 0..500 {
        assert_eq!(
            random::in_range(&mut a, 1, 5).unwrap(),
            random::in_range(&mut b, 1, 5).unwrap()
        );
    }
}
