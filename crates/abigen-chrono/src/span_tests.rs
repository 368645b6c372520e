use crate::{TICKS_PER_SECOND, TimeSpan};

#[test]
fn from_secs_scales_to_ticks() {
    assert_eq!(TimeSpan::from_secs(0), TimeSpan::ZERO);
    assert_eq!(TimeSpan::from_secs(1).ticks(), 10_000_000);
    assert_eq!(TimeSpan::from_secs(-2).ticks(), -20_000_000);
}

#[test]
fn from_secs_saturates() {
    assert_eq!(TimeSpan::from_secs(i64::MAX), TimeSpan::MAX);
    assert_eq!(TimeSpan::from_secs(i64::MIN), TimeSpan::MIN);
}

#[test]
fn whole_secs_floors() {
    assert_eq!(TimeSpan::from_ticks(15_000_000).whole_secs(), 1);
    assert_eq!(TimeSpan::from_ticks(9_999_999).whole_secs(), 0);
    assert_eq!(TimeSpan::from_ticks(-1).whole_secs(), -1);
    assert_eq!(TimeSpan::from_ticks(-5_000_000).whole_secs(), -1);
    assert_eq!(TimeSpan::from_ticks(-10_000_000).whole_secs(), -1);
    assert_eq!(TimeSpan::from_ticks(-10_000_001).whole_secs(), -2);
}

#[test]
fn subsec_ticks_is_non_negative() {
    assert_eq!(TimeSpan::from_ticks(15_000_000).subsec_ticks(), 5_000_000);
    assert_eq!(TimeSpan::from_ticks(-1).subsec_ticks(), TICKS_PER_SECOND - 1);

    let span = TimeSpan::from_ticks(-12_345_678);
    assert_eq!(
        span.whole_secs() * TICKS_PER_SECOND + span.subsec_ticks(),
        span.ticks()
    );
}

#[test]
fn arithmetic() {
    let a = TimeSpan::from_ticks(30);
    let b = TimeSpan::from_ticks(12);

    assert_eq!(a + b, TimeSpan::from_ticks(42));
    assert_eq!(a - b, TimeSpan::from_ticks(18));
    assert_eq!(-a, TimeSpan::from_ticks(-30));
    assert!(b < a);
}

#[test]
fn checked_and_saturating() {
    assert_eq!(TimeSpan::MAX.checked_add(TimeSpan::from_ticks(1)), None);
    assert_eq!(
        TimeSpan::ZERO.checked_add(TimeSpan::from_ticks(1)),
        Some(TimeSpan::from_ticks(1))
    );
    assert_eq!(TimeSpan::MAX.saturating_add(TimeSpan::MAX), TimeSpan::MAX);
    assert_eq!(TimeSpan::MIN.saturating_sub(TimeSpan::MAX), TimeSpan::MIN);
}

#[test]
fn checked_sub_and_neg() {
    assert_eq!(TimeSpan::MIN.checked_sub(TimeSpan::from_ticks(1)), None);
    assert_eq!(TimeSpan::MIN.checked_neg(), None);
    assert_eq!(TimeSpan::MAX.checked_neg(), Some(TimeSpan::from_ticks(-i64::MAX)));
}

#[test]
#[should_panic(expected = "overflow when negating time span")]
fn neg_min_panics() {
    let _ = -TimeSpan::MIN;
}

#[test]
#[should_panic(expected = "overflow when adding time spans")]
fn add_overflow_panics() {
    let _ = TimeSpan::MAX + TimeSpan::from_ticks(1);
}

#[test]
#[should_panic(expected = "overflow when subtracting time spans")]
fn sub_overflow_panics() {
    let _ = TimeSpan::MIN - TimeSpan::from_ticks(1);
}
