//! SM-2 review interval arithmetic.
//!
//! A failing answer (quality < 3) resets spacing but leaves the ease
//! factor untouched; only a pass adjusts ease. The new interval is
//! computed from the ease in effect before this answer's adjustment.

use crate::config;

const MIN_EASE_FACTOR: f64 = 1.3;

pub struct Sm2Result {
  pub ease_factor: f64,
  pub interval_days: i64,
  pub repetitions: i64,
}

pub fn calculate_review(
  quality: u8,
  current_ease_factor: f64,
  current_interval: i64,
  current_repetitions: i64,
) -> Sm2Result {
  let quality = quality.min(5);

  if quality < config::PASS_THRESHOLD {
    // Failed review: spacing starts over, ease keeps its value
    return Sm2Result {
      ease_factor: current_ease_factor,
      interval_days: 1,
      repetitions: 0,
    };
  }

  let repetitions = current_repetitions + 1;
  let interval_days = match repetitions {
    1 => 1,
    2 => 6,
    _ => ((current_interval as f64) * current_ease_factor).round() as i64,
  };

  // EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floored at 1.3
  let q = quality as f64;
  let ease_delta = 0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02);
  let ease_factor = (current_ease_factor + ease_delta).max(MIN_EASE_FACTOR);

  Sm2Result {
    ease_factor,
    interval_days,
    repetitions,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_first_pass_interval_is_one_day() {
    let result = calculate_review(4, 2.5, 1, 0);
    assert_eq!(result.repetitions, 1);
    assert_eq!(result.interval_days, 1);
    // Quality 4 leaves ease exactly unchanged
    assert!((result.ease_factor - 2.5).abs() < 1e-9);
  }

  #[test]
  fn test_second_pass_interval_is_six_days() {
    let result = calculate_review(4, 2.5, 1, 1);
    assert_eq!(result.repetitions, 2);
    assert_eq!(result.interval_days, 6);
  }

  #[test]
  fn test_third_pass_multiplies_by_ease() {
    // 6 * 2.5 = 15
    let result = calculate_review(4, 2.5, 6, 2);
    assert_eq!(result.repetitions, 3);
    assert_eq!(result.interval_days, 15);
  }

  #[test]
  fn test_interval_sequence_from_fresh_record() {
    // Three quality-4 passes: 1, 6, 15 with ease pinned at 2.5
    let mut ease = 2.5;
    let mut interval = 1;
    let mut reps = 0;
    let mut seen = Vec::new();

    for _ in 0..3 {
      let result = calculate_review(4, ease, interval, reps);
      ease = result.ease_factor;
      interval = result.interval_days;
      reps = result.repetitions;
      seen.push(interval);
    }

    assert_eq!(seen, vec![1, 6, 15]);
    assert!((ease - 2.5).abs() < 1e-9);
  }

  #[test]
  fn test_quality_five_raises_ease() {
    let result = calculate_review(5, 2.5, 1, 1);
    assert!((result.ease_factor - 2.6).abs() < 1e-9);
    assert_eq!(result.interval_days, 6);
  }

  #[test]
  fn test_failure_resets_spacing_but_not_ease() {
    let result = calculate_review(1, 2.1, 40, 3);
    assert_eq!(result.repetitions, 0);
    assert_eq!(result.interval_days, 1);
    assert!((result.ease_factor - 2.1).abs() < 1e-9);
  }

  #[test]
  fn test_ease_floor_under_repeated_barely_passing_answers() {
    // Quality 3 passes but shrinks ease by 0.14 each time
    let mut ease = 2.5;
    let mut interval = 1;
    let mut reps = 0;

    for _ in 0..20 {
      let result = calculate_review(3, ease, interval, reps);
      ease = result.ease_factor;
      interval = result.interval_days;
      reps = result.repetitions;
    }

    assert!(ease >= MIN_EASE_FACTOR);
    assert!((ease - MIN_EASE_FACTOR).abs() < 1e-9);
  }

  #[test]
  fn test_quality_clamped_to_five() {
    let clamped = calculate_review(200, 2.5, 1, 0);
    let exact = calculate_review(5, 2.5, 1, 0);
    assert!((clamped.ease_factor - exact.ease_factor).abs() < 1e-9);
    assert_eq!(clamped.interval_days, exact.interval_days);
  }

  #[test]
  fn test_interval_uses_ease_before_adjustment() {
    // Quality 3 on the third pass: interval uses the incoming 2.5,
    // not the post-answer 2.36
    let result = calculate_review(3, 2.5, 6, 2);
    assert_eq!(result.interval_days, 15);
    assert!((result.ease_factor - 2.36).abs() < 1e-9);
  }

  #[test]
  fn test_interval_grows_across_many_passes() {
    let mut ease = 2.5;
    let mut interval = 1;
    let mut reps = 0;

    for _ in 0..5 {
      let result = calculate_review(4, ease, interval, reps);
      ease = result.ease_factor;
      interval = result.interval_days;
      reps = result.repetitions;
    }

    assert!(interval > 30);
  }
}
