//! Uniform random exercise selection over the session cycler's
//! eligible set.

use rand::Rng;
use std::collections::HashSet;

use crate::session::SessionCycler;

/// Pick the next item to drill from `pool`.
///
/// Filters the pool to the cycler's eligible ids and picks uniformly at
/// random. If the filtered set comes back empty (stale retry ids after a
/// mid-session pool change) selection falls back to the whole pool, so
/// this only returns `None` for an empty pool.
pub fn next_item_id(cycler: &mut SessionCycler, pool: &[i64]) -> Option<i64> {
  if pool.is_empty() {
    return None;
  }

  let available: HashSet<i64> = cycler.available_ids(pool).into_iter().collect();
  let candidates: Vec<i64> = pool.iter().copied().filter(|id| available.contains(id)).collect();

  let mut rng = rand::rng();
  if candidates.is_empty() {
    tracing::debug!("no candidates after filtering, falling back to full pool");
    return Some(pool[rng.random_range(0..pool.len())]);
  }
  Some(candidates[rng.random_range(0..candidates.len())])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_pool_yields_none() {
    let mut cycler = SessionCycler::new();
    assert_eq!(next_item_id(&mut cycler, &[]), None);
  }

  #[test]
  fn test_selection_comes_from_pool() {
    let mut cycler = SessionCycler::new();
    let pool = vec![1, 2, 3];
    for _ in 0..20 {
      let id = next_item_id(&mut cycler, &pool).unwrap();
      assert!(pool.contains(&id));
    }
  }

  #[test]
  fn test_cooling_item_never_selected() {
    let mut cycler = SessionCycler::new();
    let pool = vec![1, 2];

    cycler.record_result(1, false);
    for _ in 0..20 {
      assert_eq!(next_item_id(&mut cycler, &pool), Some(2));
    }
  }

  #[test]
  fn test_due_retry_selected_over_fresh_items() {
    let mut cycler = SessionCycler::new();
    let pool = vec![1, 2, 3, 4, 5, 6];

    cycler.record_result(1, false);
    cycler.record_result(2, true);
    cycler.record_result(3, true);
    for _ in 0..20 {
      assert_eq!(next_item_id(&mut cycler, &pool), Some(1));
    }
  }

  #[test]
  fn test_stale_retry_falls_back_to_pool() {
    let mut cycler = SessionCycler::new();

    // A retry becomes due for an id that is no longer in the pool
    cycler.record_result(99, false);
    cycler.record_result(1, true);
    cycler.record_result(2, true);

    let pool = vec![5];
    assert_eq!(next_item_id(&mut cycler, &pool), Some(5));
  }
}
