//! Session-scoped word cycling.
//!
//! Tracks, per learning category, which items may be shown right now.
//! A wrong answer brings the item back after exactly two other items have
//! been answered; a correct answer retires it for the rest of the round.
//! State lives only for the session and is never persisted: a page reload
//! starts a fresh cycle by design.

use std::collections::HashSet;

use crate::config;

/// Where an item currently sits in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
  /// May be shown now.
  Eligible,
  /// Hidden until this many other items have been answered.
  CoolingDown(u32),
  /// Answered correctly; retired until the round resets.
  Mastered,
}

/// Cycling state for one item. At most one per item per category.
#[derive(Debug, Clone)]
pub struct CycleState {
  pub item_id: i64,
  pub phase: ItemPhase,
  /// Consecutive wrong answers in the current round.
  pub wrong_streak: u32,
}

/// Per-category cycler. Construct one per session and category; call
/// `record_result` for every answer event in the order the user gave
/// them, since cooldown distance is measured in answer events.
#[derive(Debug, Default)]
pub struct SessionCycler {
  states: Vec<CycleState>,
  /// Items answered at least once this session; cleared on round reset.
  seen: HashSet<i64>,
}

impl SessionCycler {
  pub fn new() -> Self {
    Self::default()
  }

  /// Apply one answer event.
  ///
  /// Every *other* cooling item moves one step closer to eligible before
  /// the answered item's own state changes; the item's own answer never
  /// advances its own countdown. Ids outside any known pool still get
  /// tracking state, the cycler does not validate membership.
  pub fn record_result(&mut self, item_id: i64, is_correct: bool) {
    for state in &mut self.states {
      if state.item_id == item_id {
        continue;
      }
      if let ItemPhase::CoolingDown(n) = state.phase {
        state.phase = if n <= 1 { ItemPhase::Eligible } else { ItemPhase::CoolingDown(n - 1) };
      }
    }

    self.seen.insert(item_id);

    let idx = match self.states.iter().position(|s| s.item_id == item_id) {
      Some(idx) => idx,
      None => {
        self.states.push(CycleState { item_id, phase: ItemPhase::Eligible, wrong_streak: 0 });
        self.states.len() - 1
      }
    };
    let state = &mut self.states[idx];

    if is_correct {
      state.phase = ItemPhase::Mastered;
      state.wrong_streak = 0;
      tracing::debug!(item_id, "correct, retired for this round");
    } else {
      state.phase = ItemPhase::CoolingDown(config::RETRY_COOLDOWN);
      state.wrong_streak += 1;
      tracing::debug!(item_id, wrong_streak = state.wrong_streak, "wrong, cooling down");
    }
  }

  /// Ids the selector may pick from right now.
  ///
  /// Due retries (eligible again after a wrong answer) take absolute
  /// priority and are returned alone. Otherwise the pool minus anything
  /// cooling or mastered. Two recovery stages keep this from ever
  /// returning nothing: first all cooldowns are cleared, and if the whole
  /// pool turns out to be mastered the round is complete and everything
  /// resets. Never fails.
  pub fn available_ids(&mut self, pool: &[i64]) -> Vec<i64> {
    let retries: Vec<i64> = self
      .states
      .iter()
      .filter(|s| s.phase == ItemPhase::Eligible && s.wrong_streak > 0)
      .map(|s| s.item_id)
      .collect();
    if !retries.is_empty() {
      tracing::debug!(?retries, "due retries take priority");
      return retries;
    }

    let mut available = self.eligible_from(pool);

    if available.is_empty() {
      // Everything in play is cooling: let it all cool off at once,
      // keeping mastered items out
      tracing::debug!("no eligible items, clearing cooldowns");
      for state in &mut self.states {
        if matches!(state.phase, ItemPhase::CoolingDown(_)) {
          state.phase = ItemPhase::Eligible;
        }
      }
      available = self.eligible_from(pool);
    }

    if available.is_empty() {
      // Whole pool mastered: the round is complete, start a new one
      tracing::debug!("round complete, resetting cycle");
      self.reset();
      return pool.to_vec();
    }

    available
  }

  fn eligible_from(&self, pool: &[i64]) -> Vec<i64> {
    let blocked: HashSet<i64> = self
      .states
      .iter()
      .filter(|s| s.phase != ItemPhase::Eligible)
      .map(|s| s.item_id)
      .collect();
    pool.iter().copied().filter(|id| !blocked.contains(id)).collect()
  }

  /// Number of distinct items answered this round.
  pub fn seen_count(&self) -> usize {
    self.seen.len()
  }

  pub fn state_for(&self, item_id: i64) -> Option<&CycleState> {
    self.states.iter().find(|s| s.item_id == item_id)
  }

  /// Drop all cycling state, starting a fresh round.
  pub fn reset(&mut self) {
    self.states.clear();
    self.seen.clear();
  }
}
