/// One counter on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub id: u64,
    pub name: String,
    pub value: i64,
}

impl Counter {
    fn with_id(id: u64) -> Self {
        Self {
            id,
            name: default_name(id),
            value: 0,
        }
    }
}

/// Default display name for a freshly created counter.
///
/// Names derive from the assigned id, so they stay unique among live
/// counters for as long as ids are never reused.
fn default_name(id: u64) -> String {
    format!("Counter_{}", id + 1)
}

/// The ordered collection of counters, keyed by id.
///
/// Ids are handed out as `max existing id + 1` (0 when empty), so removals
/// leave gaps but a live id is never reissued within a session. Every
/// operation is total: mutating an absent id is a silent no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterBoard {
    counters: Vec<Counter>,
}

/// Number of counters a fresh board starts with.
pub const SEED_COUNT: u64 = 5;

impl CounterBoard {
    /// The initial board: counters 0..SEED_COUNT, all at zero.
    pub fn seeded() -> Self {
        let counters = (0..SEED_COUNT).map(Counter::with_id).collect();
        Self { counters }
    }

    /// The id the next added counter will get.
    pub fn next_id(&self) -> u64 {
        self.counters
            .iter()
            .map(|counter| counter.id)
            .max()
            .map_or(0, |id| id + 1)
    }

    /// Append a new counter with a default name and zero value.
    /// Returns the assigned id.
    pub fn add(&mut self) -> u64 {
        let id = self.next_id();
        self.counters.push(Counter::with_id(id));
        id
    }

    /// Remove the counter with the given id. Removing an id that is no
    /// longer present leaves the board unchanged.
    /// Returns whether a counter was actually removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.counters.len();
        self.counters.retain(|counter| counter.id != id);
        self.counters.len() != before
    }

    /// Bump the counter's value by one. Wraps at the i64 boundary.
    pub fn increment(&mut self, id: u64) {
        if let Some(counter) = self.get_mut(id) {
            counter.value = counter.value.wrapping_add(1);
        }
    }

    /// Drop the counter's value by one. Wraps at the i64 boundary.
    pub fn decrement(&mut self, id: u64) {
        if let Some(counter) = self.get_mut(id) {
            counter.value = counter.value.wrapping_sub(1);
        }
    }

    pub fn get(&self, id: u64) -> Option<&Counter> {
        self.counters.iter().find(|counter| counter.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut Counter> {
        self.counters.iter_mut().find(|counter| counter.id == id)
    }

    /// Counters in board order.
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seeded_board_has_five_zeroed_counters() {
        let board = CounterBoard::seeded();
        assert_eq!(board.len(), 5);
        for (index, counter) in board.counters().iter().enumerate() {
            assert_eq!(counter.id, index as u64);
            assert_eq!(counter.name, format!("Counter_{}", index + 1));
            assert_eq!(counter.value, 0);
        }
    }

    #[test]
    fn add_assigns_max_id_plus_one() {
        let mut board = CounterBoard::seeded();
        assert_eq!(board.add(), 5);
        assert_eq!(board.add(), 6);

        let mut empty = CounterBoard::default();
        assert_eq!(empty.add(), 0);
    }

    #[test]
    fn add_after_removal_does_not_reuse_ids() {
        let mut board = CounterBoard::seeded();
        assert!(board.remove(0));
        // Remaining ids are {1, 2, 3, 4}, so the next id is 5, not 0.
        assert_eq!(board.add(), 5);
        assert!(board.get(0).is_none());
    }

    #[test]
    fn added_counter_starts_fresh() {
        let mut board = CounterBoard::seeded();
        let id = board.add();
        let counter = board.get(id).unwrap();
        assert_eq!(counter.id, 5);
        assert_eq!(counter.name, "Counter_6");
        assert_eq!(counter.value, 0);
        assert_eq!(board.len(), 6);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut board = CounterBoard::seeded();
        assert!(board.remove(2));
        let snapshot = board.clone();
        assert!(!board.remove(2));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn remove_leaves_other_counters_untouched() {
        let mut board = CounterBoard::seeded();
        board.increment(1);
        board.increment(3);
        board.remove(3);

        assert!(board.get(3).is_none());
        assert_eq!(board.len(), 4);
        assert_eq!(board.get(1).unwrap().value, 1);
        for id in [0, 2, 4] {
            assert_eq!(board.get(id).unwrap().value, 0);
            assert_eq!(board.get(id).unwrap().name, format!("Counter_{}", id + 1));
        }
    }

    #[test]
    fn increment_and_decrement_are_inverses() {
        let mut board = CounterBoard::seeded();
        board.increment(4);
        board.decrement(4);
        assert_eq!(board.get(4).unwrap().value, 0);

        board.decrement(4);
        board.increment(4);
        assert_eq!(board.get(4).unwrap().value, 0);
    }

    #[test]
    fn values_go_negative_without_clamping() {
        let mut board = CounterBoard::seeded();
        board.decrement(0);
        board.decrement(0);
        assert_eq!(board.get(0).unwrap().value, -2);
    }

    #[test]
    fn value_arithmetic_wraps_at_the_boundary() {
        let mut board = CounterBoard::default();
        let id = board.add();
        board.get_mut(id).unwrap().value = i64::MAX;
        board.increment(id);
        assert_eq!(board.get(id).unwrap().value, i64::MIN);
    }

    #[test]
    fn mutating_an_absent_id_is_a_no_op() {
        let mut board = CounterBoard::seeded();
        let snapshot = board.clone();
        board.increment(99);
        board.decrement(99);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn double_increment_only_touches_the_target() {
        let mut board = CounterBoard::seeded();
        // "Counter_3" is id 2.
        board.increment(2);
        board.increment(2);

        assert_eq!(board.get(2).unwrap().value, 2);
        for id in [0, 1, 3, 4] {
            assert_eq!(board.get(id).unwrap().value, 0);
        }
    }

    #[test]
    fn default_names_never_collide() {
        let mut board = CounterBoard::seeded();
        board.remove(0);
        board.remove(3);
        board.add();
        board.add();

        let mut names: Vec<_> = board
            .counters()
            .iter()
            .map(|counter| counter.name.clone())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), board.len());
    }
}
