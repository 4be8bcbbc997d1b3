use cozy_chess::Move;

/// What the stored score proves about the true value of the position:
/// an upper bound (search failed low), a lower bound (failed high), or the
/// exact value. Probes must respect these, or cutoffs silently invert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Upper,
    Lower,
    Exact,
}

#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub key: u64,
    pub best: Option<Move>,
    /// Remaining depth the score was searched to. Quiescence nodes store
    /// their (non-positive) depth too, so this is signed.
    pub depth: i32,
    pub score: i32,
    pub bound: Bound,
}

/// Fixed-capacity transposition table indexed by `key & (capacity - 1)`.
/// Collisions overwrite unconditionally: this is a lossy best-effort cache,
/// verified by full key comparison on probe, never a correctness structure.
/// Entries are never invalidated between searches; stale keys simply miss.
pub struct Tt {
    slots: Vec<Option<Entry>>,
    mask: u64,
}

pub const DEFAULT_CAPACITY: usize = 1 << 20;

impl Default for Tt {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Tt {
    /// `capacity` is rounded up to a power of two so indexing stays a mask.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1).next_power_of_two();
        Self { slots: vec![None; capacity], mask: capacity as u64 - 1 }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn index(&self, key: u64) -> usize {
        (key & self.mask) as usize
    }

    pub fn probe(&self, key: u64) -> Option<Entry> {
        self.slots[self.index(key)].filter(|e| e.key == key)
    }

    pub fn store(&mut self, entry: Entry) {
        let idx = self.index(entry.key);
        self.slots[idx] = Some(entry);
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}
