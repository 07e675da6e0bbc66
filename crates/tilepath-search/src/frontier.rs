//! The open set: a min-priority queue keyed by `(f_score, sequence)`.

use std::collections::BinaryHeap;

use tilepath_core::Coord;

/// Heap entry, ordered by `f` then by insertion sequence.
///
/// Sequence numbers are unique, so the order is total and two cells with the
/// same `f` always pop in the order they were queued.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    f: u32,
    seq: u64,
    idx: usize,
    pos: Coord,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Cells discovered but not yet expanded.
///
/// Each waiting cell has exactly one heap entry. Its priority and sequence
/// number are fixed when it is queued, even if its score improves later.
#[derive(Debug)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    waiting: Vec<bool>,
    next_seq: u64,
}

impl Frontier {
    /// An empty frontier for a grid with `cells` cells.
    pub(crate) fn new(cells: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            waiting: vec![false; cells],
            next_seq: 0,
        }
    }

    /// Queue cell `idx` with priority `f`, assigning the next sequence
    /// number. Returns the sequence number used.
    ///
    /// The cell must not be waiting already.
    pub(crate) fn push(&mut self, idx: usize, pos: Coord, f: u32) -> u64 {
        debug_assert!(!self.waiting[idx], "cell {pos} queued twice");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.waiting[idx] = true;
        self.heap.push(Entry { f, seq, idx, pos });
        seq
    }

    /// Remove and return the entry with the smallest `(f, seq)`.
    pub(crate) fn pop(&mut self) -> Option<(usize, Coord)> {
        let e = self.heap.pop()?;
        self.waiting[e.idx] = false;
        Some((e.idx, e.pos))
    }

    /// Whether cell `idx` is waiting in the frontier.
    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.waiting.get(idx).copied().unwrap_or(false)
    }

    /// Number of cells waiting in the frontier.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Iterate over the waiting cells, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.heap.iter().map(|e| e.pos)
    }
}
