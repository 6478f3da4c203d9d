// ABOUTME: Arena owning every preallocated pool a search needs
// ABOUTME: States, crate-bitsets, the dedup table and the A* heap all live here

use crate::bitset;
use crate::error::ContextError;
use crate::hash_table::HashTable;
use crate::heap::Heap;
use crate::position::Pos;
use crate::problem::Problem;
use crate::state::{BitsetId, StateId, StateNode};

/// Owns the preallocated pools a search runs against: a bump-allocated
/// state arena, a bump-allocated crate-bitset arena, a dedup hash table
/// and a min-heap, all sized once from `capacity` and never resized.
///
/// A `Context` is parameterised by the *raw* (unpadded) grid dimensions;
/// every `Problem` allocated from it shares the same padded grid, so one
/// context can run many searches, against the same or different problems,
/// without reallocating.
pub struct Context {
    pub(crate) width: u16,
    pub(crate) height: u16,
    area: usize,
    bitset_size: usize,
    state_count: usize,
    states: Vec<StateNode>,
    bitset_arena: Vec<u64>,
    bitset_free: usize,
    /// Reusable holding area for "the bitset currently being expanded",
    /// sized once to `bitset_size`. Every direction tried against one
    /// popped/visited state reads this instead of cloning the parent's
    /// bitset out of the arena, so a solve's only heap allocation stays
    /// the final `actions` string.
    scratch_bitset: Vec<u64>,
    table: HashTable,
    heap: Heap,
}

impl Context {
    /// `raw_width`/`raw_height` are the puzzle's interior dimensions; the
    /// context pads them with a one-tile wall border on every side.
    /// `capacity` is the maximum number of states any single search may
    /// hold; it must be at least 1 (room for the root).
    pub fn new(raw_width: u32, raw_height: u32, capacity: usize) -> Result<Self, ContextError> {
        if capacity == 0 {
            return Err(ContextError::CapacityTooSmall);
        }
        let width = raw_width + 2;
        let height = raw_height + 2;
        let area = width as usize * height as usize;
        if width > u16::MAX as u32 || height > u16::MAX as u32 || area > u16::MAX as usize {
            return Err(ContextError::DimensionsTooLarge);
        }
        let width = width as u16;
        let height = height as u16;
        let bitset_size = bitset::word_count(area);
        let state_count = capacity + 1;

        Ok(Context {
            width,
            height,
            area,
            bitset_size,
            state_count,
            states: Vec::with_capacity(state_count),
            bitset_arena: vec![0u64; state_count * bitset_size],
            bitset_free: 0,
            scratch_bitset: vec![0u64; bitset_size],
            table: HashTable::new(state_count),
            heap: Heap::new(state_count),
        })
    }

    /// Allocates a fresh [`Problem`] sized to this context's padded grid,
    /// with every buffer in its "nothing parsed yet" state.
    #[must_use]
    pub fn allocate_problem(&self) -> Problem {
        Problem::fresh(self.width, self.height, self.area, self.bitset_size)
    }

    pub(crate) fn width(&self) -> u16 {
        self.width
    }

    /// Resets the bump pointers and clears the dedup table/heap so a new
    /// search can reuse this context's pools from scratch.
    pub(crate) fn reset(&mut self) {
        self.states.clear();
        self.bitset_free = 0;
        self.table.clear();
        self.heap.clear();
    }

    pub(crate) fn push_state(&mut self, node: StateNode) -> Option<StateId> {
        if self.states.len() >= self.state_count {
            return None;
        }
        let id = StateId(self.states.len() as u32);
        self.states.push(node);
        Some(id)
    }

    pub(crate) fn alloc_bitset_copy(&mut self, src: &[u64]) -> Option<BitsetId> {
        if self.bitset_free >= self.state_count {
            return None;
        }
        let id = BitsetId(self.bitset_free as u32);
        let start = self.bitset_free * self.bitset_size;
        self.bitset_arena[start..start + self.bitset_size].copy_from_slice(src);
        self.bitset_free += 1;
        Some(id)
    }

    /// Rolls back the most recent [`Context::alloc_bitset_copy`]. Valid
    /// only when that allocation was never committed to a live state (the
    /// child it was drawn for turned out to be a duplicate).
    pub(crate) fn rollback_bitset(&mut self) {
        self.bitset_free -= 1;
    }

    /// Copies `id`'s bitset into the scratch buffer. Call once per popped
    /// state before trying its four directions, instead of cloning the
    /// bitset out of the arena on every expansion.
    pub(crate) fn load_scratch(&mut self, id: BitsetId) {
        let start = id.0 as usize * self.bitset_size;
        let (scratch, arena) = (&mut self.scratch_bitset, &self.bitset_arena);
        scratch.copy_from_slice(&arena[start..start + self.bitset_size]);
    }

    pub(crate) fn scratch(&self) -> &[u64] {
        &self.scratch_bitset
    }

    /// Bump-allocates a fresh bitset slot and copies the scratch buffer
    /// into it; used for push expansions, which always start from the
    /// parent's (scratch-resident) crate layout.
    pub(crate) fn alloc_bitset_from_scratch(&mut self) -> Option<BitsetId> {
        if self.bitset_free >= self.state_count {
            return None;
        }
        let id = BitsetId(self.bitset_free as u32);
        let start = self.bitset_free * self.bitset_size;
        let size = self.bitset_size;
        self.bitset_arena[start..start + size].copy_from_slice(&self.scratch_bitset);
        self.bitset_free += 1;
        Some(id)
    }

    pub(crate) fn bitset(&self, id: BitsetId) -> &[u64] {
        let start = id.0 as usize * self.bitset_size;
        &self.bitset_arena[start..start + self.bitset_size]
    }

    pub(crate) fn bitset_mut(&mut self, id: BitsetId) -> &mut [u64] {
        let start = id.0 as usize * self.bitset_size;
        &mut self.bitset_arena[start..start + self.bitset_size]
    }

    pub(crate) fn table_insert(&mut self, id: StateId) {
        self.table
            .insert(id, &self.states, &self.bitset_arena, self.bitset_size);
    }

    pub(crate) fn table_lookup(&self, player: Pos, crates: &[u64]) -> Option<StateId> {
        self.table
            .lookup(player, crates, &self.states, &self.bitset_arena, self.bitset_size)
    }

    pub(crate) fn states_len(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn states_ref(&self) -> &[StateNode] {
        &self.states
    }

    pub(crate) fn state_id_at(&self, index: usize) -> StateId {
        StateId(index as u32)
    }

    pub(crate) fn state_player(&self, index: usize) -> Pos {
        self.states[index].player
    }

    pub(crate) fn state_cost(&self, index: usize) -> u16 {
        self.states[index].cost
    }

    pub(crate) fn state_crates(&self, index: usize) -> BitsetId {
        self.states[index].crates
    }

    pub(crate) fn state(&self, id: StateId) -> &StateNode {
        &self.states[id.0 as usize]
    }

    pub(crate) fn state_mut(&mut self, id: StateId) -> &mut StateNode {
        &mut self.states[id.0 as usize]
    }

    pub(crate) fn heap_insert(&mut self, id: StateId) {
        self.heap.insert(id, &mut self.states);
    }

    pub(crate) fn heap_pop(&mut self) -> Option<StateId> {
        self.heap.pop(&mut self.states)
    }

    pub(crate) fn heap_decrease_key(&mut self, id: StateId) {
        self.heap.decrease_key(id, &mut self.states);
    }
}
