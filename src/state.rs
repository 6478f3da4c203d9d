// ABOUTME: Arena-indexed search-state representation
// ABOUTME: StateId/BitsetId replace raw pointers with Vec indices

/// Index into `Context::states`. Stands in for the parent pointer a
/// pointer-based implementation would carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct StateId(pub u32);

/// Index of one crate-bitset slot inside `Context::bitset_arena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BitsetId(pub u32);

/// One expanded search node. `heap_index` is `-1` while the node is not
/// resident in the A* heap (BFS never uses it).
#[derive(Debug, Clone, Copy)]
pub(crate) struct StateNode {
    pub parent: Option<StateId>,
    pub action: Option<u8>,
    pub player: crate::position::Pos,
    pub crates: BitsetId,
    pub cost: u16,
    pub heuristic: u32,
    pub priority: u32,
    pub heap_index: i32,
}
