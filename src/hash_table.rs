// ABOUTME: Open-addressed hash set keyed by (player position, crate bitset)
// ABOUTME: Sized once to the context's state budget; never resizes

use std::hash::Hasher;

use siphasher::sip::SipHasher24;

use crate::bitset;
use crate::position::Pos;
use crate::state::{BitsetId, StateId, StateNode};

pub(crate) struct HashTable {
    slots: Vec<Option<StateId>>,
    mask: usize,
}

impl HashTable {
    /// `state_count` is the maximum number of distinct states a search can
    /// produce; the table is sized generously above it so linear probing
    /// always terminates well under a full table.
    pub(crate) fn new(state_count: usize) -> Self {
        let size = (state_count.max(1) * 2).next_power_of_two().max(16);
        HashTable {
            slots: vec![None; size],
            mask: size - 1,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub(crate) fn lookup(
        &self,
        player: Pos,
        crates: &[u64],
        states: &[StateNode],
        bitset_arena: &[u64],
        bitset_size: usize,
    ) -> Option<StateId> {
        let mut index = (hash_key(player, crates) as usize) & self.mask;
        loop {
            match self.slots[index] {
                None => return None,
                Some(id) => {
                    let node = &states[id.0 as usize];
                    if node.player == player
                        && bitset::equals(bitset_slice(bitset_arena, bitset_size, node.crates), crates)
                    {
                        return Some(id);
                    }
                }
            }
            index = (index + 1) & self.mask;
        }
    }

    pub(crate) fn insert(
        &mut self,
        id: StateId,
        states: &[StateNode],
        bitset_arena: &[u64],
        bitset_size: usize,
    ) {
        let node = &states[id.0 as usize];
        let crates = bitset_slice(bitset_arena, bitset_size, node.crates);
        let h = hash_key(node.player, crates);
        let mut index = (h as usize) & self.mask;
        while self.slots[index].is_some() {
            index = (index + 1) & self.mask;
        }
        self.slots[index] = Some(id);
    }
}

fn bitset_slice(bitset_arena: &[u64], bitset_size: usize, id: BitsetId) -> &[u64] {
    let start = id.0 as usize * bitset_size;
    &bitset_arena[start..start + bitset_size]
}

/// Short integer hash of the player position, XORed with a SIP-style hash
/// of the crate bitset.
fn hash_key(player: Pos, crates: &[u64]) -> u64 {
    let player_hash = splitmix64(player as u64);
    let mut hasher = SipHasher24::new();
    for &word in crates {
        hasher.write_u64(word);
    }
    let bits_hash = hasher.finish();
    bits_hash ^ player_hash.rotate_left(1)
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
