//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::collections::HashMap;

use solana_pubkey::Pubkey;

use crate::state::{Pool, Position, TickArray};

/// The explicit record store the engine operates against.
///
/// Every record is keyed by its derived identity, so lookups never need a
/// secondary index. Operations read records through the accessors, stage
/// updated copies, and commit them through the crate-internal upserts only
/// after every fallible step has succeeded.
#[derive(Debug, Default)]
pub struct ClmmStore {
    pools: HashMap<Pubkey, Pool>,
    tick_arrays: HashMap<Pubkey, TickArray>,
    positions: HashMap<Pubkey, Position>,
}

impl ClmmStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self, address: &Pubkey) -> Option<&Pool> {
        self.pools.get(address)
    }

    pub fn tick_array(&self, address: &Pubkey) -> Option<&TickArray> {
        self.tick_arrays.get(address)
    }

    pub fn position(&self, address: &Pubkey) -> Option<&Position> {
        self.positions.get(address)
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    pub(crate) fn upsert_pool(&mut self, address: Pubkey, pool: Pool) {
        self.pools.insert(address, pool);
    }

    pub(crate) fn upsert_tick_array(&mut self, address: Pubkey, tick_array: TickArray) {
        self.tick_arrays.insert(address, tick_array);
    }

    pub(crate) fn upsert_position(&mut self, address: Pubkey, position: Position) {
        self.positions.insert(address, position);
    }

    pub(crate) fn remove_position(&mut self, address: &Pubkey) {
        self.positions.remove(address);
    }
}
