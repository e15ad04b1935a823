//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;
use tidepool_core::{CoreError, TickArrayFacade, TickFacade, TICK_ARRAY_SIZE};

/// Per-tick liquidity bookkeeping. A tick with `liquidity_gross == 0` is
/// logically uninitialized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, BorshSerialize, BorshDeserialize)]
pub struct Tick {
    pub initialized: bool,
    pub liquidity_net: i128,
    pub liquidity_gross: u128,
}

impl Tick {
    /// Stage the liquidity update for this tick as a position boundary.
    ///
    /// A lower boundary adds the delta to `liquidity_net` (crossed upward
    /// brings the liquidity in), an upper boundary subtracts it. Both
    /// boundaries add the delta to `liquidity_gross`. Returns the updated
    /// tick without mutating `self`, so a failed operation stages nothing.
    pub fn try_apply_liquidity_update(&self, liquidity_delta: i128, is_upper: bool) -> Result<Tick, CoreError> {
        let liquidity_net = if is_upper {
            self.liquidity_net.checked_sub(liquidity_delta)
        } else {
            self.liquidity_net.checked_add(liquidity_delta)
        }
        .ok_or(CoreError::ArithmeticOverflow)?;
        let liquidity_gross = self
            .liquidity_gross
            .checked_add_signed(liquidity_delta)
            .ok_or(CoreError::ArithmeticOverflow)?;
        Ok(Tick {
            initialized: liquidity_gross > 0,
            liquidity_net,
            liquidity_gross,
        })
    }
}

/// A fixed-size contiguous window of tick slots belonging to one pool.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TickArray {
    pub pool: Pubkey,
    pub start_tick_index: i32,
    pub ticks: [Tick; TICK_ARRAY_SIZE],
}

impl TickArray {
    /// A fresh array with every slot uninitialized.
    pub fn new(pool: Pubkey, start_tick_index: i32) -> Self {
        Self {
            pool,
            start_tick_index,
            ticks: [Tick::default(); TICK_ARRAY_SIZE],
        }
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
        let mut data = data;
        Self::deserialize(&mut data)
    }
}

impl From<&Tick> for TickFacade {
    fn from(tick: &Tick) -> Self {
        TickFacade {
            initialized: tick.initialized,
            liquidity_net: tick.liquidity_net,
            liquidity_gross: tick.liquidity_gross,
        }
    }
}

impl From<&TickArray> for TickArrayFacade {
    fn from(tick_array: &TickArray) -> Self {
        let mut ticks = [TickFacade::default(); TICK_ARRAY_SIZE];
        for (slot, tick) in tick_array.ticks.iter().enumerate() {
            ticks[slot] = tick.into();
        }
        TickArrayFacade {
            start_tick_index: tick_array.start_tick_index,
            ticks,
        }
    }
}
