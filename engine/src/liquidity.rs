//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;
use tidepool_core::{
    is_tick_index_aligned, is_tick_index_in_bounds, tick_array_start_tick_index, try_tick_array_offset, CoreError,
};

use crate::pda::get_tick_array_address;
use crate::state::{Pool, TickArray};
use crate::store::ClmmStore;

/// Validate a position tick range against the pool's tick spacing.
pub(crate) fn check_position_range(tick_lower_index: i32, tick_upper_index: i32, tick_spacing: u16) -> Result<(), CoreError> {
    if tick_lower_index >= tick_upper_index
        || !is_tick_index_in_bounds(tick_lower_index)
        || !is_tick_index_in_bounds(tick_upper_index)
        || !is_tick_index_aligned(tick_lower_index, tick_spacing)
        || !is_tick_index_aligned(tick_upper_index, tick_spacing)
    {
        return Err(CoreError::InvalidRange);
    }
    Ok(())
}

/// Stage the boundary tick updates for a liquidity change over a range.
///
/// Resolves the tick arrays containing both boundaries, creating them lazily
/// when absent, and applies the net/gross updates to copies. When both
/// boundaries live in the same array, one staged record carries both updates
/// so the later commit cannot clobber one with the other. Nothing in the
/// store is mutated.
pub(crate) fn try_stage_boundary_ticks(
    store: &ClmmStore,
    pool_address: &Pubkey,
    pool: &Pool,
    tick_lower_index: i32,
    tick_upper_index: i32,
    liquidity_delta: i128,
) -> Result<Vec<(Pubkey, TickArray)>, CoreError> {
    let lower_start_index = tick_array_start_tick_index(tick_lower_index, pool.tick_spacing);
    let upper_start_index = tick_array_start_tick_index(tick_upper_index, pool.tick_spacing);
    let (lower_address, _) = get_tick_array_address(pool_address, lower_start_index)?;
    let (upper_address, _) = get_tick_array_address(pool_address, upper_start_index)?;

    let lower_offset = try_tick_array_offset(lower_start_index, tick_lower_index, pool.tick_spacing)?;
    let upper_offset = try_tick_array_offset(upper_start_index, tick_upper_index, pool.tick_spacing)?;

    let mut lower_array = store
        .tick_array(&lower_address)
        .cloned()
        .unwrap_or_else(|| TickArray::new(*pool_address, lower_start_index));
    lower_array.ticks[lower_offset] = lower_array.ticks[lower_offset].try_apply_liquidity_update(liquidity_delta, false)?;

    if lower_address == upper_address {
        lower_array.ticks[upper_offset] = lower_array.ticks[upper_offset].try_apply_liquidity_update(liquidity_delta, true)?;
        Ok(vec![(lower_address, lower_array)])
    } else {
        let mut upper_array = store
            .tick_array(&upper_address)
            .cloned()
            .unwrap_or_else(|| TickArray::new(*pool_address, upper_start_index));
        upper_array.ticks[upper_offset] = upper_array.ticks[upper_offset].try_apply_liquidity_update(liquidity_delta, true)?;
        Ok(vec![(lower_address, lower_array), (upper_address, upper_array)])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_support::setup_pool;

    #[test]
    fn test_check_position_range() {
        assert_eq!(check_position_range(0, 4000, 20), Ok(()));
        assert_eq!(check_position_range(4000, 0, 20), Err(CoreError::InvalidRange));
        assert_eq!(check_position_range(0, 0, 20), Err(CoreError::InvalidRange));
        assert_eq!(check_position_range(0, 4010, 20), Err(CoreError::InvalidRange));
        assert_eq!(check_position_range(-10, 4000, 20), Err(CoreError::InvalidRange));
        assert_eq!(check_position_range(0, 500000, 20), Err(CoreError::InvalidRange));
    }

    #[test]
    fn test_stage_boundary_ticks_distinct_arrays() {
        let fixture = setup_pool(20, 1 << 96);
        let pool = fixture.store.pool(&fixture.pool_address).unwrap().clone();

        // spacing 20 spans 1760 ticks per array: 0 and 4000 land in different arrays
        let staged = try_stage_boundary_ticks(&fixture.store, &fixture.pool_address, &pool, 0, 4000, 100000).unwrap();
        assert_eq!(staged.len(), 2);
        assert_eq!(staged[0].1.ticks[0].liquidity_net, 100000);
        assert_eq!(staged[0].1.ticks[0].liquidity_gross, 100000);
        let upper_offset = (4000 - staged[1].1.start_tick_index) as usize / 20;
        assert_eq!(staged[1].1.ticks[upper_offset].liquidity_net, -100000);
        assert_eq!(staged[1].1.ticks[upper_offset].liquidity_gross, 100000);
    }

    #[test]
    fn test_stage_boundary_ticks_same_array() {
        let fixture = setup_pool(20, 1 << 96);
        let pool = fixture.store.pool(&fixture.pool_address).unwrap().clone();

        // both boundaries fall inside the array starting at 0
        let staged = try_stage_boundary_ticks(&fixture.store, &fixture.pool_address, &pool, 0, 1000, 100000).unwrap();
        assert_eq!(staged.len(), 1);
        let array = &staged[0].1;
        assert_eq!(array.ticks[0].liquidity_net, 100000);
        assert_eq!(array.ticks[50].liquidity_net, -100000);
        assert_eq!(array.ticks[50].liquidity_gross, 100000);
    }
}
