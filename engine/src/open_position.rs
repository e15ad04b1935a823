//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use log::debug;
use solana_pubkey::Pubkey;
use tidepool_core::{tick_array_start_tick_index, try_get_token_amounts_for_liquidity, try_tick_index_to_sqrt_price, CoreError};

use crate::custody::{TokenCustody, TransferPair};
use crate::liquidity::{check_position_range, try_stage_boundary_ticks};
use crate::pda::get_position_address;
use crate::state::Position;
use crate::store::ClmmStore;

#[derive(Copy, Clone, Debug)]
pub struct OpenPositionParams {
    pub owner: Pubkey,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub liquidity: u128,
    /// Caller's view of the boundary tick-array start indexes; checked
    /// against recomputation.
    pub tick_array_lower_start: i32,
    pub tick_array_upper_start: i32,
    /// Caller's view of the pool vaults; checked against the pool record.
    pub token_vault_a: Pubkey,
    pub token_vault_b: Pubkey,
    /// Owner token accounts funding the position.
    pub source_a: Pubkey,
    pub source_b: Pubkey,
}

/// Open a position, or add liquidity to the position with the same
/// `(owner, pool, tick_lower, tick_upper)` identity.
///
/// The required token amounts are computed from the pool's current price and
/// round up, then every record update is staged before custody moves the
/// tokens. Custody is the last fallible step: once it succeeds the staged
/// pool, tick-array and position records are committed infallibly, so a
/// failure anywhere leaves the store untouched.
///
/// # Returns
/// - The derived position address
pub fn open_position(store: &mut ClmmStore, custody: &mut dyn TokenCustody, pool_address: Pubkey, params: &OpenPositionParams) -> Result<Pubkey, CoreError> {
    let mut pool = store.pool(&pool_address).ok_or(CoreError::PoolNotFound)?.clone();

    if params.liquidity == 0 {
        return Err(CoreError::ZeroLiquidity);
    }
    check_position_range(params.tick_lower_index, params.tick_upper_index, pool.tick_spacing)?;
    if params.token_vault_a != pool.token_vault_a || params.token_vault_b != pool.token_vault_b {
        return Err(CoreError::VaultMismatch);
    }

    // the caller-supplied start indexes must agree with recomputation
    let lower_start_index = tick_array_start_tick_index(params.tick_lower_index, pool.tick_spacing);
    let upper_start_index = tick_array_start_tick_index(params.tick_upper_index, pool.tick_spacing);
    if params.tick_array_lower_start != lower_start_index || params.tick_array_upper_start != upper_start_index {
        return Err(CoreError::TickArrayMismatch);
    }

    // amounts owed by the owner round up
    let sqrt_price_lower = try_tick_index_to_sqrt_price(params.tick_lower_index)?;
    let sqrt_price_upper = try_tick_index_to_sqrt_price(params.tick_upper_index)?;
    let amounts = try_get_token_amounts_for_liquidity(pool.sqrt_price, sqrt_price_lower, sqrt_price_upper, params.liquidity, true)?;

    let liquidity_delta = i128::try_from(params.liquidity).map_err(|_| CoreError::ArithmeticOverflow)?;
    let staged_arrays = try_stage_boundary_ticks(
        store,
        &pool_address,
        &pool,
        params.tick_lower_index,
        params.tick_upper_index,
        liquidity_delta,
    )?;

    let (position_address, _) = get_position_address(&params.owner, &pool_address, params.tick_lower_index, params.tick_upper_index)?;
    let mut position = store.position(&position_address).cloned().unwrap_or(Position {
        owner: params.owner,
        pool: pool_address,
        tick_lower_index: params.tick_lower_index,
        tick_upper_index: params.tick_upper_index,
        liquidity: 0,
    });
    position.liquidity = position.liquidity.checked_add(params.liquidity).ok_or(CoreError::ArithmeticOverflow)?;
    pool.liquidity = pool.liquidity.checked_add(params.liquidity).ok_or(CoreError::ArithmeticOverflow)?;

    custody.transfer_pair(&TransferPair {
        amount_a: amounts.a,
        amount_b: amounts.b,
        source_a: params.source_a,
        source_b: params.source_b,
        destination_a: pool.token_vault_a,
        destination_b: pool.token_vault_b,
    })?;

    for (address, tick_array) in staged_arrays {
        store.upsert_tick_array(address, tick_array);
    }
    store.upsert_position(position_address, position);
    store.upsert_pool(pool_address, pool);

    debug!(
        "opened position {position_address} in pool {pool_address}: ticks [{}, {}), liquidity {}, deposits ({}, {})",
        params.tick_lower_index, params.tick_upper_index, params.liquidity, amounts.a, amounts.b
    );
    Ok(position_address)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_support::{open_params, setup_pool, SQRT_PRICE_AT_TICK_2000};
    use tidepool_core::SQRT_PRICE_ONE;

    #[test]
    fn test_open_position() {
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let params = open_params(&fixture, 0, 4000, 100000);

        let position_address = open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params).unwrap();

        let position = fixture.store.position(&position_address).unwrap();
        assert_eq!(position.owner, fixture.owner);
        assert_eq!(position.liquidity, 100000);
        assert_eq!(fixture.store.pool(&fixture.pool_address).unwrap().liquidity, 100000);

        // the pool sits exactly on the lower bound, so funding is token A only
        assert_eq!(fixture.ledger.balance(&fixture.vault_a), 18127);
        assert_eq!(fixture.ledger.balance(&fixture.vault_b), 0);
        assert_eq!(fixture.ledger.balance(&fixture.source_a), 1_000_000 - 18127);
        assert_eq!(fixture.ledger.balance(&fixture.source_b), 1_000_000);
    }

    #[test]
    fn test_open_position_updates_boundary_ticks() {
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let params = open_params(&fixture, 0, 4000, 100000);
        open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params).unwrap();

        let lower_array = fixture.store.tick_array(&fixture.tick_array_address(0)).unwrap();
        assert_eq!(lower_array.ticks[0].liquidity_net, 100000);
        assert_eq!(lower_array.ticks[0].liquidity_gross, 100000);
        assert!(lower_array.ticks[0].initialized);

        let upper_start = tick_array_start_tick_index(4000, 20);
        let upper_array = fixture.store.tick_array(&fixture.tick_array_address(upper_start)).unwrap();
        let upper_offset = ((4000 - upper_start) / 20) as usize;
        assert_eq!(upper_array.ticks[upper_offset].liquidity_net, -100000);
        assert_eq!(upper_array.ticks[upper_offset].liquidity_gross, 100000);
    }

    #[test]
    fn test_open_position_in_range_funds_both_tokens() {
        let mut fixture = setup_pool(20, SQRT_PRICE_AT_TICK_2000);
        let params = open_params(&fixture, 0, 4000, 100000);
        open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params).unwrap();

        assert_eq!(fixture.ledger.balance(&fixture.vault_a), 8611);
        assert_eq!(fixture.ledger.balance(&fixture.vault_b), 10517);
    }

    #[test]
    fn test_open_position_one_sided() {
        // entirely above the current price: token A only
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let params = open_params(&fixture, 4000, 8000, 100000);
        open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params).unwrap();
        assert_eq!(fixture.ledger.balance(&fixture.vault_a), 14841);
        assert_eq!(fixture.ledger.balance(&fixture.vault_b), 0);

        // entirely below the current price: token B only
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let params = open_params(&fixture, -8000, -4000, 100000);
        open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params).unwrap();
        assert_eq!(fixture.ledger.balance(&fixture.vault_a), 0);
        assert_eq!(fixture.ledger.balance(&fixture.vault_b), 14841);
    }

    #[test]
    fn test_open_position_twice_adds_liquidity() {
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let params_1 = open_params(&fixture, 0, 4000, 60000);
        let params_2 = open_params(&fixture, 0, 4000, 40000);

        let address_1 = open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params_1).unwrap();
        let address_2 = open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params_2).unwrap();

        assert_eq!(address_1, address_2);
        assert_eq!(fixture.store.position_count(), 1);
        assert_eq!(fixture.store.position(&address_1).unwrap().liquidity, 100000);
        assert_eq!(fixture.store.pool(&fixture.pool_address).unwrap().liquidity, 100000);
    }

    #[test]
    fn test_open_position_same_array_boundaries() {
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let params = open_params(&fixture, 0, 1000, 100000);
        open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params).unwrap();

        let array = fixture.store.tick_array(&fixture.tick_array_address(0)).unwrap();
        assert_eq!(array.ticks[0].liquidity_net, 100000);
        assert_eq!(array.ticks[50].liquidity_net, -100000);
        assert_eq!(fixture.ledger.balance(&fixture.vault_a), 4877);
    }

    #[test]
    fn test_open_position_rejects_bad_ranges() {
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);

        let params = open_params(&fixture, 4000, 0, 100000);
        assert_eq!(
            open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params),
            Err(CoreError::InvalidRange),
        );

        let params = open_params(&fixture, 0, 0, 100000);
        assert_eq!(
            open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params),
            Err(CoreError::InvalidRange),
        );

        // 4010 is not a multiple of the tick spacing
        let params = open_params(&fixture, 0, 4010, 100000);
        assert_eq!(
            open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params),
            Err(CoreError::InvalidRange),
        );
    }

    #[test]
    fn test_open_position_rejects_zero_liquidity() {
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let params = open_params(&fixture, 0, 4000, 0);
        assert_eq!(
            open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params),
            Err(CoreError::ZeroLiquidity),
        );
    }

    #[test]
    fn test_open_position_rejects_stale_tick_array_start() {
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let mut params = open_params(&fixture, 0, 4000, 100000);
        params.tick_array_upper_start = 0;
        assert_eq!(
            open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params),
            Err(CoreError::TickArrayMismatch),
        );
    }

    #[test]
    fn test_open_position_rejects_foreign_vault() {
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let mut params = open_params(&fixture, 0, 4000, 100000);
        params.token_vault_a = Pubkey::new_unique();
        assert_eq!(
            open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params),
            Err(CoreError::VaultMismatch),
        );
    }

    #[test]
    fn test_open_position_unknown_pool() {
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let params = open_params(&fixture, 0, 4000, 100000);
        assert_eq!(
            open_position(&mut fixture.store, &mut fixture.ledger, Pubkey::new_unique(), &params),
            Err(CoreError::PoolNotFound),
        );
    }

    #[test]
    fn test_open_position_failed_custody_leaves_store_unchanged() {
        let mut fixture = setup_pool(20, SQRT_PRICE_ONE);
        let mut params = open_params(&fixture, 0, 4000, 100000);
        // an unfunded source account makes custody the failing step
        params.source_a = Pubkey::new_unique();

        assert_eq!(
            open_position(&mut fixture.store, &mut fixture.ledger, fixture.pool_address, &params),
            Err(CoreError::InsufficientFunds),
        );

        assert_eq!(fixture.store.position_count(), 0);
        assert_eq!(fixture.store.pool(&fixture.pool_address).unwrap().liquidity, 0);
        assert!(fixture.store.tick_array(&fixture.tick_array_address(0)).is_none());
        assert_eq!(fixture.ledger.balance(&fixture.vault_a), 0);
        assert_eq!(fixture.ledger.balance(&fixture.vault_b), 0);
    }
}
