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
use tidepool_core::{try_get_token_amounts_for_liquidity, try_tick_index_to_sqrt_price, CoreError, TokenAmounts};

use crate::custody::{TokenCustody, TransferPair};
use crate::liquidity::try_stage_boundary_ticks;
use crate::store::ClmmStore;

#[derive(Copy, Clone, Debug)]
pub struct DecreaseLiquidityParams {
    pub owner: Pubkey,
    pub liquidity: u128,
    /// Caller's view of the pool vaults; checked against the pool record.
    pub token_vault_a: Pubkey,
    pub token_vault_b: Pubkey,
    /// Owner token accounts receiving the withdrawn tokens.
    pub destination_a: Pubkey,
    pub destination_b: Pubkey,
}

/// Withdraw liquidity from a position.
///
/// The mirror image of opening: owed amounts are recomputed from the pool's
/// current price and round down, the boundary ticks and global liquidity are
/// decremented, and the tokens leave the pool vaults. The staged-commit order
/// matches `open_position`, so a failure at any step leaves the store
/// untouched.
///
/// # Returns
/// - The token amounts paid out to the owner
pub fn decrease_liquidity(
    store: &mut ClmmStore,
    custody: &mut dyn TokenCustody,
    position_address: Pubkey,
    params: &DecreaseLiquidityParams,
) -> Result<TokenAmounts, CoreError> {
    let mut position = store.position(&position_address).ok_or(CoreError::PositionNotFound)?.clone();
    if position.owner != params.owner {
        return Err(CoreError::Unauthorized);
    }
    if params.liquidity == 0 {
        return Err(CoreError::ZeroLiquidity);
    }

    let pool_address = position.pool;
    let mut pool = store.pool(&pool_address).ok_or(CoreError::PoolNotFound)?.clone();
    if params.token_vault_a != pool.token_vault_a || params.token_vault_b != pool.token_vault_b {
        return Err(CoreError::VaultMismatch);
    }

    // amounts paid out to the owner round down
    let sqrt_price_lower = try_tick_index_to_sqrt_price(position.tick_lower_index)?;
    let sqrt_price_upper = try_tick_index_to_sqrt_price(position.tick_upper_index)?;
    let amounts = try_get_token_amounts_for_liquidity(pool.sqrt_price, sqrt_price_lower, sqrt_price_upper, params.liquidity, false)?;

    let liquidity_delta = i128::try_from(params.liquidity).map_err(|_| CoreError::ArithmeticOverflow)?;
    let staged_arrays = try_stage_boundary_ticks(
        store,
        &pool_address,
        &pool,
        position.tick_lower_index,
        position.tick_upper_index,
        -liquidity_delta,
    )?;

    position.liquidity = position.liquidity.checked_sub(params.liquidity).ok_or(CoreError::ArithmeticOverflow)?;
    pool.liquidity = pool.liquidity.checked_sub(params.liquidity).ok_or(CoreError::ArithmeticOverflow)?;

    custody.transfer_pair(&TransferPair {
        amount_a: amounts.a,
        amount_b: amounts.b,
        source_a: pool.token_vault_a,
        source_b: pool.token_vault_b,
        destination_a: params.destination_a,
        destination_b: params.destination_b,
    })?;

    for (address, tick_array) in staged_arrays {
        store.upsert_tick_array(address, tick_array);
    }
    store.upsert_position(position_address, position);
    store.upsert_pool(pool_address, pool);

    debug!(
        "decreased position {position_address} by {}, withdrawals ({}, {})",
        params.liquidity, amounts.a, amounts.b
    );
    Ok(amounts)
}
