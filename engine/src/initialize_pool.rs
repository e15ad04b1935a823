//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use log::info;
use solana_pubkey::Pubkey;
use tidepool_core::{try_sqrt_price_to_tick_index, CoreError, MAX_SQRT_PRICE, MIN_SQRT_PRICE};

use crate::pda::get_pool_address;
use crate::state::Pool;
use crate::store::ClmmStore;
use crate::token::order_mints;

/// Create a pool for a token pair at a given tick spacing and initial price.
///
/// Mints and their vault bindings are reordered into canonical order before
/// the pool identity is derived, so both supply orders address the same pool.
/// Initializing an already existing pool is a no-op that returns the
/// existing address.
///
/// # Parameters
/// - `store` - The record store to commit the pool into
/// - `token_mint_1` - One token mint of the pair
/// - `token_mint_2` - The other token mint of the pair
/// - `tick_spacing` - The pool's tick spacing, greater than zero
/// - `initial_sqrt_price` - The starting Q64.96 sqrt price
/// - `token_vault_1` - The custody vault holding `token_mint_1` tokens
/// - `token_vault_2` - The custody vault holding `token_mint_2` tokens
///
/// # Returns
/// - The derived pool address
pub fn initialize_pool(
    store: &mut ClmmStore,
    token_mint_1: Pubkey,
    token_mint_2: Pubkey,
    tick_spacing: u16,
    initial_sqrt_price: u128,
    token_vault_1: Pubkey,
    token_vault_2: Pubkey,
) -> Result<Pubkey, CoreError> {
    if token_mint_1 == token_mint_2 {
        return Err(CoreError::SameTokenMint);
    }
    if tick_spacing == 0 {
        return Err(CoreError::InvalidTickSpacing);
    }
    if !(MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&initial_sqrt_price) {
        return Err(CoreError::PriceOutOfBounds);
    }

    let (token_mint_a, token_mint_b) = order_mints(token_mint_1, token_mint_2);
    // vault bindings follow their mints through the reorder
    let (token_vault_a, token_vault_b) = if token_mint_a == token_mint_1 {
        (token_vault_1, token_vault_2)
    } else {
        (token_vault_2, token_vault_1)
    };

    let (pool_address, bump) = get_pool_address(&token_mint_a, &token_mint_b, tick_spacing)?;
    if store.pool(&pool_address).is_some() {
        return Ok(pool_address);
    }

    let tick_current_index = try_sqrt_price_to_tick_index(initial_sqrt_price)?;
    store.upsert_pool(
        pool_address,
        Pool {
            bump,
            token_mint_a,
            token_mint_b,
            token_vault_a,
            token_vault_b,
            tick_spacing,
            liquidity: 0,
            sqrt_price: initial_sqrt_price,
            tick_current_index,
        },
    );

    info!("initialized pool {pool_address} with tick spacing {tick_spacing} at tick {tick_current_index}");
    Ok(pool_address)
}
