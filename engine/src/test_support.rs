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
use tidepool_core::tick_array_start_tick_index;

use crate::custody::InMemoryTokenLedger;
use crate::initialize_pool::initialize_pool;
use crate::open_position::OpenPositionParams;
use crate::pda::get_tick_array_address;
use crate::store::ClmmStore;

/// The Q64.96 sqrt price at tick 2000.
pub(crate) const SQRT_PRICE_AT_TICK_2000: u128 = 87560223330309670419052669889;

pub(crate) struct TestFixture {
    pub store: ClmmStore,
    pub ledger: InMemoryTokenLedger,
    pub pool_address: Pubkey,
    pub owner: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub source_a: Pubkey,
    pub source_b: Pubkey,
}

impl TestFixture {
    pub fn tick_array_address(&self, start_tick_index: i32) -> Pubkey {
        get_tick_array_address(&self.pool_address, start_tick_index).unwrap().0
    }
}

/// One initialized pool with both owner source accounts funded at 1_000_000.
pub(crate) fn setup_pool(tick_spacing: u16, sqrt_price: u128) -> TestFixture {
    let mut store = ClmmStore::new();
    let mut ledger = InMemoryTokenLedger::new();

    let pool_address = initialize_pool(
        &mut store,
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        tick_spacing,
        sqrt_price,
        Pubkey::new_unique(),
        Pubkey::new_unique(),
    )
    .unwrap();
    let pool = store.pool(&pool_address).unwrap();
    let vault_a = pool.token_vault_a;
    let vault_b = pool.token_vault_b;

    let owner = Pubkey::new_unique();
    let source_a = Pubkey::new_unique();
    let source_b = Pubkey::new_unique();
    ledger.credit(source_a, 1_000_000);
    ledger.credit(source_b, 1_000_000);

    TestFixture {
        store,
        ledger,
        pool_address,
        owner,
        vault_a,
        vault_b,
        source_a,
        source_b,
    }
}

/// Open-position params with the correct tick-array starts precomputed.
pub(crate) fn open_params(fixture: &TestFixture, tick_lower_index: i32, tick_upper_index: i32, liquidity: u128) -> OpenPositionParams {
    let tick_spacing = fixture.store.pool(&fixture.pool_address).unwrap().tick_spacing;
    OpenPositionParams {
        owner: fixture.owner,
        tick_lower_index,
        tick_upper_index,
        liquidity,
        tick_array_lower_start: tick_array_start_tick_index(tick_lower_index, tick_spacing),
        tick_array_upper_start: tick_array_start_tick_index(tick_upper_index, tick_spacing),
        token_vault_a: fixture.vault_a,
        token_vault_b: fixture.vault_b,
        source_a: fixture.source_a,
        source_b: fixture.source_b,
    }
}
