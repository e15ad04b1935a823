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
use tidepool_core::PoolFacade;

/// A pool record: canonical pair identity, price state, global liquidity and
/// vault bindings. Mints and vaults are stored in canonical order, so the
/// record is independent of the order the caller supplied them in.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Pool {
    pub bump: u8,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_vault_b: Pubkey,
    pub tick_spacing: u16,
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub tick_current_index: i32,
}

impl Pool {
    pub fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
        let mut data = data;
        Self::deserialize(&mut data)
    }
}

impl From<&Pool> for PoolFacade {
    fn from(pool: &Pool) -> Self {
        PoolFacade {
            tick_spacing: pool.tick_spacing,
            liquidity: pool.liquidity,
            sqrt_price: pool.sqrt_price,
            tick_current_index: pool.tick_current_index,
        }
    }
}
