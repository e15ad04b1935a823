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
use tidepool_core::PositionFacade;

/// A user's liquidity claim over a tick range inside one pool. Identity is
/// derived from `(owner, pool, tick_lower_index, tick_upper_index)`, so the
/// same tuple always addresses the same record.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Position {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub liquidity: u128,
}

impl Position {
    pub fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
        let mut data = data;
        Self::deserialize(&mut data)
    }
}

impl From<&Position> for PositionFacade {
    fn from(position: &Position) -> Self {
        PositionFacade {
            liquidity: position.liquidity,
            tick_lower_index: position.tick_lower_index,
            tick_upper_index: position.tick_upper_index,
        }
    }
}
