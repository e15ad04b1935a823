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
use tidepool_core::CoreError;

use crate::consts::TIDEPOOL_ID;

pub fn get_pool_address(token_mint_a: &Pubkey, token_mint_b: &Pubkey, tick_spacing: u16) -> Result<(Pubkey, u8), CoreError> {
    let tick_spacing_bytes = tick_spacing.to_le_bytes();
    let seeds = &[b"pool", token_mint_a.as_ref(), token_mint_b.as_ref(), tick_spacing_bytes.as_ref()];
    Pubkey::try_find_program_address(seeds, &TIDEPOOL_ID).ok_or(CoreError::InvalidSeeds)
}
