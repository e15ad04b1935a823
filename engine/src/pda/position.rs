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

pub fn get_position_address(
    owner: &Pubkey,
    pool: &Pubkey,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<(Pubkey, u8), CoreError> {
    let tick_lower_index_str = tick_lower_index.to_string();
    let tick_upper_index_str = tick_upper_index.to_string();
    let seeds = &[
        b"position",
        owner.as_ref(),
        pool.as_ref(),
        tick_lower_index_str.as_bytes(),
        tick_upper_index_str.as_bytes(),
    ];
    Pubkey::try_find_program_address(seeds, &TIDEPOOL_ID).ok_or(CoreError::InvalidSeeds)
}
