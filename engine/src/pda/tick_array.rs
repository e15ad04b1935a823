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

pub fn get_tick_array_address(pool: &Pubkey, start_tick_index: i32) -> Result<(Pubkey, u8), CoreError> {
    let start_tick_index_str = start_tick_index.to_string();
    let seeds = &[b"tick_array", pool.as_ref(), start_tick_index_str.as_bytes()];
    Pubkey::try_find_program_address(seeds, &TIDEPOOL_ID).ok_or(CoreError::InvalidSeeds)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tick_array_address_is_deterministic() {
        let pool = Pubkey::new_unique();
        let (address_1, _) = get_tick_array_address(&pool, -5280).unwrap();
        let (address_2, _) = get_tick_array_address(&pool, -5280).unwrap();
        assert_eq!(address_1, address_2);
    }

    #[test]
    fn test_tick_array_address_depends_on_start_index() {
        let pool = Pubkey::new_unique();
        let (address_1, _) = get_tick_array_address(&pool, 0).unwrap();
        let (address_2, _) = get_tick_array_address(&pool, 5280).unwrap();
        assert_ne!(address_1, address_2);
    }
}
