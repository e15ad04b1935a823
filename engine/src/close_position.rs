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
use tidepool_core::CoreError;

use crate::store::ClmmStore;

/// Close an emptied position and drop its record from the store.
///
/// Closing requires the position's liquidity to be zero; withdraw it first
/// with `decrease_liquidity`.
pub fn close_position(store: &mut ClmmStore, owner: &Pubkey, position_address: &Pubkey) -> Result<(), CoreError> {
    let position = store.position(position_address).ok_or(CoreError::PositionNotFound)?;
    if position.owner != *owner {
        return Err(CoreError::Unauthorized);
    }
    if position.liquidity != 0 {
        return Err(CoreError::PositionNotEmpty);
    }

    store.remove_position(position_address);
    debug!("closed position {position_address}");
    Ok(())
}
