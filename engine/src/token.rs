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

/// Order two mints into the canonical (a, b) pair order, so that pool
/// identity does not depend on the order the caller supplied them in.
pub fn order_mints(mint_1: Pubkey, mint_2: Pubkey) -> (Pubkey, Pubkey) {
    if mint_1 < mint_2 {
        (mint_1, mint_2)
    } else {
        (mint_2, mint_1)
    }
}
