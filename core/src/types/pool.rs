//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// The math-level view of a pool: everything the accounting math needs to
/// quote amounts, without addressing or custody details.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PoolFacade {
    pub tick_spacing: u16,
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub tick_current_index: i32,
}
