//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// A pair of token amounts, in the pool's canonical (a, b) mint order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TokenAmounts {
    pub a: u64,
    pub b: u64,
}
