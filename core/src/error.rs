//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use thiserror::Error;

/// Failure kinds surfaced by the core math and the accounting engine.
///
/// Every error is terminal for the operation that produced it: nothing is
/// retried internally and no partial state change is retained.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid tick spacing")]
    InvalidTickSpacing,

    #[error("Invalid tick range")]
    InvalidRange,

    #[error("Sqrt price out of bounds")]
    PriceOutOfBounds,

    #[error("Tick array does not match the derived start tick index")]
    TickArrayMismatch,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Vault does not belong to the pool")]
    VaultMismatch,

    #[error("Arithmetic over- or underflow")]
    ArithmeticOverflow,

    #[error("Token mints must be distinct")]
    SameTokenMint,

    #[error("Liquidity amount must be greater than zero")]
    ZeroLiquidity,

    #[error("Invalid seeds")]
    InvalidSeeds,

    #[error("Pool not found")]
    PoolNotFound,

    #[error("Position not found")]
    PositionNotFound,

    #[error("Signer is not the position owner")]
    Unauthorized,

    #[error("Position liquidity must be zero to close")]
    PositionNotEmpty,
}
