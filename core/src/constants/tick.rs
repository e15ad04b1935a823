//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// The number of ticks in a tick array.
pub const TICK_ARRAY_SIZE: usize = 88;

/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -443636;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 443636;

/// The Q64.96 sqrt price at `MIN_TICK_INDEX`.
pub const MIN_SQRT_PRICE: u128 = 18447090764788882728;

/// The Q64.96 sqrt price at `MAX_TICK_INDEX`.
pub const MAX_SQRT_PRICE: u128 = 340275971719517849884101479065584693834;

/// The Q64.96 sqrt price for a 1:1 price ratio (2^96).
pub const SQRT_PRICE_ONE: u128 = 1 << 96;
