//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use libm::{floor, log, pow, sqrt};

use crate::SQRT_PRICE_ONE;

/// Convert a decimal-adjusted price to a Q64.96 sqrt price.
///
/// # Parameters
/// - `price` - The price of token A in terms of token B
/// - `decimals_a` - The number of decimals of token A
/// - `decimals_b` - The number of decimals of token B
///
/// # Returns
/// - The Q64.96 sqrt price
pub fn price_to_sqrt_price(price: f64, decimals_a: u8, decimals_b: u8) -> u128 {
    let power = pow(10.0, decimals_b as f64 - decimals_a as f64);
    (sqrt(price * power) * SQRT_PRICE_ONE as f64) as u128
}

/// Convert a Q64.96 sqrt price to a decimal-adjusted price.
///
/// # Parameters
/// - `sqrt_price` - The Q64.96 sqrt price
/// - `decimals_a` - The number of decimals of token A
/// - `decimals_b` - The number of decimals of token B
///
/// # Returns
/// - The price of token A in terms of token B
pub fn sqrt_price_to_price(sqrt_price: u128, decimals_a: u8, decimals_b: u8) -> f64 {
    let power = pow(10.0, decimals_b as f64 - decimals_a as f64);
    let sqrt_price = sqrt_price as f64 / SQRT_PRICE_ONE as f64;
    sqrt_price * sqrt_price / power
}

/// Convert a tick index to a decimal-adjusted price.
pub fn tick_index_to_price(tick_index: i32, decimals_a: u8, decimals_b: u8) -> f64 {
    let power = pow(10.0, decimals_b as f64 - decimals_a as f64);
    pow(1.0001, tick_index as f64) / power
}

/// Convert a decimal-adjusted price to the largest tick index whose price
/// does not exceed it.
pub fn price_to_tick_index(price: f64, decimals_a: u8, decimals_b: u8) -> i32 {
    let power = pow(10.0, decimals_b as f64 - decimals_a as f64);
    floor(log(price * power) / log(1.0001)) as i32
}
