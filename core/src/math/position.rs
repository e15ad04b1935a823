//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::PositionStatus;

use super::{order_tick_indexes, try_tick_index_to_sqrt_price};

/// Check if a position is in range.
/// An in-range position is priced in both tokens of the pool.
///
/// # Parameters
/// - `current_sqrt_price` - A u128 integer representing the sqrt price of the pool
/// - `tick_index_1` - A i32 integer representing the first tick index of the position
/// - `tick_index_2` - A i32 integer representing the second tick index of the position
///
/// # Returns
/// - A boolean value indicating if the position is in range
pub fn is_position_in_range(current_sqrt_price: u128, tick_index_1: i32, tick_index_2: i32) -> bool {
    position_status(current_sqrt_price, tick_index_1, tick_index_2) == PositionStatus::PriceInRange
}

/// Calculate the status of a position relative to the current pool price.
///
/// # Parameters
/// - `current_sqrt_price` - A u128 integer representing the sqrt price of the pool
/// - `tick_index_1` - A i32 integer representing the first tick index of the position
/// - `tick_index_2` - A i32 integer representing the second tick index of the position
///
/// # Returns
/// - A PositionStatus enum value indicating the status of the position
pub fn position_status(current_sqrt_price: u128, tick_index_1: i32, tick_index_2: i32) -> PositionStatus {
    if tick_index_1 == tick_index_2 {
        return PositionStatus::Invalid;
    }
    let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
    let bounds = (
        try_tick_index_to_sqrt_price(tick_range.tick_lower_index),
        try_tick_index_to_sqrt_price(tick_range.tick_upper_index),
    );
    let (sqrt_price_lower, sqrt_price_upper) = match bounds {
        (Ok(lower), Ok(upper)) => (lower, upper),
        _ => return PositionStatus::Invalid,
    };

    if current_sqrt_price <= sqrt_price_lower {
        PositionStatus::PriceBelowRange
    } else if current_sqrt_price >= sqrt_price_upper {
        PositionStatus::PriceAboveRange
    } else {
        PositionStatus::PriceInRange
    }
}
