//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{CoreError, TickRange, MAX_SQRT_PRICE, MAX_TICK_INDEX, MIN_SQRT_PRICE, MIN_TICK_INDEX};

// sqrt(1.0001^(2^i)) for negative powers, as Q128.128 factors.
// Index i corresponds to bit i of the absolute tick index.
const SQRT_PRICE_FACTORS: [u128; 19] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
];

/// Check if a tick index is within the supported tick range.
pub fn is_tick_index_in_bounds(tick_index: i32) -> bool {
    (MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index)
}

/// Check if a tick index is an exact multiple of the pool's tick spacing.
pub fn is_tick_index_aligned(tick_index: i32, tick_spacing: u16) -> bool {
    tick_index % tick_spacing as i32 == 0
}

/// Order two tick indexes into a lower/upper range.
pub fn order_tick_indexes(tick_index_1: i32, tick_index_2: i32) -> TickRange {
    if tick_index_1 < tick_index_2 {
        TickRange {
            tick_lower_index: tick_index_1,
            tick_upper_index: tick_index_2,
        }
    } else {
        TickRange {
            tick_lower_index: tick_index_2,
            tick_upper_index: tick_index_1,
        }
    }
}

/// Convert a tick index to the Q64.96 sqrt price of `1.0001^tick_index`.
///
/// The conversion multiplies precomputed Q128.128 factors for each set bit of
/// the tick magnitude, inverts the ratio for positive ticks and rounds the
/// final shift to X96 up, so the result is the smallest sqrt price whose tick
/// (per [`try_sqrt_price_to_tick_index`]) equals `tick_index`.
///
/// # Parameters
/// - `tick_index` - The tick index, in `[MIN_TICK_INDEX, MAX_TICK_INDEX]`
///
/// # Returns
/// - The Q64.96 sqrt price for the tick index
pub fn try_tick_index_to_sqrt_price(tick_index: i32) -> Result<u128, CoreError> {
    if !is_tick_index_in_bounds(tick_index) {
        return Err(CoreError::InvalidRange);
    }

    let abs_tick = tick_index.unsigned_abs();

    let mut ratio: U256 = if abs_tick & 1 != 0 {
        SQRT_PRICE_FACTORS[0].into()
    } else {
        U256::ONE << 128
    };

    for (i, factor) in SQRT_PRICE_FACTORS.iter().enumerate().skip(1) {
        if abs_tick & (1 << i) != 0 {
            ratio = (ratio * <U256>::from(*factor)) >> 128;
        }
    }

    // The factor table is built for negative ticks, invert for positive ones.
    if tick_index > 0 {
        ratio = U256::MAX / ratio;
    }

    // Shift from X128 to X96, rounding up.
    let mut sqrt_price: U256 = ratio >> 32;
    if ratio & ((U256::ONE << 32) - U256::ONE) != U256::ZERO {
        sqrt_price += U256::ONE;
    }

    Ok(sqrt_price.as_u128())
}

/// Convert a Q64.96 sqrt price to a tick index, rounding towards negative
/// infinity. The result is the largest tick whose sqrt price is less than or
/// equal to the input.
///
/// # Parameters
/// - `sqrt_price` - A Q64.96 sqrt price, in `[MIN_SQRT_PRICE, MAX_SQRT_PRICE]`
///
/// # Returns
/// - The largest tick index whose sqrt price does not exceed `sqrt_price`
pub fn try_sqrt_price_to_tick_index(sqrt_price: u128) -> Result<i32, CoreError> {
    if !(MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price) {
        return Err(CoreError::PriceOutOfBounds);
    }

    let mut low = MIN_TICK_INDEX;
    let mut high = MAX_TICK_INDEX;

    // Invariant: sqrt_price_at(low) <= sqrt_price < sqrt_price_at(high + 1)
    while low < high {
        let mid = (low + high + 1) / 2;
        let sqrt_price_at_mid = try_tick_index_to_sqrt_price(mid)?;
        if sqrt_price_at_mid <= sqrt_price {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}
