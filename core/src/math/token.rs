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

use crate::{CoreError, TokenAmounts};

fn order_sqrt_prices(sqrt_price_1: u128, sqrt_price_2: u128) -> (u128, u128) {
    if sqrt_price_1 < sqrt_price_2 {
        (sqrt_price_1, sqrt_price_2)
    } else {
        (sqrt_price_2, sqrt_price_1)
    }
}

/// Calculate the token A amount backing `liquidity` between two sqrt prices.
///
/// amount_a = liquidity * (sqrt_upper - sqrt_lower) * 2^96 / (sqrt_upper * sqrt_lower)
///
/// # Parameters
/// - `sqrt_price_1` - A Q64.96 sqrt price bounding the range
/// - `sqrt_price_2` - A Q64.96 sqrt price bounding the range
/// - `liquidity` - The liquidity amount
/// - `round_up` - Round the result up (amounts owed by the user) or down
///   (amounts paid out to the user)
///
/// # Returns
/// - The token A amount
pub fn try_get_amount_delta_a(sqrt_price_1: u128, sqrt_price_2: u128, liquidity: u128, round_up: bool) -> Result<u64, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    let sqrt_price_diff = sqrt_price_upper - sqrt_price_lower;
    if sqrt_price_diff == 0 || liquidity == 0 {
        return Ok(0);
    }
    if sqrt_price_lower == 0 {
        return Err(CoreError::PriceOutOfBounds);
    }

    let numerator: U256 = <U256>::from(liquidity)
        .checked_mul(sqrt_price_diff.into())
        .and_then(|n| n.checked_mul(U256::ONE << 96))
        .ok_or(CoreError::ArithmeticOverflow)?;
    let denominator = <U256>::from(sqrt_price_lower) * <U256>::from(sqrt_price_upper);

    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    let amount = if round_up && remainder != U256::ZERO {
        quotient + U256::ONE
    } else {
        quotient
    };

    amount.try_into().map_err(|_| CoreError::ArithmeticOverflow)
}

/// Calculate the token B amount backing `liquidity` between two sqrt prices.
///
/// amount_b = liquidity * (sqrt_upper - sqrt_lower) / 2^96
///
/// # Parameters
/// - `sqrt_price_1` - A Q64.96 sqrt price bounding the range
/// - `sqrt_price_2` - A Q64.96 sqrt price bounding the range
/// - `liquidity` - The liquidity amount
/// - `round_up` - Round the result up (amounts owed by the user) or down
///   (amounts paid out to the user)
///
/// # Returns
/// - The token B amount
pub fn try_get_amount_delta_b(sqrt_price_1: u128, sqrt_price_2: u128, liquidity: u128, round_up: bool) -> Result<u64, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    let sqrt_price_diff = sqrt_price_upper - sqrt_price_lower;
    if sqrt_price_diff == 0 || liquidity == 0 {
        return Ok(0);
    }

    let product: U256 = <U256>::from(liquidity)
        .checked_mul(sqrt_price_diff.into())
        .ok_or(CoreError::ArithmeticOverflow)?;

    let quotient: U256 = product >> 96;
    let remainder = product & ((U256::ONE << 96) - U256::ONE);

    let amount = if round_up && remainder != U256::ZERO {
        quotient + U256::ONE
    } else {
        quotient
    };

    amount.try_into().map_err(|_| CoreError::ArithmeticOverflow)
}

/// Calculate the token amounts backing `liquidity` for a position range at
/// the current pool price.
///
/// Only the in-range portion of the range is priced in each token: below the
/// range the position is entirely token A, above it entirely token B, and
/// in between it holds token A from the current price up to the upper bound
/// and token B from the lower bound up to the current price.
pub fn try_get_token_amounts_for_liquidity(
    current_sqrt_price: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<TokenAmounts, CoreError> {
    if sqrt_price_lower >= sqrt_price_upper {
        return Err(CoreError::InvalidRange);
    }

    if current_sqrt_price <= sqrt_price_lower {
        Ok(TokenAmounts {
            a: try_get_amount_delta_a(sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?,
            b: 0,
        })
    } else if current_sqrt_price >= sqrt_price_upper {
        Ok(TokenAmounts {
            a: 0,
            b: try_get_amount_delta_b(sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?,
        })
    } else {
        Ok(TokenAmounts {
            a: try_get_amount_delta_a(current_sqrt_price, sqrt_price_upper, liquidity, round_up)?,
            b: try_get_amount_delta_b(sqrt_price_lower, current_sqrt_price, liquidity, round_up)?,
        })
    }
}
