//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{CoreError, TICK_ARRAY_SIZE};

/// The number of tick indexes spanned by one tick array.
pub fn ticks_per_array(tick_spacing: u16) -> i32 {
    TICK_ARRAY_SIZE as i32 * tick_spacing as i32
}

/// Get the start tick index of the tick array that contains `tick_index`.
///
/// Start indexes are floored towards negative infinity, so negative ticks
/// land in the array below zero rather than sharing array zero.
pub fn tick_array_start_tick_index(tick_index: i32, tick_spacing: u16) -> i32 {
    let ticks_per_array = ticks_per_array(tick_spacing);
    tick_index.div_euclid(ticks_per_array) * ticks_per_array
}

/// Get the slot offset of `tick_index` inside the tick array starting at
/// `start_tick_index`.
///
/// Fails with `TickArrayMismatch` if the tick is not spacing-aligned relative
/// to the start index or falls outside the array's span.
pub fn try_tick_array_offset(start_tick_index: i32, tick_index: i32, tick_spacing: u16) -> Result<usize, CoreError> {
    let delta = tick_index - start_tick_index;
    if delta < 0 || delta % tick_spacing as i32 != 0 {
        return Err(CoreError::TickArrayMismatch);
    }
    let offset = (delta / tick_spacing as i32) as usize;
    if offset >= TICK_ARRAY_SIZE {
        return Err(CoreError::TickArrayMismatch);
    }
    Ok(offset)
}
