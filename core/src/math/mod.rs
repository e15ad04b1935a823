//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod position;
mod tick;
mod tick_array;
mod token;

#[cfg(feature = "floats")]
mod price;

pub use position::*;
pub use tick::*;
pub use tick_array::*;
pub use token::*;

#[cfg(feature = "floats")]
pub use price::*;
