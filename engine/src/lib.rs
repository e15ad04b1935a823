//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod close_position;
mod consts;
mod custody;
mod decrease_liquidity;
mod initialize_pool;
mod liquidity;
mod open_position;
mod pda;
mod state;
mod store;
mod token;

#[cfg(test)]
pub(crate) mod test_support;

pub use close_position::*;
pub use consts::*;
pub use custody::*;
pub use decrease_liquidity::*;
pub use initialize_pool::*;
pub use open_position::*;
pub use pda::*;
pub use state::*;
pub use store::*;
pub use token::*;
