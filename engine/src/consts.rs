//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;

/// The namespace key under which all engine identities are derived.
pub const TIDEPOOL_ID: Pubkey = Pubkey::new_from_array([
    234, 167, 221, 216, 6, 169, 28, 202, 188, 48, 212, 223, 219, 48, 30, 123, 12, 189, 138, 186, 221, 96, 171, 228, 23, 147, 219, 57,
    117, 3, 92, 156,
]);
