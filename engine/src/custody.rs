//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under TidePool Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::collections::HashMap;

use solana_pubkey::Pubkey;
use tidepool_core::CoreError;

/// One transfer of both pool tokens, in canonical (a, b) order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransferPair {
    pub amount_a: u64,
    pub amount_b: u64,
    pub source_a: Pubkey,
    pub source_b: Pubkey,
    pub destination_a: Pubkey,
    pub destination_b: Pubkey,
}

/// The boundary to the external fungible-token ledger.
///
/// The engine computes token amounts and hands them to this adapter as the
/// last fallible step of an operation. Implementations must apply both legs
/// or neither.
pub trait TokenCustody {
    fn transfer_pair(&mut self, transfer: &TransferPair) -> Result<(), CoreError>;
}

/// Balance-tracking custody backend for local simulation and tests.
#[derive(Debug, Default)]
pub struct InMemoryTokenLedger {
    balances: HashMap<Pubkey, u64>,
}

impl InMemoryTokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credit(&mut self, account: Pubkey, amount: u64) {
        let balance = self.balances.entry(account).or_default();
        *balance = balance.saturating_add(amount);
    }

    pub fn balance(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or_default()
    }
}

impl TokenCustody for InMemoryTokenLedger {
    fn transfer_pair(&mut self, transfer: &TransferPair) -> Result<(), CoreError> {
        // Stage both debits and credits, then commit in one step so a failed
        // leg leaves no balance touched.
        let mut staged: HashMap<Pubkey, u64> = HashMap::new();
        for (account, amount) in [(transfer.source_a, transfer.amount_a), (transfer.source_b, transfer.amount_b)] {
            let balance = staged.entry(account).or_insert_with(|| self.balance(&account));
            *balance = balance.checked_sub(amount).ok_or(CoreError::InsufficientFunds)?;
        }
        for (account, amount) in [(transfer.destination_a, transfer.amount_a), (transfer.destination_b, transfer.amount_b)] {
            let balance = staged.entry(account).or_insert_with(|| self.balance(&account));
            *balance = balance.checked_add(amount).ok_or(CoreError::ArithmeticOverflow)?;
        }
        self.balances.extend(staged);
        Ok(())
    }
}
