//! Checks on the SPL Token accounts standing in for the value ledger.
//! Accounts arrive unchecked so the registry decides the outcome of a claim
//! first; everything here runs on raw owner/data pairs.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, TokenAccount};

use crate::constants::VAULT_SEED;
use crate::error::VestingError;

type LedgerResult<T> = core::result::Result<T, VestingError>;

pub fn ensure_nonzero_address(key: &Pubkey) -> LedgerResult<()> {
    if *key == Pubkey::default() {
        return Err(VestingError::InvalidAddress);
    }
    Ok(())
}

/// Custody PDA for `mint`, authority = vesting state.
pub fn vault_address(vesting_state: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VAULT_SEED, vesting_state.as_ref(), mint.as_ref()],
        &crate::ID,
    )
}

/// Must be an initialised mint owned by the SPL Token program.
pub fn unpack_mint(key: &Pubkey, owner: &Pubkey, data: &[u8]) -> LedgerResult<Mint> {
    ensure_nonzero_address(key)?;
    if *owner != token::ID {
        return Err(VestingError::NotAContract);
    }
    let mut bytes = data;
    Mint::try_deserialize(&mut bytes).map_err(|_| VestingError::NotAContract)
}

pub fn unpack_token_account(owner: &Pubkey, data: &[u8]) -> LedgerResult<TokenAccount> {
    if *owner != token::ID {
        return Err(VestingError::InvalidTokenAccount);
    }
    let mut bytes = data;
    TokenAccount::try_deserialize(&mut bytes).map_err(|_| VestingError::InvalidTokenAccount)
}

/// Vault balance; a vault that was never created holds nothing.
pub fn vault_balance(owner: &Pubkey, data: &[u8]) -> LedgerResult<u64> {
    if data.is_empty() {
        return Ok(0);
    }
    Ok(unpack_token_account(owner, data)?.amount)
}

pub fn ensure_token_account(
    account_mint: &Pubkey,
    account_owner: &Pubkey,
    expected_mint: &Pubkey,
    expected_owner: &Pubkey,
) -> LedgerResult<()> {
    if account_mint != expected_mint {
        return Err(VestingError::InvalidTokenMint);
    }
    if account_owner != expected_owner {
        return Err(VestingError::InvalidTokenAccount);
    }
    Ok(())
}

pub fn ensure_vault_covers(vault_balance: u64, amount: u64) -> LedgerResult<()> {
    if vault_balance < amount {
        return Err(VestingError::TransferFailed);
    }
    Ok(())
}
