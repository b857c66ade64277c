use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, Transfer};

use crate::constants::{CATEGORIES_SEED, VESTING_STATE_SEED};
use crate::error::VestingError;
use crate::state::{Categories, VestingState};
use crate::utils::ledger;

pub fn claim_available_allocation(ctx: Context<ClaimAvailableAllocation>) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let vesting_state_ai = ctx.accounts.vesting_state.to_account_info();
    let vesting_state_bump = ctx.bumps.vesting_state;
    let beneficiary = ctx.accounts.beneficiary.key();

    let now = Clock::get()?.unix_timestamp;

    // Registry decides first; ledger accounts are only inspected once there
    // is something to release. Nothing is written before the transfer.
    let available = ctx
        .accounts
        .categories
        .find(&beneficiary)
        .and_then(|category| category.claimable(now))
        .map_err(|e| {
            if e.is_retryable() {
                msg!("nothing claimable at {}, try again later", now);
            }
            e
        })?;

    let st = &ctx.accounts.vesting_state;
    require!(st.has_token_mint(), VestingError::TokenMintNotSet);

    let (vault_key, _) = ledger::vault_address(&st.key(), &st.token_mint);
    let vault_ai = &ctx.accounts.vault;
    require_keys_eq!(vault_ai.key(), vault_key, VestingError::InvalidTokenAccount);
    let vault_balance = {
        let data = vault_ai.try_borrow_data()?;
        ledger::vault_balance(vault_ai.owner, &data)?
    };
    ledger::ensure_vault_covers(vault_balance, available)?;

    let destination_ai = &ctx.accounts.beneficiary_token_account;
    {
        let data = destination_ai.try_borrow_data()?;
        let destination = ledger::unpack_token_account(destination_ai.owner, &data)?;
        ledger::ensure_token_account(
            &destination.mint,
            &destination.owner,
            &st.token_mint,
            &beneficiary,
        )?;
    }

    let signer_seeds: &[&[&[u8]]] = &[&[VESTING_STATE_SEED, &[vesting_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: vault_ai.to_account_info(),
                to: destination_ai.to_account_info(),
                authority: vesting_state_ai,
            },
            signer_seeds,
        ),
        available,
    )?;

    let category = ctx.accounts.categories.find_mut(&beneficiary)?;
    let collected = category.record_claim(available)?;
    let total_allocation = category.total_allocation;
    ctx.accounts.vesting_state.record_release(available)?;

    msg!("claimed {} ({}/{})", available, collected, total_allocation);
    emit!(AllocationClaimed {
        category_address: beneficiary,
        amount: available,
        collected_allocation: collected,
        total_allocation,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimAvailableAllocation<'info> {
    #[account(mut, seeds = [VESTING_STATE_SEED], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [CATEGORIES_SEED, vesting_state.key().as_ref()],
        bump
    )]
    pub categories: Box<Account<'info, Categories>>,

    /// CHECK: Vault PDA for `vesting_state.token_mint`; address and layout
    /// are checked in-handler after the registry checks, since it may not
    /// exist before the first deposit.
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: Unpacked in-handler as a token account of the configured mint
    /// owned by `beneficiary`.
    #[account(mut)]
    pub beneficiary_token_account: UncheckedAccount<'info>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AllocationClaimed {
    pub category_address: Pubkey,
    pub amount: u64,
    pub collected_allocation: u64,
    pub total_allocation: u64,
    pub timestamp: i64,
}
