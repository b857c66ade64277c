use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{VAULT_SEED, VESTING_STATE_SEED};
use crate::error::VestingError;
use crate::state::VestingState;
use crate::utils::ledger;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidArgument);

    let st = &ctx.accounts.vesting_state;
    let admin = ctx.accounts.admin.key();
    st.ensure_admin(&admin)?;
    require!(st.has_token_mint(), VestingError::TokenMintNotSet);

    let source = &ctx.accounts.admin_token_account;
    ledger::ensure_token_account(&source.mint, &source.owner, &st.token_mint, &admin)?;

    st.ensure_deposit_fits(ctx.accounts.vault.amount, amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    ctx.accounts.vesting_state.record_deposit(amount)?;

    emit!(TokensDeposited {
        admin: ctx.accounts.vesting_state.admin,
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(mut, seeds = [VESTING_STATE_SEED], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        constraint = token_mint.key() == vesting_state.token_mint @ VestingError::InvalidTokenMint,
    )]
    pub token_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = admin,
        token::mint = token_mint,
        token::authority = vesting_state,
        seeds = [VAULT_SEED, vesting_state.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TokensDeposited {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
