use anchor_lang::prelude::*;

use crate::constants::{CATEGORIES_SEED, VESTING_STATE_SEED};
use crate::error::VestingError;
use crate::state::{Categories, VestingState};

pub fn initialize_vesting(ctx: Context<InitializeVesting>, total_supply: u64) -> Result<()> {
    require!(total_supply > 0, VestingError::InvalidArgument);

    let st = &mut ctx.accounts.vesting_state;
    st.admin = ctx.accounts.admin.key();
    st.token_mint = Pubkey::default();
    st.total_supply = total_supply;
    st.allocated_supply = 0;
    st.released_supply = 0;
    st.funded_supply = 0;
    st.category_count = 0;

    ctx.accounts.categories.entries = Vec::new();

    emit!(VestingInitialized {
        admin: st.admin,
        total_supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVesting<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingState::SIZE,
        seeds = [VESTING_STATE_SEED],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = admin,
        space = Categories::space(),
        seeds = [CATEGORIES_SEED, vesting_state.key().as_ref()],
        bump
    )]
    pub categories: Box<Account<'info, Categories>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingInitialized {
    pub admin: Pubkey,
    pub total_supply: u64,
}
