use anchor_lang::prelude::*;

use crate::constants::{CATEGORIES_SEED, VESTING_STATE_SEED};
use crate::state::{Categories, VestingState};

pub fn set_vesting_duration(
    ctx: Context<SetVestingDuration>,
    category_address: Pubkey,
    new_duration: i64,
) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    st.ensure_admin(&ctx.accounts.admin.key())?;

    let now = Clock::get()?.unix_timestamp;
    let category = ctx.accounts.categories.find_mut(&category_address)?;
    let old = category.set_vesting_duration(now, new_duration)?;

    emit!(VestingDurationUpdated {
        category_address,
        old_duration: old,
        new_duration,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetVestingDuration<'info> {
    #[account(seeds = [VESTING_STATE_SEED], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [CATEGORIES_SEED, vesting_state.key().as_ref()],
        bump
    )]
    pub categories: Box<Account<'info, Categories>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingDurationUpdated {
    pub category_address: Pubkey,
    pub old_duration: i64,
    pub new_duration: i64,
}
