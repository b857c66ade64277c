use anchor_lang::prelude::*;

use crate::constants::{CATEGORIES_SEED, VESTING_STATE_SEED};
use crate::state::{Categories, VestingState};

pub fn set_first_vesting_date(
    ctx: Context<SetFirstVestingDate>,
    category_address: Pubkey,
    new_date: i64,
) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    st.ensure_admin(&ctx.accounts.admin.key())?;

    let now = Clock::get()?.unix_timestamp;
    let category = ctx.accounts.categories.find_mut(&category_address)?;
    // Gated on the stored date, not the new one.
    let old = category.set_first_vesting_date(now, new_date)?;

    emit!(FirstVestingDateUpdated {
        category_address,
        old_date: old,
        new_date,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetFirstVestingDate<'info> {
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
pub struct FirstVestingDateUpdated {
    pub category_address: Pubkey,
    pub old_date: i64,
    pub new_date: i64,
}
