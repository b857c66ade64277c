use anchor_lang::prelude::*;

use crate::constants::{CATEGORIES_SEED, VESTING_STATE_SEED};
use crate::error::VestingError;
use crate::state::{CategoryInput, Categories, VestingState};

pub fn add_category(ctx: Context<AddCategory>, input: CategoryInput) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    st.ensure_admin(&ctx.accounts.admin.key())?;

    let amount = input.total_allocation;
    let category = ctx.accounts.categories.register(input)?;
    st.reserve_allocation(amount)?;
    st.category_count = st
        .category_count
        .checked_add(1)
        .ok_or(VestingError::MathOverflow)?;

    emit!(CategoryAdded {
        category_address: category.category_address,
        category_name: category.category_name.clone(),
        total_allocation: category.total_allocation,
        vesting_count: category.vesting_count,
        vesting_duration: category.vesting_duration,
        first_vesting_date: category.first_vesting_date,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddCategory<'info> {
    #[account(mut, seeds = [VESTING_STATE_SEED], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [CATEGORIES_SEED, vesting_state.key().as_ref()],
        bump
    )]
    pub categories: Box<Account<'info, Categories>>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

#[event]
pub struct CategoryAdded {
    pub category_address: Pubkey,
    pub category_name: String,
    pub total_allocation: u64,
    pub vesting_count: u32,
    pub vesting_duration: i64,
    pub first_vesting_date: i64,
}
