use anchor_lang::prelude::*;

use crate::constants::{CATEGORIES_SEED, VESTING_STATE_SEED};
use crate::state::{CategoryView, Categories, VestingState};

/// Emits one snapshot per category, in registration order.
pub fn list_categories(ctx: Context<ListCategories>) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    st.ensure_admin(&ctx.accounts.admin.key())?;

    let now = Clock::get()?.unix_timestamp;
    for (index, category) in ctx.accounts.categories.entries.iter().enumerate() {
        let view = category.view(now);
        emit!(CategorySnapshot {
            index: index as u8,
            category_address: view.category_address,
            category_name: view.category_name,
            total_allocation: view.total_allocation,
            collected_allocation: view.collected_allocation,
            available_allocation: view.available_allocation,
            vesting_count: view.vesting_count,
            vesting_duration: view.vesting_duration,
            first_vesting_date: view.first_vesting_date,
            elapsed_periods: view.elapsed_periods,
            next_vesting_date: view.next_vesting_date,
        });
    }
    Ok(())
}

pub fn get_category(ctx: Context<GetCategory>, category_address: Pubkey) -> Result<CategoryView> {
    let now = Clock::get()?.unix_timestamp;
    let category = ctx.accounts.categories.find(&category_address)?;
    Ok(category.view(now))
}

pub fn total_supply(ctx: Context<TotalSupply>) -> Result<u64> {
    Ok(ctx.accounts.vesting_state.total_supply)
}

#[derive(Accounts)]
pub struct ListCategories<'info> {
    #[account(seeds = [VESTING_STATE_SEED], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [CATEGORIES_SEED, vesting_state.key().as_ref()],
        bump
    )]
    pub categories: Box<Account<'info, Categories>>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct GetCategory<'info> {
    #[account(seeds = [VESTING_STATE_SEED], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [CATEGORIES_SEED, vesting_state.key().as_ref()],
        bump
    )]
    pub categories: Box<Account<'info, Categories>>,
}

#[derive(Accounts)]
pub struct TotalSupply<'info> {
    #[account(seeds = [VESTING_STATE_SEED], bump)]
    pub vesting_state: Account<'info, VestingState>,
}

#[event]
pub struct CategorySnapshot {
    pub index: u8,
    pub category_address: Pubkey,
    pub category_name: String,
    pub total_allocation: u64,
    pub collected_allocation: u64,
    pub available_allocation: u64,
    pub vesting_count: u32,
    pub vesting_duration: i64,
    pub first_vesting_date: i64,
    pub elapsed_periods: u32,
    pub next_vesting_date: i64,
}
