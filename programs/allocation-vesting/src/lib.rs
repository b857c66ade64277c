use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::{CategoryInput, CategoryView};

declare_id!("GYAjRmHmPYcYiEZhkvkygoQ4y2HRYWxg4TRwpmeMq1V1");

#[program]
pub mod allocation_vesting {
    use super::*;

    pub fn initialize_vesting(ctx: Context<InitializeVesting>, total_supply: u64) -> Result<()> {
        instructions::initialize_vesting::initialize_vesting(ctx, total_supply)
    }

    pub fn set_token_mint(ctx: Context<SetTokenMint>) -> Result<()> {
        instructions::set_token_mint::set_token_mint(ctx)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin::set_admin(ctx, new_admin)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn add_category(ctx: Context<AddCategory>, input: CategoryInput) -> Result<()> {
        instructions::add_category::add_category(ctx, input)
    }

    pub fn set_first_vesting_date(
        ctx: Context<SetFirstVestingDate>,
        category_address: Pubkey,
        new_date: i64,
    ) -> Result<()> {
        instructions::set_first_vesting_date::set_first_vesting_date(ctx, category_address, new_date)
    }

    pub fn set_vesting_duration(
        ctx: Context<SetVestingDuration>,
        category_address: Pubkey,
        new_duration: i64,
    ) -> Result<()> {
        instructions::set_vesting_duration::set_vesting_duration(ctx, category_address, new_duration)
    }

    pub fn set_vesting_count(
        ctx: Context<SetVestingCount>,
        category_address: Pubkey,
        new_count: u32,
    ) -> Result<()> {
        instructions::set_vesting_count::set_vesting_count(ctx, category_address, new_count)
    }

    pub fn claim_available_allocation(ctx: Context<ClaimAvailableAllocation>) -> Result<()> {
        instructions::claim_available_allocation::claim_available_allocation(ctx)
    }

    pub fn list_categories(ctx: Context<ListCategories>) -> Result<()> {
        instructions::query::list_categories(ctx)
    }

    pub fn get_category(ctx: Context<GetCategory>, category_address: Pubkey) -> Result<CategoryView> {
        instructions::query::get_category(ctx, category_address)
    }

    pub fn total_supply(ctx: Context<TotalSupply>) -> Result<u64> {
        instructions::query::total_supply(ctx)
    }
}
