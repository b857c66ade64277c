use anchor_lang::prelude::*;

use crate::constants::VESTING_STATE_SEED;
use crate::state::VestingState;
use crate::utils::ledger;

pub fn set_token_mint(ctx: Context<SetTokenMint>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    st.ensure_admin(&ctx.accounts.admin.key())?;

    // Funds already in the old vault would be stranded.
    st.ensure_mint_replaceable()?;

    let mint_ai = &ctx.accounts.token_mint;
    {
        let data = mint_ai.try_borrow_data()?;
        ledger::unpack_mint(mint_ai.key, mint_ai.owner, &data)?;
    }

    let old = st.token_mint;
    st.token_mint = mint_ai.key();

    emit!(TokenMintSet {
        admin: st.admin,
        old_mint: old,
        new_mint: st.token_mint,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetTokenMint<'info> {
    #[account(mut, seeds = [VESTING_STATE_SEED], bump)]
    pub vesting_state: Account<'info, VestingState>,

    /// CHECK: Validated as an SPL Token mint in-handler.
    pub token_mint: UncheckedAccount<'info>,

    pub admin: Signer<'info>,
}

#[event]
pub struct TokenMintSet {
    pub admin: Pubkey,
    pub old_mint: Pubkey,
    pub new_mint: Pubkey,
}
