use anchor_lang::prelude::*;

use crate::constants::VESTING_STATE_SEED;
use crate::state::VestingState;
use crate::utils::ledger;

pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    ledger::ensure_nonzero_address(&new_admin)?;

    let st = &mut ctx.accounts.vesting_state;
    st.ensure_admin(&ctx.accounts.admin.key())?;

    let old = st.admin;
    st.admin = new_admin;

    emit!(AdminTransferred {
        old_admin: old,
        new_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    #[account(mut, seeds = [VESTING_STATE_SEED], bump)]
    pub vesting_state: Account<'info, VestingState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
