use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Singleton program state PDA.
#[account]
pub struct VestingState {
    /// Admin authority; the only signer allowed on privileged instructions.
    pub admin: Pubkey,
    /// Token mint of the custodied pool (default until `set_token_mint`).
    pub token_mint: Pubkey,
    /// Declared size of the pool.
    pub total_supply: u64,
    /// Sum of registered category allocations.
    pub allocated_supply: u64,
    /// Sum of collected allocations across categories.
    pub released_supply: u64,
    /// Sum of deposits into the current vault; freezes `token_mint` once > 0.
    pub funded_supply: u64,
    /// Registered category count (<= MAX_CATEGORIES).
    pub category_count: u8,
}

impl VestingState {
    pub const SIZE: usize =
        32 + // admin
        32 + // token_mint
        8 +  // total_supply
        8 +  // allocated_supply
        8 +  // released_supply
        8 +  // funded_supply
        1;   // category_count

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }

    /// Capability check for every privileged instruction.
    pub fn ensure_admin(&self, signer: &Pubkey) -> core::result::Result<(), VestingError> {
        if !self.is_admin(signer) {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// The mint may only change while no value is in custody.
    pub fn ensure_mint_replaceable(&self) -> core::result::Result<(), VestingError> {
        if self.funded_supply > 0 {
            return Err(VestingError::MintLocked);
        }
        Ok(())
    }

    /// Custody never exceeds what is still owed to categories.
    pub fn ensure_deposit_fits(
        &self,
        vault_balance: u64,
        amount: u64,
    ) -> core::result::Result<(), VestingError> {
        let outstanding = self
            .total_supply
            .checked_sub(self.released_supply)
            .ok_or(VestingError::MathOverflow)?;
        let post = vault_balance
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if post > outstanding {
            return Err(VestingError::OverDeposit);
        }
        Ok(())
    }

    pub fn record_deposit(&mut self, amount: u64) -> core::result::Result<(), VestingError> {
        self.funded_supply = self
            .funded_supply
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    pub fn has_token_mint(&self) -> bool {
        self.token_mint != Pubkey::default()
    }

    /// Reserve `amount` of the pool for a new category.
    pub fn reserve_allocation(&mut self, amount: u64) -> core::result::Result<(), VestingError> {
        let next = self
            .allocated_supply
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if next > self.total_supply {
            return Err(VestingError::AllocationExceedsSupply);
        }
        self.allocated_supply = next;
        Ok(())
    }

    pub fn record_release(&mut self, amount: u64) -> core::result::Result<(), VestingError> {
        self.released_supply = self
            .released_supply
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total_supply: u64) -> VestingState {
        VestingState {
            admin: Pubkey::new_unique(),
            token_mint: Pubkey::default(),
            total_supply,
            allocated_supply: 0,
            released_supply: 0,
            funded_supply: 0,
            category_count: 0,
        }
    }

    #[test]
    fn reserve_up_to_total_supply() {
        let mut st = state(100);
        st.reserve_allocation(60).unwrap();
        st.reserve_allocation(40).unwrap();
        assert_eq!(st.allocated_supply, 100);

        assert!(matches!(
            st.reserve_allocation(1),
            Err(VestingError::AllocationExceedsSupply)
        ));
        assert_eq!(st.allocated_supply, 100);
    }

    #[test]
    fn admin_and_mint_checks() {
        let st = state(1);
        assert!(st.is_admin(&st.admin));
        assert!(!st.is_admin(&Pubkey::new_unique()));
        assert!(!st.has_token_mint());
    }

    #[test]
    fn non_admin_signer_is_unauthorized() {
        let st = state(1);
        st.ensure_admin(&st.admin).unwrap();
        assert!(matches!(
            st.ensure_admin(&Pubkey::new_unique()),
            Err(VestingError::Unauthorized)
        ));
    }

    #[test]
    fn deposits_are_capped_by_outstanding_supply() {
        let mut st = state(100);
        st.ensure_deposit_fits(0, 100).unwrap();
        st.ensure_deposit_fits(60, 40).unwrap();
        assert!(matches!(st.ensure_deposit_fits(60, 41), Err(VestingError::OverDeposit)));

        // Released value no longer needs custody.
        st.record_release(30).unwrap();
        assert!(matches!(st.ensure_deposit_fits(60, 11), Err(VestingError::OverDeposit)));
        st.ensure_deposit_fits(60, 10).unwrap();

        assert!(matches!(
            st.ensure_deposit_fits(u64::MAX, 1),
            Err(VestingError::MathOverflow)
        ));
    }

    #[test]
    fn mint_locks_after_first_deposit() {
        let mut st = state(100);
        st.ensure_mint_replaceable().unwrap();
        st.record_deposit(5).unwrap();
        assert_eq!(st.funded_supply, 5);
        assert!(matches!(st.ensure_mint_replaceable(), Err(VestingError::MintLocked)));
    }
}
