use anchor_lang::prelude::*;

use crate::constants::{MAX_CATEGORIES, MAX_CATEGORY_NAME_LEN};
use crate::error::VestingError;
use crate::utils::schedule;

type EngineResult<T> = core::result::Result<T, VestingError>;

/// A beneficiary slot with its own allotment and release schedule.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub category_address: Pubkey,
    pub category_name: String,
    pub total_allocation: u64,
    pub collected_allocation: u64,
    pub vesting_count: u32,
    pub vesting_duration: i64,
    pub first_vesting_date: i64,
}

/// Instruction input for `add_category`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryInput {
    pub category_address: Pubkey,
    pub category_name: String,
    pub total_allocation: u64,
    pub vesting_count: u32,
    pub vesting_duration: i64,
    pub first_vesting_date: i64,
}

/// Read projection with the live-computed fields.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryView {
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

impl Category {
    pub const SIZE: usize =
        32 + // category_address
        4 + MAX_CATEGORY_NAME_LEN + // category_name
        8 +  // total_allocation
        8 +  // collected_allocation
        4 +  // vesting_count
        8 +  // vesting_duration
        8;   // first_vesting_date

    pub fn new(input: CategoryInput) -> EngineResult<Self> {
        if input.category_address == Pubkey::default()
            || input.category_name.is_empty()
            || input.category_name.len() > MAX_CATEGORY_NAME_LEN
            || input.vesting_count == 0
            || input.vesting_duration <= 0
        {
            return Err(VestingError::InvalidArgument);
        }
        Ok(Self {
            category_address: input.category_address,
            category_name: input.category_name,
            total_allocation: input.total_allocation,
            collected_allocation: 0,
            vesting_count: input.vesting_count,
            vesting_duration: input.vesting_duration,
            first_vesting_date: input.first_vesting_date,
        })
    }

    /// Gate for all parameter mutators; evaluated against the stored date.
    pub fn is_started(&self, now_ts: i64) -> bool {
        schedule::is_started(now_ts, self.first_vesting_date)
    }

    pub fn is_fully_claimed(&self) -> bool {
        self.collected_allocation >= self.total_allocation
    }

    /// Returns the replaced date. The new date may itself be in the past.
    pub fn set_first_vesting_date(&mut self, now_ts: i64, new_date: i64) -> EngineResult<i64> {
        if self.is_started(now_ts) {
            return Err(VestingError::DistributionStarted);
        }
        Ok(core::mem::replace(&mut self.first_vesting_date, new_date))
    }

    pub fn set_vesting_duration(&mut self, now_ts: i64, new_duration: i64) -> EngineResult<i64> {
        if self.is_started(now_ts) {
            return Err(VestingError::DurationLocked);
        }
        if new_duration <= 0 {
            return Err(VestingError::InvalidArgument);
        }
        Ok(core::mem::replace(&mut self.vesting_duration, new_duration))
    }

    pub fn set_vesting_count(&mut self, now_ts: i64, new_count: u32) -> EngineResult<u32> {
        if self.is_started(now_ts) {
            return Err(VestingError::CountLocked);
        }
        if new_count == 0 {
            return Err(VestingError::InvalidArgument);
        }
        Ok(core::mem::replace(&mut self.vesting_count, new_count))
    }

    fn elapsed_periods(&self, now_ts: i64) -> EngineResult<u32> {
        schedule::elapsed_periods(
            now_ts,
            self.first_vesting_date,
            self.vesting_duration,
            self.vesting_count,
        )
    }

    fn unlocked_uncollected(&self, now_ts: i64) -> EngineResult<u64> {
        let elapsed = self.elapsed_periods(now_ts)?;
        let entitled =
            schedule::entitled_amount(self.total_allocation, elapsed, self.vesting_count)?;
        Ok(entitled.saturating_sub(self.collected_allocation))
    }

    /// Amount a claim at `now_ts` would release. Read-only; checks run in
    /// claim order so the first failing precondition is reported.
    pub fn claimable(&self, now_ts: i64) -> EngineResult<u64> {
        if !self.is_started(now_ts) {
            return Err(VestingError::NotStarted);
        }
        if self.is_fully_claimed() {
            return Err(VestingError::FullyClaimed);
        }
        let available = self.unlocked_uncollected(now_ts)?;
        if available == 0 {
            return Err(VestingError::NothingAvailable);
        }
        Ok(available)
    }

    /// Record a confirmed transfer of `amount` to the beneficiary.
    pub fn record_claim(&mut self, amount: u64) -> EngineResult<u64> {
        let collected = self
            .collected_allocation
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if collected > self.total_allocation {
            return Err(VestingError::MathOverflow);
        }
        self.collected_allocation = collected;
        Ok(collected)
    }

    /// Infallible projection; unavailable values read as zero.
    pub fn view(&self, now_ts: i64) -> CategoryView {
        let elapsed = self.elapsed_periods(now_ts).unwrap_or(0);
        CategoryView {
            category_address: self.category_address,
            category_name: self.category_name.clone(),
            total_allocation: self.total_allocation,
            collected_allocation: self.collected_allocation,
            available_allocation: self.unlocked_uncollected(now_ts).unwrap_or(0),
            vesting_count: self.vesting_count,
            vesting_duration: self.vesting_duration,
            first_vesting_date: self.first_vesting_date,
            elapsed_periods: elapsed,
            next_vesting_date: schedule::next_vesting_date(
                self.first_vesting_date,
                self.vesting_duration,
                self.vesting_count,
                elapsed,
            ),
        }
    }
}

/// PDA holding every category in registration order (<= MAX_CATEGORIES).
#[account]
pub struct Categories {
    pub entries: Vec<Category>,
}

impl Categories {
    /// Space for discriminator + vec header + max entries.
    pub const fn space() -> usize {
        8 + 4 + MAX_CATEGORIES * Category::SIZE
    }

    pub fn find(&self, address: &Pubkey) -> EngineResult<&Category> {
        self.entries
            .iter()
            .find(|c| c.category_address == *address)
            .ok_or(VestingError::NotFound)
    }

    pub fn find_mut(&mut self, address: &Pubkey) -> EngineResult<&mut Category> {
        self.entries
            .iter_mut()
            .find(|c| c.category_address == *address)
            .ok_or(VestingError::NotFound)
    }

    /// Validate and append; the registry is unchanged on any failure.
    pub fn register(&mut self, input: CategoryInput) -> EngineResult<&Category> {
        let category = Category::new(input)?;
        if self.find(&category.category_address).is_ok() {
            return Err(VestingError::AlreadyExists);
        }
        if self.entries.len() >= MAX_CATEGORIES {
            return Err(VestingError::CategoryListFull);
        }
        self.entries.push(category);
        Ok(&self.entries[self.entries.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;
    const TOTAL: u64 = 75_000_000;

    fn input(address: Pubkey) -> CategoryInput {
        CategoryInput {
            category_address: address,
            category_name: "Stacking".to_string(),
            total_allocation: TOTAL,
            vesting_count: 3,
            vesting_duration: 60,
            first_vesting_date: NOW + 120,
        }
    }

    fn registry() -> Categories {
        Categories { entries: Vec::new() }
    }

    fn claim(c: &mut Category, now: i64) -> EngineResult<u64> {
        let amount = c.claimable(now)?;
        c.record_claim(amount)?;
        Ok(amount)
    }

    fn quote(reg: &Categories, caller: &Pubkey, now: i64) -> EngineResult<u64> {
        reg.find(caller).and_then(|c| c.claimable(now))
    }

    #[test]
    fn claim_quote_precedes_any_ledger_state() {
        // No mint, no vault: the registry alone decides these outcomes.
        let mut reg = registry();
        let addr = Pubkey::new_unique();
        reg.register(input(addr)).unwrap();

        assert!(matches!(quote(&reg, &Pubkey::new_unique(), NOW), Err(VestingError::NotFound)));
        assert!(matches!(quote(&reg, &addr, NOW + 10), Err(VestingError::NotStarted)));
        assert_eq!(quote(&reg, &addr, NOW + 120).unwrap(), 25_000_000);
    }

    #[test]
    fn register_rejects_bad_arguments() {
        let mut reg = registry();
        let addr = Pubkey::new_unique();

        let mut no_name = input(addr);
        no_name.category_name = String::new();
        assert!(matches!(reg.register(no_name), Err(VestingError::InvalidArgument)));

        let mut long_name = input(addr);
        long_name.category_name = "x".repeat(MAX_CATEGORY_NAME_LEN + 1);
        assert!(matches!(reg.register(long_name), Err(VestingError::InvalidArgument)));

        let mut zero_count = input(addr);
        zero_count.vesting_count = 0;
        assert!(matches!(reg.register(zero_count), Err(VestingError::InvalidArgument)));

        let mut zero_duration = input(addr);
        zero_duration.vesting_duration = 0;
        assert!(matches!(reg.register(zero_duration), Err(VestingError::InvalidArgument)));

        assert!(matches!(
            reg.register(input(Pubkey::default())),
            Err(VestingError::InvalidArgument)
        ));
        assert!(reg.entries.is_empty());
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut reg = registry();
        let addr = Pubkey::new_unique();
        reg.register(input(addr)).unwrap();

        let mut dup = input(addr);
        dup.category_name = "Foundation".to_string();
        dup.total_allocation = 1;
        assert!(matches!(reg.register(dup), Err(VestingError::AlreadyExists)));

        assert_eq!(reg.entries.len(), 1);
        let first = reg.find(&addr).unwrap();
        assert_eq!(first.category_name, "Stacking");
        assert_eq!(first.total_allocation, TOTAL);
        assert_eq!(first.collected_allocation, 0);
    }

    #[test]
    fn registry_preserves_order_and_capacity() {
        let mut reg = registry();
        let addrs: Vec<Pubkey> = (0..MAX_CATEGORIES).map(|_| Pubkey::new_unique()).collect();
        for a in &addrs {
            reg.register(input(*a)).unwrap();
        }
        let listed: Vec<Pubkey> = reg.entries.iter().map(|c| c.category_address).collect();
        assert_eq!(listed, addrs);

        assert!(matches!(
            reg.register(input(Pubkey::new_unique())),
            Err(VestingError::CategoryListFull)
        ));
        assert!(matches!(reg.find(&Pubkey::new_unique()), Err(VestingError::NotFound)));
    }

    #[test]
    fn parameters_mutable_until_stored_date() {
        let mut c = Category::new(input(Pubkey::new_unique())).unwrap();

        assert_eq!(c.set_vesting_duration(NOW, 50).unwrap(), 60);
        assert_eq!(c.set_vesting_count(NOW, 5).unwrap(), 3);
        // Gate is on the stored date, so a past date is still accepted pre-start.
        assert_eq!(c.set_first_vesting_date(NOW, NOW - 10).unwrap(), NOW + 120);
        assert_eq!(c.first_vesting_date, NOW - 10);

        assert!(matches!(
            c.set_first_vesting_date(NOW, NOW + 1_000),
            Err(VestingError::DistributionStarted)
        ));
        assert!(matches!(c.set_vesting_duration(NOW, 10), Err(VestingError::DurationLocked)));
        assert!(matches!(c.set_vesting_count(NOW, 10), Err(VestingError::CountLocked)));

        assert_eq!(c.first_vesting_date, NOW - 10);
        assert_eq!(c.vesting_duration, 50);
        assert_eq!(c.vesting_count, 5);
    }

    #[test]
    fn parameter_setters_reject_zero() {
        let mut c = Category::new(input(Pubkey::new_unique())).unwrap();
        assert!(matches!(c.set_vesting_duration(NOW, 0), Err(VestingError::InvalidArgument)));
        assert!(matches!(c.set_vesting_count(NOW, 0), Err(VestingError::InvalidArgument)));
        assert_eq!(c.vesting_duration, 60);
        assert_eq!(c.vesting_count, 3);
    }

    #[test]
    fn three_installment_schedule() {
        let mut c = Category::new(input(Pubkey::new_unique())).unwrap();

        assert!(matches!(claim(&mut c, NOW + 119), Err(VestingError::NotStarted)));
        assert_eq!(c.collected_allocation, 0);

        assert_eq!(claim(&mut c, NOW + 125).unwrap(), 25_000_000);
        assert!(matches!(claim(&mut c, NOW + 126), Err(VestingError::NothingAvailable)));
        assert_eq!(c.collected_allocation, 25_000_000);

        assert_eq!(claim(&mut c, NOW + 185).unwrap(), 25_000_000);
        assert_eq!(claim(&mut c, NOW + 250).unwrap(), 25_000_000);
        assert_eq!(c.collected_allocation, TOTAL);

        assert!(matches!(claim(&mut c, NOW + 251), Err(VestingError::FullyClaimed)));
        assert_eq!(c.collected_allocation, TOTAL);
    }

    #[test]
    fn late_single_claim_releases_everything_including_dust() {
        let mut i = input(Pubkey::new_unique());
        i.total_allocation = 100;
        let mut c = Category::new(i).unwrap();

        assert_eq!(claim(&mut c, NOW + 125).unwrap(), 33);
        let end = NOW + 120 + 3 * 60;
        assert_eq!(claim(&mut c, end).unwrap(), 67);
        assert_eq!(c.collected_allocation, 100);
    }

    #[test]
    fn collected_is_monotonic_and_bounded() {
        let mut i = input(Pubkey::new_unique());
        i.total_allocation = 1_000_003;
        i.vesting_count = 7;
        i.vesting_duration = 13;
        let mut c = Category::new(i).unwrap();

        let mut last = 0;
        for step in 0..200 {
            let _ = claim(&mut c, NOW + 100 + step * 3);
            assert!(c.collected_allocation >= last);
            assert!(c.collected_allocation <= c.total_allocation);
            last = c.collected_allocation;
        }
        assert_eq!(c.collected_allocation, c.total_allocation);
    }

    #[test]
    fn earliest_possible_first_date_is_claimable() {
        let mut i = input(Pubkey::new_unique());
        i.first_vesting_date = i64::MIN;
        let mut c = Category::new(i).unwrap();
        assert_eq!(claim(&mut c, NOW).unwrap(), TOTAL);
        assert!(matches!(claim(&mut c, NOW), Err(VestingError::FullyClaimed)));
    }

    #[test]
    fn claimable_is_read_only() {
        let c = Category::new(input(Pubkey::new_unique())).unwrap();
        let before = c.clone();
        assert_eq!(c.claimable(NOW + 200).unwrap(), 50_000_000);
        assert_eq!(c, before);
    }

    #[test]
    fn record_claim_never_exceeds_allocation() {
        let mut c = Category::new(input(Pubkey::new_unique())).unwrap();
        assert!(matches!(c.record_claim(TOTAL + 1), Err(VestingError::MathOverflow)));
        assert_eq!(c.collected_allocation, 0);
    }

    #[test]
    fn view_reports_live_fields() {
        let mut c = Category::new(input(Pubkey::new_unique())).unwrap();

        let before = c.view(NOW);
        assert_eq!(before.available_allocation, 0);
        assert_eq!(before.elapsed_periods, 0);
        assert_eq!(before.next_vesting_date, NOW + 120);

        claim(&mut c, NOW + 125).unwrap();
        let mid = c.view(NOW + 190);
        assert_eq!(mid.collected_allocation, 25_000_000);
        assert_eq!(mid.available_allocation, 25_000_000);
        assert_eq!(mid.elapsed_periods, 2);
        assert_eq!(mid.next_vesting_date, NOW + 240);

        let end = c.view(NOW + 10_000);
        assert_eq!(end.available_allocation, 50_000_000);
        assert_eq!(end.next_vesting_date, NOW + 240);
    }
}
