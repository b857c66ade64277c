pub mod initialize_vesting;
pub mod set_token_mint;
pub mod set_admin;
pub mod deposit_tokens;
pub mod add_category;
pub mod set_first_vesting_date;
pub mod set_vesting_duration;
pub mod set_vesting_count;
pub mod claim_available_allocation;
pub mod query;

pub use initialize_vesting::*;
pub use set_token_mint::*;
pub use set_admin::*;
pub use deposit_tokens::*;
pub use add_category::*;
pub use set_first_vesting_date::*;
pub use set_vesting_duration::*;
pub use set_vesting_count::*;
pub use claim_available_allocation::*;
pub use query::*;
