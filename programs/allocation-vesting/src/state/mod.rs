pub mod categories;
pub mod vesting_state;

pub use categories::*;
pub use vesting_state::*;
