//! Program-wide constants.

/// Max categories stored in the registry PDA.
pub const MAX_CATEGORIES: usize = 32;

/// Max length of a category label, in bytes.
pub const MAX_CATEGORY_NAME_LEN: usize = 32;

/// PDA seeds.
pub const VESTING_STATE_SEED: &[u8] = b"vesting_state";
pub const CATEGORIES_SEED: &[u8] = b"categories";
pub const VAULT_SEED: &[u8] = b"vault";
