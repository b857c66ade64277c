use anchor_lang::prelude::*;

/// Custom error codes for the allocation vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Invalid argument")]
    InvalidArgument,

    #[msg("Category already exists")]
    AlreadyExists,

    #[msg("Address does not exist")]
    NotFound,

    #[msg("Distribution stage already started")]
    DistributionStarted,

    #[msg("Duration cannot be updated")]
    DurationLocked,

    #[msg("Vesting count cannot be updated")]
    CountLocked,

    #[msg("Distribution stage didn't start yet")]
    NotStarted,

    #[msg("There is no available allocation at the moment")]
    NothingAvailable,

    #[msg("All balance has been claimed")]
    FullyClaimed,

    #[msg("Token transfer failed: insufficient vault balance")]
    TransferFailed,

    #[msg("Token is the zero address")]
    InvalidAddress,

    #[msg("Address is not a token mint")]
    NotAContract,

    #[msg("Category list is full")]
    CategoryListFull,

    #[msg("Allocation sum would exceed total supply")]
    AllocationExceedsSupply,

    #[msg("Token mint has not been set")]
    TokenMintNotSet,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Deposit would exceed total supply")]
    OverDeposit,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Token mint cannot change once the vault has been funded")]
    MintLocked,
}

impl VestingError {
    /// Failures that may succeed later without any admin action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, VestingError::NotStarted | VestingError::NothingAvailable)
    }
}
