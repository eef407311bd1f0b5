/// Volatility Oracle Error Definitions
///
/// Every failure aborts the triggering instruction as a whole; none of these
/// conditions is clamped or retried inside the program.
use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // === Configuration ===
    /// The tracked pool key is the default (all-zero) key
    #[msg("Pool address must not be empty")]
    InvalidPool,

    /// A base or quote mint key is the default (all-zero) key
    #[msg("Currency address must not be empty")]
    InvalidCurrency,

    #[msg("Period must be greater than zero")]
    InvalidPeriod,

    #[msg("Window size must be greater than zero")]
    InvalidWindowSize,

    /// The base mint is neither token0 nor token1 of the pool
    #[msg("Base currency is not part of the pool")]
    CurrencyNotInPair,

    /// The quote mint is not the token complementary to the base mint
    #[msg("Quote currency does not match the pool's other token")]
    QuoteCurrencyMismatch,

    #[msg("Mint decimals do not match the price source")]
    DecimalsMismatch,

    // === Price source ===
    #[msg("Price source account could not be decoded")]
    InvalidPriceSource,

    /// The supplied feed is not the one recorded at initialization, or its
    /// owner program changed
    #[msg("Price source does not match the oracle configuration")]
    PriceSourceMismatch,

    #[msg("Not enough observations to compute a time-weighted price")]
    InsufficientObservations,

    #[msg("Observation index out of bounds")]
    ObservationIndexOutOfBounds,

    // === Scheduling ===
    /// The gap between now and the nearest period boundary is at least the
    /// commit phase duration
    #[msg("Not in commit phase")]
    NotInCommitPhase,

    /// A sample was already accepted for the current period
    #[msg("Already committed for this period")]
    AlreadyCommitted,

    #[msg("Clock timestamp is invalid")]
    InvalidTimestamp,

    #[msg("Commit timestamp would move backwards")]
    TimestampRegression,

    // === Numeric range ===
    #[msg("Sample count exceeds 16-bit range")]
    SampleCountOverflow,

    #[msg("Running mean exceeds 96-bit signed range")]
    MeanOutOfRange,

    #[msg("Sum of squared deviations exceeds 112-bit range")]
    SumOfSquaresOutOfRange,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Tick outside supported range")]
    TickOutOfRange,

    #[msg("Logarithm input must be positive")]
    InvalidLogInput,

    // === Administration ===
    #[msg("Caller is not the oracle administrator")]
    Unauthorized,

    #[msg("Volatility cannot be less than 50%")]
    VolatilityTooLow,

    #[msg("Volatility cannot be more than 400%")]
    VolatilityTooHigh,
}
