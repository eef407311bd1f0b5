/// Volatility Oracle Protocol Constants
///
/// Scheduling windows, fixed-point scales and storage bounds shared by the
/// commit state machine, the TWAP calculator and the variance accumulator.

/// Length of the window on either side of a period boundary in which a
/// commit is accepted (30 minutes).
pub const COMMIT_PHASE_DURATION: u32 = 1800;

/// Seconds in a 365-day year, used for the annualization factor.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// 1e18 fixed-point unit used for period returns and logarithms.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Scale of log-return samples, the running mean and reported volatility (1e8).
pub const RETURN_SCALE: u128 = 100_000_000;

/// Divisor taking a WAD-scaled logarithm down to `RETURN_SCALE`.
pub const LOG_RESCALE: i128 = (WAD / RETURN_SCALE) as i128;

/// Maximum number of samples an accumulator can hold (16-bit field).
pub const MAX_SAMPLE_COUNT: u64 = u16::MAX as u64;

/// Exclusive bound on the magnitude of the running mean (96-bit signed field).
pub const MEAN_BOUND: i128 = 1 << 95;

/// Exclusive bound on the sum of squared deviations (112-bit field).
pub const DSQ_BOUND: u128 = 1 << 112;

/// Lowest accepted manual volatility: 50% in 1e8 scale.
pub const MIN_MANUAL_VOLATILITY: u64 = 50_000_000;

/// Highest accepted manual volatility: 400% in 1e8 scale.
pub const MAX_MANUAL_VOLATILITY: u64 = 400_000_000;

/// The minimum tick index supported by the price feed.
///
/// Calculated as log_1.0001(2^-128).
pub const MIN_TICK: i32 = -887272;

/// The maximum tick index supported by the price feed.
pub const MAX_TICK: i32 = 887272;

/// sqrt(1.0001^MIN_TICK) in Q64.96.
pub const MIN_SQRT_RATIO: u128 = 4295128739;

/// PDA seed of the per-pool oracle configuration.
pub const ORACLE_SEED: &[u8] = b"volatility_oracle";

/// PDA seed of the per-oracle accumulator.
pub const ACCUMULATOR_SEED: &[u8] = b"accumulator";

/// PDA seed of the manual oracle singleton.
pub const MANUAL_ORACLE_SEED: &[u8] = b"manual_vol_oracle";

/// PDA seed of a pool's manual volatility value.
pub const MANUAL_VOLATILITY_SEED: &[u8] = b"manual_volatility";
