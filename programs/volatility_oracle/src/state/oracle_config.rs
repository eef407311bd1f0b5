use crate::constants::{COMMIT_PHASE_DURATION, SECONDS_PER_YEAR};
use crate::errors::ErrorCode;
use crate::math::fixed_point::isqrt;
use crate::scheduler::PeriodScheduler;
use anchor_lang::prelude::*;

/// Immutable configuration of a volatility oracle for one pool and period.
///
/// PDA of `[ORACLE_SEED, pool, period.to_le_bytes()]`.
#[account]
#[derive(Default, Debug)]
pub struct VolatilityOracle {
    /// Bump seed for PDA.
    pub bump: u8,
    /// The tracked pool (its observation feed account).
    pub pool: Pubkey,
    /// Program owning the pool's feed account.
    pub price_program: Pubkey,
    /// Mint whose price is sampled.
    pub base_mint: Pubkey,
    /// Mint the price is expressed in.
    pub quote_mint: Pubkey,
    /// Decimals of the base mint; one whole unit is priced.
    pub base_decimals: u8,
    /// Seconds between canonical samples.
    pub period: u32,
    /// Half-width of the commit window around each boundary.
    pub commit_phase_duration: u32,
    /// Welford window cap.
    pub window_size: u16,
    /// floor(sqrt(SECONDS_PER_YEAR / period)).
    pub annualization_factor: u128,
}

/// Parameters for initializing a new oracle.
#[derive(Clone, Debug)]
pub struct InitializeOracleParams {
    pub bump: u8,
    pub pool: Pubkey,
    pub price_program: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub base_decimals: u8,
    pub period: u32,
    pub window_size: u16,
}

impl VolatilityOracle {
    pub const LEN: usize = 8 // discriminator
        + 1 // bump
        + 32 // pool
        + 32 // price_program
        + 32 // base_mint
        + 32 // quote_mint
        + 1 // base_decimals
        + 4 // period
        + 4 // commit_phase_duration
        + 2 // window_size
        + 16; // annualization_factor

    /// Validates and stores the configuration.
    ///
    /// Checks that do not need the price source; pair membership of the mints
    /// is validated by the instruction against the decoded feed.
    pub fn initialize(&mut self, params: InitializeOracleParams) -> Result<()> {
        require!(params.pool != Pubkey::default(), ErrorCode::InvalidPool);
        require!(
            params.base_mint != Pubkey::default() && params.quote_mint != Pubkey::default(),
            ErrorCode::InvalidCurrency
        );
        require!(params.period > 0, ErrorCode::InvalidPeriod);
        require!(params.window_size > 0, ErrorCode::InvalidWindowSize);

        self.bump = params.bump;
        self.pool = params.pool;
        self.price_program = params.price_program;
        self.base_mint = params.base_mint;
        self.quote_mint = params.quote_mint;
        self.base_decimals = params.base_decimals;
        self.period = params.period;
        self.commit_phase_duration = COMMIT_PHASE_DURATION;
        self.window_size = params.window_size;
        self.annualization_factor = annualization_factor(params.period)?;

        Ok(())
    }

    pub fn scheduler(&self) -> Result<PeriodScheduler> {
        PeriodScheduler::new(self.period, self.commit_phase_duration)
    }
}

/// floor(sqrt(SECONDS_PER_YEAR / period)); periods per year under the root.
pub fn annualization_factor(period: u32) -> Result<u128> {
    require!(period > 0, ErrorCode::InvalidPeriod);
    Ok(isqrt((SECONDS_PER_YEAR / period as u64) as u128))
}
