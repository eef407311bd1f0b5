#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("7PNjwSj2kacYVkLd6w8eCEy71zVBdGpwoXLpyxF92Sjx");

pub mod constants;
pub mod errors;
pub mod math;
pub mod oracle_core;
pub mod price_source;
pub mod scheduler;
pub mod state;
pub mod twap;
pub mod welford;

// Instruction handlers and their account contexts
pub mod instructions;

#[cfg(test)]
pub mod unit_test;


pub use instructions::*;
pub use state::*;

#[program]
pub mod volatility_oracle {
    use super::*;

    /// Creates the oracle for one pool and sampling period.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `period` - Seconds between canonical samples (86400 for daily).
    /// * `window_size` - Maximum number of samples in the rolling window.
    pub fn initialize_oracle(
        ctx: Context<InitializeOracle>,
        period: u32,
        window_size: u16,
    ) -> Result<()> {
        instructions::initialize_oracle::handler(ctx, period, window_size)
    }

    /// Samples the pool's TWAP for the current period and folds the
    /// log-return into the accumulator. Callable by anyone inside a commit window.
    pub fn commit(ctx: Context<Commit>) -> Result<()> {
        instructions::commit::handler(ctx)
    }

    /// Per-period standard deviation of log-returns, 1e8 scale.
    pub fn current_stdev(ctx: Context<ReadVolatility>) -> Result<u128> {
        instructions::read_volatility::current_stdev_handler(ctx)
    }

    /// Standard deviation scaled to a year, 1e8 scale.
    pub fn annualized_stdev(ctx: Context<ReadVolatility>) -> Result<u128> {
        instructions::read_volatility::annualized_stdev_handler(ctx)
    }

    /// Live time-weighted price of one whole base unit in quote units.
    pub fn twap(ctx: Context<ReadTwap>) -> Result<u128> {
        instructions::read_volatility::twap_handler(ctx)
    }

    /// Creates the manual-override singleton; the payer becomes its admin.
    pub fn initialize_manual_oracle(ctx: Context<InitializeManualOracle>) -> Result<()> {
        instructions::manual_volatility::initialize_manual_oracle_handler(ctx)
    }

    /// Stores an administrator-supplied annualized volatility for a pool.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `annualized_vol` - Volatility in 1e8 scale, between 50% and 400%.
    pub fn set_manual_volatility(
        ctx: Context<SetManualVolatility>,
        annualized_vol: u64,
    ) -> Result<()> {
        instructions::manual_volatility::set_manual_volatility_handler(ctx, annualized_vol)
    }

    pub fn manual_volatility(ctx: Context<ReadManualVolatility>) -> Result<u64> {
        instructions::manual_volatility::manual_volatility_handler(ctx)
    }
}
