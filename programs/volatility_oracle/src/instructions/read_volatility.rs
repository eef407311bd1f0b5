/// Read-only instructions. Values are returned through the transaction's
/// return data, so they can be fetched with a simulated transaction.
use crate::constants::ACCUMULATOR_SEED;
use crate::errors::ErrorCode;
use crate::oracle_core;
use crate::price_source::ObservationFeed;
use crate::state::{Accumulator, AccumulatorRecord, VolatilityOracle};
use crate::twap;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ReadVolatility<'info> {
    pub oracle: Account<'info, VolatilityOracle>,

    /// Absent until the first commit
    #[account(seeds = [ACCUMULATOR_SEED, oracle.key().as_ref()], bump)]
    pub accumulator: Option<Account<'info, Accumulator>>,
}

impl ReadVolatility<'_> {
    fn record(&self) -> AccumulatorRecord {
        self.accumulator
            .as_ref()
            .map(|accumulator| accumulator.record())
            .unwrap_or_default()
    }
}

#[derive(Accounts)]
pub struct ReadTwap<'info> {
    pub oracle: Account<'info, VolatilityOracle>,

    /// CHECK: Must be the oracle's pool feed; owner is checked when decoded
    #[account(address = oracle.pool @ ErrorCode::PriceSourceMismatch)]
    pub price_source: UncheckedAccount<'info>,
}

pub fn current_stdev_handler(ctx: Context<ReadVolatility>) -> Result<u128> {
    let stdev = oracle_core::current_stdev(&ctx.accounts.record());
    msg!("Current stdev: {}", stdev);
    Ok(stdev)
}

pub fn annualized_stdev_handler(ctx: Context<ReadVolatility>) -> Result<u128> {
    let stdev = oracle_core::annualized_stdev(&ctx.accounts.oracle, &ctx.accounts.record())?;
    msg!("Annualized stdev: {}", stdev);
    Ok(stdev)
}

pub fn twap_handler(ctx: Context<ReadTwap>) -> Result<u128> {
    let oracle = &ctx.accounts.oracle;
    let feed = ObservationFeed::load(
        &ctx.accounts.price_source.to_account_info(),
        &oracle.price_program,
    )?;
    let price = twap::twap(&feed, &oracle.base_mint, oracle.base_decimals)?;
    msg!("TWAP: {}", price);
    Ok(price)
}
