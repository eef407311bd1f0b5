/// Commit Instruction Module
///
/// Permissionless: anyone may submit the period's sample. The scheduler gate
/// makes the first commit inside a window the only one that lands.
use crate::constants::{ACCUMULATOR_SEED, ORACLE_SEED};
use crate::errors::ErrorCode;
use crate::oracle_core;
use crate::price_source::ObservationFeed;
use crate::state::{Accumulator, VolatilityOracle};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Commit<'info> {
    #[account(
        seeds = [
            ORACLE_SEED,
            oracle.pool.as_ref(),
            oracle.period.to_le_bytes().as_ref()
        ],
        bump = oracle.bump
    )]
    pub oracle: Account<'info, VolatilityOracle>,

    #[account(
        init_if_needed,
        payer = committer,
        space = Accumulator::LEN,
        seeds = [ACCUMULATOR_SEED, oracle.key().as_ref()],
        bump
    )]
    pub accumulator: Account<'info, Accumulator>,

    /// CHECK: Must be the oracle's pool feed; owner is checked when decoded
    #[account(address = oracle.pool @ ErrorCode::PriceSourceMismatch)]
    pub price_source: UncheckedAccount<'info>,

    #[account(mut)]
    pub committer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Commit>) -> Result<()> {
    let now = u64::try_from(Clock::get()?.unix_timestamp)
        .map_err(|_| error!(ErrorCode::InvalidTimestamp))?;

    let oracle_key = ctx.accounts.oracle.key();
    let feed = ObservationFeed::load(
        &ctx.accounts.price_source.to_account_info(),
        &ctx.accounts.oracle.price_program,
    )?;

    let accumulator = &mut ctx.accounts.accumulator;
    accumulator.bind(oracle_key, ctx.bumps.accumulator);

    let event = oracle_core::commit(
        &ctx.accounts.oracle,
        oracle_key,
        accumulator,
        &feed,
        now,
        ctx.accounts.committer.key(),
    )?;

    msg!(
        "Committed sample {} at {}: price {}, mean {}, dsq {}",
        event.count,
        event.commit_timestamp,
        event.price,
        event.mean,
        event.dsq
    );

    emit!(event);

    Ok(())
}
