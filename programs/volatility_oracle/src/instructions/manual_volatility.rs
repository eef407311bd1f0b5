/// Manual Volatility Instruction Module
///
/// Administrative override that stores an annualized volatility per pool
/// directly, bypassing the accumulator. Separate from the permissionless
/// commit path.
use crate::constants::{MANUAL_ORACLE_SEED, MANUAL_VOLATILITY_SEED};
use crate::state::{ManualVolOracle, ManualVolatility};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeManualOracle<'info> {
    #[account(
        init,
        payer = admin,
        space = ManualVolOracle::LEN,
        seeds = [MANUAL_ORACLE_SEED],
        bump
    )]
    pub manual_oracle: Account<'info, ManualVolOracle>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetManualVolatility<'info> {
    #[account(seeds = [MANUAL_ORACLE_SEED], bump = manual_oracle.bump)]
    pub manual_oracle: Account<'info, ManualVolOracle>,

    #[account(
        init_if_needed,
        payer = admin,
        space = ManualVolatility::LEN,
        seeds = [MANUAL_VOLATILITY_SEED, pool.key().as_ref()],
        bump
    )]
    pub manual_volatility: Account<'info, ManualVolatility>,

    /// CHECK: Only the key is used, as the PDA seed
    pub pool: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ReadManualVolatility<'info> {
    #[account(
        seeds = [MANUAL_VOLATILITY_SEED, manual_volatility.pool.as_ref()],
        bump = manual_volatility.bump
    )]
    pub manual_volatility: Account<'info, ManualVolatility>,
}

pub fn initialize_manual_oracle_handler(ctx: Context<InitializeManualOracle>) -> Result<()> {
    let manual_oracle = &mut ctx.accounts.manual_oracle;
    manual_oracle.bump = ctx.bumps.manual_oracle;
    manual_oracle.admin = ctx.accounts.admin.key();

    msg!("Manual volatility oracle administered by {}", manual_oracle.admin);
    Ok(())
}

pub fn set_manual_volatility_handler(
    ctx: Context<SetManualVolatility>,
    annualized_vol: u64,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.manual_oracle.authorize(&admin)?;

    let pool = ctx.accounts.pool.key();
    ctx.accounts
        .manual_volatility
        .set(pool, ctx.bumps.manual_volatility, annualized_vol)?;

    emit!(ManualVolatilitySet {
        pool,
        annualized_vol,
        admin,
    });

    msg!("Manual volatility for {} set to {}", pool, annualized_vol);
    Ok(())
}

pub fn manual_volatility_handler(ctx: Context<ReadManualVolatility>) -> Result<u64> {
    Ok(ctx.accounts.manual_volatility.annualized_vol)
}

/// Event emitted when the administrator overrides a pool's volatility
#[event]
pub struct ManualVolatilitySet {
    pub pool: Pubkey,

    /// Annualized volatility, 1e8 scale
    pub annualized_vol: u64,

    pub admin: Pubkey,
}
