/// Initialize Oracle Instruction Module
///
/// Creates the immutable configuration of a volatility oracle for one pool and
/// sampling period. All configuration errors surface here, before any
/// accumulator state exists.
use crate::constants::ORACLE_SEED;
use crate::errors::ErrorCode;
use crate::price_source::{ObservationFeed, PriceSource};
use crate::state::{InitializeOracleParams, VolatilityOracle};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

#[derive(Accounts)]
#[instruction(period: u32)]
pub struct InitializeOracle<'info> {
    #[account(
        init,
        payer = payer,
        space = VolatilityOracle::LEN,
        seeds = [
            ORACLE_SEED,
            price_source.key().as_ref(),
            period.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub oracle: Account<'info, VolatilityOracle>,

    /// CHECK: Decoded as an `ObservationFeed`; its owner is recorded and
    /// re-checked on every later read
    pub price_source: UncheckedAccount<'info>,

    pub base_mint: InterfaceAccount<'info, Mint>,

    pub quote_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler function for initializing a new volatility oracle
///
/// # Parameters
/// * `ctx` - The context containing all accounts involved in the operation
/// * `period` - Seconds between canonical samples
/// * `window_size` - Cap on the number of samples in the Welford window
///
/// # Errors
/// * `ErrorCode::InvalidPeriod` - If `period` is zero
/// * `ErrorCode::InvalidWindowSize` - If `window_size` is zero
/// * `ErrorCode::CurrencyNotInPair` - If the base mint is not a pool token
/// * `ErrorCode::QuoteCurrencyMismatch` - If the quote mint is not the other pool token
/// * `ErrorCode::DecimalsMismatch` - If the base mint disagrees with the feed's decimals
pub fn handler(ctx: Context<InitializeOracle>, period: u32, window_size: u16) -> Result<()> {
    let price_source = ctx.accounts.price_source.to_account_info();
    let price_program = *price_source.owner;
    let feed = ObservationFeed::load(&price_source, &price_program)?;

    let base_mint = ctx.accounts.base_mint.key();
    let quote_mint = ctx.accounts.quote_mint.key();
    validate_pair(&feed, &base_mint, &quote_mint)?;

    let feed_decimals = feed
        .decimals(&base_mint)
        .ok_or(ErrorCode::CurrencyNotInPair)?;
    require!(
        feed_decimals == ctx.accounts.base_mint.decimals,
        ErrorCode::DecimalsMismatch
    );

    let oracle_key = ctx.accounts.oracle.key();
    let oracle = &mut ctx.accounts.oracle;
    oracle.initialize(InitializeOracleParams {
        bump: ctx.bumps.oracle,
        pool: price_source.key(),
        price_program,
        base_mint,
        quote_mint,
        base_decimals: feed_decimals,
        period,
        window_size,
    })?;

    emit!(OracleInitialized {
        oracle: oracle_key,
        pool: oracle.pool,
        base_mint,
        quote_mint,
        period,
        window_size,
        annualization_factor: oracle.annualization_factor,
    });

    msg!(
        "Volatility oracle initialized for pool {}: period {}s, window {}, annualization factor {}",
        oracle.pool,
        period,
        window_size,
        oracle.annualization_factor
    );

    Ok(())
}

/// Checks that `base_mint` and `quote_mint` are the pool's two tokens, in either order.
pub fn validate_pair<S: PriceSource>(
    source: &S,
    base_mint: &Pubkey,
    quote_mint: &Pubkey,
) -> Result<()> {
    require!(
        *base_mint != Pubkey::default() && *quote_mint != Pubkey::default(),
        ErrorCode::InvalidCurrency
    );

    let (token_0, token_1) = source.token_mints();
    let complement = if *base_mint == token_0 {
        token_1
    } else if *base_mint == token_1 {
        token_0
    } else {
        return err!(ErrorCode::CurrencyNotInPair);
    };

    require_keys_eq!(*quote_mint, complement, ErrorCode::QuoteCurrencyMismatch);
    Ok(())
}

/// Event emitted when a new volatility oracle is configured
#[event]
pub struct OracleInitialized {
    /// The oracle configuration account
    pub oracle: Pubkey,

    /// The tracked pool
    pub pool: Pubkey,

    pub base_mint: Pubkey,

    pub quote_mint: Pubkey,

    /// Seconds between samples
    pub period: u32,

    pub window_size: u16,

    pub annualization_factor: u128,
}
