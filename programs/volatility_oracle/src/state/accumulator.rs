use crate::constants::{DSQ_BOUND, MAX_SAMPLE_COUNT, MEAN_BOUND};
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

/// Running statistics of one oracle's log-return samples.
///
/// Each field has a fixed-width ceiling; the setters reject out-of-range
/// values instead of truncating them, so a record that exists always fits.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccumulatorRecord {
    /// Number of samples folded in (16-bit)
    count: u16,
    /// Canonical period boundary of the most recent accepted commit
    last_timestamp: u64,
    /// Running mean of log-returns, 1e8 scale (96-bit signed)
    mean: i128,
    /// Sum of squared deviations from the mean, 1e16 scale (112-bit)
    dsq: u128,
}

impl AccumulatorRecord {
    pub const LEN: usize = 2 // count
        + 8 // last_timestamp
        + 16 // mean
        + 16; // dsq

    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn last_timestamp(&self) -> u64 {
        self.last_timestamp
    }

    pub fn mean(&self) -> i128 {
        self.mean
    }

    pub fn dsq(&self) -> u128 {
        self.dsq
    }

    pub fn set_count(&mut self, count: u64) -> Result<()> {
        require!(count <= MAX_SAMPLE_COUNT, ErrorCode::SampleCountOverflow);
        self.count = count as u16;
        Ok(())
    }

    pub fn set_last_timestamp(&mut self, timestamp: u64) -> Result<()> {
        require!(
            timestamp >= self.last_timestamp,
            ErrorCode::TimestampRegression
        );
        self.last_timestamp = timestamp;
        Ok(())
    }

    pub fn set_mean(&mut self, mean: i128) -> Result<()> {
        require!(
            mean > -MEAN_BOUND && mean < MEAN_BOUND,
            ErrorCode::MeanOutOfRange
        );
        self.mean = mean;
        Ok(())
    }

    pub fn set_dsq(&mut self, dsq: u128) -> Result<()> {
        require!(dsq < DSQ_BOUND, ErrorCode::SumOfSquaresOutOfRange);
        self.dsq = dsq;
        Ok(())
    }
}

/// Per-oracle accumulator account, created on the first commit.
///
/// PDA of `[ACCUMULATOR_SEED, oracle]`.
#[account]
#[derive(Default, Debug)]
pub struct Accumulator {
    /// Bump seed for PDA.
    pub bump: u8,
    /// The oracle configuration this accumulator belongs to.
    pub oracle: Pubkey,
    record: AccumulatorRecord,
    /// Most recent TWAP, quote units per whole base unit. Zero before the first sample.
    last_price: u128,
}

impl Accumulator {
    pub const LEN: usize = 8 // discriminator
        + 1 // bump
        + 32 // oracle
        + AccumulatorRecord::LEN
        + 16; // last_price

    pub fn record(&self) -> AccumulatorRecord {
        self.record
    }

    pub fn last_price(&self) -> u128 {
        self.last_price
    }

    /// Binds a freshly created account to its oracle. No-op once bound.
    pub fn bind(&mut self, oracle: Pubkey, bump: u8) {
        if self.oracle == Pubkey::default() {
            self.oracle = oracle;
            self.bump = bump;
        }
    }

    /// Replaces the record and the last price together.
    pub(crate) fn store(&mut self, record: AccumulatorRecord, last_price: u128) {
        self.record = record;
        self.last_price = last_price;
    }
}
