// Price Source Module
//
// Read-only view of the AMM's observation ring. The oracle never writes to the
// feed; it only needs the pool composition, the ring's write cursor and
// capacity, and the cumulative tick recorded in each slot.

use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

/// Length of the account discriminator preceding the feed's borsh payload.
pub const DISCRIMINATOR_LEN: usize = 8;

/// A single slot of the observation ring as seen by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObservationView {
    /// Timestamp of the observation (seconds, truncated to 32 bits by the feed)
    pub block_timestamp: u32,

    /// Tick multiplied by seconds elapsed for the life of the pool
    pub tick_cumulative: i64,

    /// Whether the slot has been written
    pub initialized: bool,
}

/// Collaborator interface consumed from the AMM price feed.
pub trait PriceSource {
    /// The pool's two tokens in the pool's canonical order (token0, token1).
    fn token_mints(&self) -> (Pubkey, Pubkey);

    /// Index of the most recently written observation.
    fn observation_index(&self) -> u16;

    /// Number of ring slots currently in use.
    fn observation_cardinality(&self) -> u16;

    /// Observation stored at `index`.
    fn observation(&self, index: u16) -> Result<ObservationView>;

    /// Decimal scale of one of the pool's mints, `None` for a foreign mint.
    fn decimals(&self, mint: &Pubkey) -> Option<u8>;
}

/// Represents a single price observation point, as laid out by the feed
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Observation {
    /// Timestamp of the observation
    pub block_timestamp: u32,

    /// Cumulative tick value since pool initialization
    pub tick_cumulative: i64,

    /// Whether this observation slot has been initialized
    pub initialized: bool,
}

/// Decoded observation account of a concentrated-liquidity pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct ObservationFeed {
    /// Mint of token0
    pub token_mint_0: Pubkey,

    /// Mint of token1
    pub token_mint_1: Pubkey,

    /// Decimals of token0
    pub mint_decimals_0: u8,

    /// Decimals of token1
    pub mint_decimals_1: u8,

    /// Current observation index (points to the most recent observation)
    pub observation_index: u16,

    /// Current number of observation slots in use
    pub observation_cardinality: u16,

    /// Ring buffer of observations
    pub observations: Vec<Observation>,
}

impl ObservationFeed {
    /// Decodes the feed from raw account data.
    ///
    /// Trailing bytes past the encoded ring are ignored since the feed account
    /// is allocated at its maximum size.
    pub fn try_from_account_data(data: &[u8]) -> Result<Self> {
        if data.len() < DISCRIMINATOR_LEN {
            return err!(ErrorCode::InvalidPriceSource);
        }

        let mut payload = &data[DISCRIMINATOR_LEN..];
        let feed = ObservationFeed::deserialize(&mut payload)
            .map_err(|_| error!(ErrorCode::InvalidPriceSource))?;

        if feed.observation_cardinality == 0
            || feed.observation_cardinality as usize > feed.observations.len()
        {
            return err!(ErrorCode::InvalidPriceSource);
        }

        Ok(feed)
    }

    /// Loads and decodes a feed account, checking it is owned by `expected_owner`.
    pub fn load(account: &AccountInfo, expected_owner: &Pubkey) -> Result<Self> {
        require_keys_eq!(*account.owner, *expected_owner, ErrorCode::PriceSourceMismatch);
        let data = account.try_borrow_data()?;
        Self::try_from_account_data(&data[..])
    }
}

impl PriceSource for ObservationFeed {
    fn token_mints(&self) -> (Pubkey, Pubkey) {
        (self.token_mint_0, self.token_mint_1)
    }

    fn observation_index(&self) -> u16 {
        self.observation_index
    }

    fn observation_cardinality(&self) -> u16 {
        self.observation_cardinality
    }

    fn observation(&self, index: u16) -> Result<ObservationView> {
        if index >= self.observation_cardinality {
            return err!(ErrorCode::ObservationIndexOutOfBounds);
        }

        let observation = self
            .observations
            .get(index as usize)
            .ok_or(ErrorCode::ObservationIndexOutOfBounds)?;

        Ok(ObservationView {
            block_timestamp: observation.block_timestamp,
            tick_cumulative: observation.tick_cumulative,
            initialized: observation.initialized,
        })
    }

    fn decimals(&self, mint: &Pubkey) -> Option<u8> {
        if *mint == self.token_mint_0 {
            Some(self.mint_decimals_0)
        } else if *mint == self.token_mint_1 {
            Some(self.mint_decimals_1)
        } else {
            None
        }
    }
}
