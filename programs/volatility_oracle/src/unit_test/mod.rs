//! Unit tests, one file per module.

use crate::errors::ErrorCode;
use crate::price_source::{Observation, ObservationFeed};
use anchor_lang::prelude::*;
use std::fmt::Debug;

pub mod accumulator_test;
pub mod twap_test;

/// Asserts that `result` failed with `expected`.
pub fn assert_error<T: Debug>(result: Result<T>, expected: ErrorCode) {
    match result {
        Err(err) => {
            if let anchor_lang::prelude::Error::AnchorError(details) = err {
                assert_eq!(details.error_msg, expected.to_string());
            } else {
                panic!("Expected AnchorError with '{expected}' message, got {err:?}");
            }
        }
        Ok(value) => panic!("Expected {expected} error, got Ok({value:?})"),
    }
}

/// Create a mock Pubkey for testing
pub fn mock_pubkey(seed: u8) -> Pubkey {
    let mut bytes = [0u8; 32];
    bytes[0] = seed;
    Pubkey::new_from_array(bytes)
}

pub const TOKEN_0: u8 = 10;
pub const TOKEN_1: u8 = 11;

/// Two-slot feed whose average tick over one hour is `tick`.
pub fn feed_at_tick(tick: i32) -> ObservationFeed {
    ObservationFeed {
        token_mint_0: mock_pubkey(TOKEN_0),
        token_mint_1: mock_pubkey(TOKEN_1),
        mint_decimals_0: 9,
        mint_decimals_1: 6,
        observation_index: 1,
        observation_cardinality: 2,
        observations: vec![
            Observation {
                block_timestamp: 1_000,
                tick_cumulative: 0,
                initialized: true,
            },
            Observation {
                block_timestamp: 4_600,
                tick_cumulative: tick as i64 * 3_600,
                initialized: true,
            },
        ],
    }
}
