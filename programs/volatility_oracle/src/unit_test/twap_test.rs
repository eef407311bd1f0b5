// Tests for the TWAP calculator

use super::{assert_error, feed_at_tick, mock_pubkey, TOKEN_0, TOKEN_1};
use crate::constants::MAX_TICK;
use crate::errors::ErrorCode;
use crate::price_source::Observation;
use crate::twap::*;

#[cfg(test)]
mod average_tick_tests {
    use super::*;

    #[test]
    fn test_average_tick_floors_negative_deltas() {
        assert_eq!(average_tick(0, -7, 2).unwrap(), -4);
        assert_eq!(average_tick(0, 7, 2).unwrap(), 3);
        assert_eq!(average_tick(100, 100, 10).unwrap(), 0);
        assert_eq!(average_tick(-3_600, -7_200, 3_600).unwrap(), -1);
    }

    #[test]
    fn test_average_tick_zero_duration() {
        assert_error(average_tick(0, 10, 0), ErrorCode::InsufficientObservations);
    }

    #[test]
    fn test_average_tick_out_of_range() {
        assert_error(
            average_tick(0, MAX_TICK as i64 + 1, 1),
            ErrorCode::TickOutOfRange,
        );
        assert_error(
            average_tick(i64::MIN, i64::MAX, 1),
            ErrorCode::MathOverflow,
        );
    }
}

#[cfg(test)]
mod observation_ring_tests {
    use super::*;

    fn observation(block_timestamp: u32, tick_cumulative: i64) -> Observation {
        Observation {
            block_timestamp,
            tick_cumulative,
            initialized: true,
        }
    }

    #[test]
    fn test_unwrapped_ring_uses_slot_zero() {
        let mut feed = feed_at_tick(0);
        feed.observation_cardinality = 4;
        feed.observations = vec![
            observation(100, 0),
            observation(200, 500),
            Observation::default(),
            Observation::default(),
        ];

        let (oldest, newest) = oldest_and_newest(&feed).unwrap();
        assert_eq!(oldest.block_timestamp, 100);
        assert_eq!(newest.block_timestamp, 200);
    }

    #[test]
    fn test_wrapped_ring_uses_slot_after_cursor() {
        let mut feed = feed_at_tick(0);
        feed.observation_cardinality = 4;
        feed.observation_index = 1;
        feed.observations = vec![
            observation(500, 40),
            observation(600, 50),
            observation(300, 20),
            observation(400, 30),
        ];

        let (oldest, newest) = oldest_and_newest(&feed).unwrap();
        assert_eq!(oldest.block_timestamp, 300);
        assert_eq!(newest.block_timestamp, 600);
    }

    #[test]
    fn test_uninitialized_newest_is_rejected() {
        let mut feed = feed_at_tick(0);
        feed.observations[1].initialized = false;
        assert_error(
            oldest_and_newest(&feed),
            ErrorCode::InsufficientObservations,
        );
    }

    #[test]
    fn test_twap_spans_timestamp_wraparound() {
        let mut feed = feed_at_tick(0);
        feed.observations = vec![
            observation(u32::MAX - 99, 0),
            observation(100, 100 * 200),
        ];
        // 200 s across the u32 wrap at tick 100
        assert_eq!(twap(&feed, &mock_pubkey(TOKEN_0), 9).unwrap(), 1_010_049_662);
    }

    #[test]
    fn test_single_observation_has_no_duration() {
        let mut feed = feed_at_tick(0);
        feed.observation_index = 0;
        feed.observation_cardinality = 1;
        assert_error(
            twap(&feed, &mock_pubkey(TOKEN_0), 9),
            ErrorCode::InsufficientObservations,
        );
    }
}

#[cfg(test)]
mod quote_tests {
    use super::*;

    #[test]
    fn test_quote_at_tick_zero_is_identity() {
        assert_eq!(quote_at_tick(0, 1_000_000_000, true).unwrap(), 1_000_000_000);
        assert_eq!(quote_at_tick(0, 1_000_000_000, false).unwrap(), 1_000_000_000);
    }

    #[test]
    fn test_quote_follows_token_order() {
        // 1.0001^100 ~ 1.01005
        assert_eq!(quote_at_tick(100, 1_000_000_000, true).unwrap(), 1_010_049_662);
        assert_eq!(quote_at_tick(100, 1_000_000_000, false).unwrap(), 990_050_328);
        assert_eq!(quote_at_tick(-4, 1_000_000_000, true).unwrap(), 999_600_099);
    }

    #[test]
    fn test_twap_prices_one_whole_base_unit() {
        let feed = feed_at_tick(100);
        assert_eq!(twap(&feed, &mock_pubkey(TOKEN_0), 9).unwrap(), 1_010_049_662);
        assert_eq!(twap(&feed, &mock_pubkey(TOKEN_1), 9).unwrap(), 990_050_328);
    }

    #[test]
    fn test_twap_rejects_foreign_mint() {
        let feed = feed_at_tick(100);
        assert_error(
            twap(&feed, &mock_pubkey(99), 9),
            ErrorCode::CurrencyNotInPair,
        );
    }
}
