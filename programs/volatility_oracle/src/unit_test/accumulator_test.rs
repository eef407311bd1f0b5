// Tests for the accumulator record and account

use super::{assert_error, mock_pubkey};
use crate::constants::{DSQ_BOUND, MEAN_BOUND};
use crate::errors::ErrorCode;
use crate::state::{Accumulator, AccumulatorRecord};
use anchor_lang::prelude::*;

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = AccumulatorRecord::default();
        assert_eq!(record.count(), 0);
        assert_eq!(record.last_timestamp(), 0);
        assert_eq!(record.mean(), 0);
        assert_eq!(record.dsq(), 0);
    }

    #[test]
    fn test_count_bound() {
        let mut record = AccumulatorRecord::default();
        record.set_count(u16::MAX as u64).unwrap();
        assert_eq!(record.count(), u16::MAX);
        assert_error(
            record.set_count(u16::MAX as u64 + 1),
            ErrorCode::SampleCountOverflow,
        );
        // A rejected value leaves the field untouched
        assert_eq!(record.count(), u16::MAX);
    }

    #[test]
    fn test_mean_bound_is_exclusive() {
        let mut record = AccumulatorRecord::default();
        record.set_mean(MEAN_BOUND - 1).unwrap();
        record.set_mean(-MEAN_BOUND + 1).unwrap();
        assert_error(record.set_mean(MEAN_BOUND), ErrorCode::MeanOutOfRange);
        assert_error(record.set_mean(-MEAN_BOUND), ErrorCode::MeanOutOfRange);
        assert_eq!(record.mean(), -MEAN_BOUND + 1);
    }

    #[test]
    fn test_dsq_bound_is_exclusive() {
        let mut record = AccumulatorRecord::default();
        record.set_dsq(DSQ_BOUND - 1).unwrap();
        assert_error(record.set_dsq(DSQ_BOUND), ErrorCode::SumOfSquaresOutOfRange);
        assert_eq!(record.dsq(), DSQ_BOUND - 1);
    }

    #[test]
    fn test_timestamp_never_regresses() {
        let mut record = AccumulatorRecord::default();
        record.set_last_timestamp(86_400).unwrap();
        record.set_last_timestamp(86_400).unwrap();
        assert_error(
            record.set_last_timestamp(86_399),
            ErrorCode::TimestampRegression,
        );
        assert_eq!(record.last_timestamp(), 86_400);
    }
}

#[cfg(test)]
mod account_tests {
    use super::*;

    #[test]
    fn test_account_len_matches_serialized_size() {
        let mut record = Vec::new();
        AccumulatorRecord::default().serialize(&mut record).unwrap();
        assert_eq!(record.len(), AccumulatorRecord::LEN);

        let mut data = Vec::new();
        Accumulator::default().serialize(&mut data).unwrap();
        assert_eq!(data.len() + 8, Accumulator::LEN);
    }

    #[test]
    fn test_bind_only_once() {
        let mut accumulator = Accumulator::default();
        accumulator.bind(mock_pubkey(1), 254);
        accumulator.bind(mock_pubkey(2), 1);
        assert_eq!(accumulator.oracle, mock_pubkey(1));
        assert_eq!(accumulator.bump, 254);
    }

    #[test]
    fn test_store_replaces_record_and_price() {
        let mut accumulator = Accumulator::default();
        let mut record = AccumulatorRecord::default();
        record.set_count(3).unwrap();
        accumulator.store(record, 42);
        assert_eq!(accumulator.record(), record);
        assert_eq!(accumulator.last_price(), 42);
    }
}
