use anchor_lang::prelude::Error;
use arbitrary::Arbitrary;
use honggfuzz::fuzz;
use volatility_oracle::constants::{MAX_TICK, MIN_TICK};
use volatility_oracle::math::fixed_point::floor_div;
use volatility_oracle::twap::average_tick;

#[derive(Debug, Clone, Arbitrary)]
struct AverageTickInput {
    oldest: i64,
    newest: i64,
    duration: u32,
}

fn error_name(err: Error) -> String {
    match err {
        Error::AnchorError(details) => details.error_name.clone(),
        other => format!("{other:?}"),
    }
}

fn fuzz_average_tick(input: AverageTickInput) {
    let AverageTickInput {
        oldest,
        newest,
        duration,
    } = input;

    match average_tick(oldest, newest, duration) {
        Ok(tick) => {
            assert!((MIN_TICK..=MAX_TICK).contains(&tick));
            assert!(duration > 0);

            // tick * duration <= delta < (tick + 1) * duration
            let delta = newest as i128 - oldest as i128;
            let duration = duration as i128;
            assert!(tick as i128 * duration <= delta);
            assert!(delta < (tick as i128 + 1) * duration);
        }
        Err(err) => match error_name(err).as_str() {
            "InsufficientObservations" => assert_eq!(duration, 0),
            "MathOverflow" => assert!(newest.checked_sub(oldest).is_none()),
            "TickOutOfRange" => {}
            other => panic!("unexpected error {other}"),
        },
    }

    // Floor division agrees with the euclidean quotient for positive divisors
    if duration > 0 {
        let quotient = floor_div(oldest, duration as i64);
        assert_eq!(quotient.ok(), Some(oldest.div_euclid(duration as i64)));
    }
}

fn main() {
    loop {
        fuzz!(|data: AverageTickInput| {
            fuzz_average_tick(data);
        });
    }
}
