use anchor_lang::prelude::Error;
use arbitrary::{Arbitrary, Unstructured};
use honggfuzz::fuzz;
use volatility_oracle::constants::{MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use volatility_oracle::math::tick_math::sqrt_ratio_at_tick;
use volatility_oracle::twap::quote_at_tick;

#[derive(Debug, Clone)]
struct TickInput {
    tick: i32,
    base_amount: u64,
}

impl<'a> Arbitrary<'a> for TickInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let tick = match u.int_in_range(0..=100)? {
            0..=80 => u.int_in_range(MIN_TICK..=MAX_TICK)?,
            81..=90 => *u.choose(&[MIN_TICK, MAX_TICK, 0, -1, 1])?,
            _ => u.arbitrary::<i32>()?,
        };

        Ok(TickInput {
            tick,
            base_amount: u.arbitrary()?,
        })
    }
}

fn fuzz_sqrt_ratio_at_tick(input: TickInput) {
    match sqrt_ratio_at_tick(input.tick) {
        Ok(sqrt_ratio) => {
            assert!((MIN_TICK..=MAX_TICK).contains(&input.tick));
            assert!(sqrt_ratio >= MIN_SQRT_RATIO.into());

            if input.tick < MAX_TICK {
                let next = sqrt_ratio_at_tick(input.tick + 1).expect("tick in range");
                assert!(next > sqrt_ratio);
            }

            // Quotes never panic; they either fit in u128 or fail cleanly
            let base_amount = input.base_amount as u128;
            if let Ok(quote) = quote_at_tick(input.tick, base_amount, true) {
                if input.tick >= 0 {
                    assert!(quote >= base_amount);
                } else {
                    assert!(quote <= base_amount);
                }
            }
            let _ = quote_at_tick(input.tick, base_amount, false);
        }
        Err(Error::AnchorError(details)) => {
            assert_eq!(details.error_name, "TickOutOfRange");
            assert!(input.tick < MIN_TICK || input.tick > MAX_TICK);
        }
        Err(other) => panic!("unexpected error {other:?}"),
    }
}

fn main() {
    loop {
        fuzz!(|data: TickInput| {
            fuzz_sqrt_ratio_at_tick(data);
        });
    }
}
