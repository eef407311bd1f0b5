use arbitrary::Arbitrary;
use honggfuzz::fuzz;
use volatility_oracle::state::AccumulatorRecord;
use volatility_oracle::welford::{stdev, update, WelfordState};

#[derive(Debug, Clone, Arbitrary)]
struct WelfordInput {
    samples: Vec<i32>,
    window_cap: u16,
}

fn fuzz_welford_update(input: WelfordInput) {
    let cap = input.window_cap as u64;
    let mut state = WelfordState::default();
    let mut record = AccumulatorRecord::default();

    for sample in input.samples {
        let next = match update(state.count, state.mean, state.dsq, sample as i128, cap) {
            Ok(next) => next,
            Err(_) => {
                // 32-bit samples can only fail on an empty window
                assert_eq!(cap, 0);
                return;
            }
        };

        assert!(next.count <= cap);
        assert!(next.count >= state.count);
        assert!(next.mean.abs() <= i32::MAX as i128 + 1);

        // Samples of this magnitude always fit the persisted record
        record.set_count(next.count).expect("count fits 16 bits");
        record.set_mean(next.mean).expect("mean fits 96 bits");
        record.set_dsq(next.dsq).expect("dsq fits 112 bits");

        let spread = stdev(next.count, next.dsq);
        assert!(spread <= u32::MAX as u128);

        state = next;
    }
}

fn main() {
    loop {
        fuzz!(|data: WelfordInput| {
            fuzz_welford_update(data);
        });
    }
}
