use arbitrary::Arbitrary;
use honggfuzz::fuzz;
use volatility_oracle::constants::WAD;
use volatility_oracle::math::fixed_point::{ln_wad, log2_wad};

#[derive(Debug, Clone, Arbitrary)]
struct LnInput {
    x: u128,
}

fn fuzz_ln_wad(input: LnInput) {
    let x = input.x;

    if x == 0 {
        assert!(ln_wad(x).is_err());
        return;
    }

    let ln = ln_wad(x).expect("ln_wad accepts every positive input");
    let log2 = log2_wad(x).expect("log2_wad accepts every positive input");

    // Sign follows x against 1.0
    if x >= WAD {
        assert!(ln >= 0 && log2 >= 0);
    } else {
        assert!(ln <= 0 && log2 <= 0);
    }

    // |ln(x)| <= |log2(x)|
    assert!(ln.abs() <= log2.abs());

    // Monotonic on the next representable input
    if let Some(next) = x.checked_add(1) {
        let ln_next = ln_wad(next).expect("positive input");
        assert!(ln_next >= ln);
    }
}

fn main() {
    loop {
        fuzz!(|data: LnInput| {
            fuzz_ln_wad(data);
        });
    }
}
