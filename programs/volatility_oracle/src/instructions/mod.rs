pub mod commit;
pub mod initialize_oracle;
pub mod manual_volatility;
pub mod read_volatility;

pub use commit::*;
pub use initialize_oracle::*;
pub use manual_volatility::*;
pub use read_volatility::*;
