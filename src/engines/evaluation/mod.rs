pub mod load_balance;

pub use load_balance::{bin_loads, imbalance, BinLoads};
