pub mod cycle;
pub mod error;
pub mod temporal;
pub mod wire;

pub use cycle::{CycleSummary, ReleaseCycle, parse_cycles};
pub use error::{Error, Result};
pub use temporal::{
    DATE_FORMAT, DegradePolicy, TemporalValue, format_date, parse_date, start_of_day,
};
