//! Domain types: raw quote rows and the immutable price series.

pub mod bar;
pub mod series;

pub use bar::RawRow;
pub use series::PriceSeries;
