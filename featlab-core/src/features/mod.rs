//! Feature/label matrix construction.
//!
//! One builder, two interchangeable feature modes (offset-normalized
//! prices, indicator samples) and two label forms (future ratio, binary
//! flag), assembling a growable [`LearningDataset`] across symbols and
//! reference dates.

pub mod builder;
pub mod dataset;
pub mod frame;
pub mod mode;

pub use builder::FeatureMatrixBuilder;
pub use dataset::{DatasetError, LearningDataset};
pub use frame::SymbolFrame;
pub use mode::{FeatureMode, LabelMode};
