//! FeatLab Core — indicator engine and feature-matrix builder.
//!
//! This crate contains the heart of the feature pipeline:
//! - Domain types (raw CSV rows, split-adjusted price series)
//! - Lenient CSV ingestion and the data-provider seam
//! - Smoothing primitives (EMA/SMA recurrences over reverse-chronological arrays)
//! - The thirteen-series indicator battery, precomputed once per symbol
//! - Date-to-index resolution by binary search
//! - Feature/label matrix construction over symbols × reference dates
//!
//! Index convention throughout: index 0 is the most recent trading day and
//! the index increases moving into the past. Every derived array is 1:1
//! index-aligned with the price series it was computed from.

pub mod data;
pub mod dateindex;
pub mod domain;
pub mod features;
pub mod indicators;
