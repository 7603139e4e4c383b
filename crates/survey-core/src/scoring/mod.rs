//! Per-instrument scorers. Each scores one respondent row of one block.

pub mod bfi;
pub mod simple;
pub mod stai;

pub use bfi::{bfi_items, bfi_reversed, reverse_bfi, round_mean, score_bfi};
pub use simple::{PhqScore, score_bai, score_oci, score_phq, sum_range};
pub use stai::{STAI_REVERSED_OFFSETS, reverse_stai, score_stai};
