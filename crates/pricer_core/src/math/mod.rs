//! Numerical building blocks shared by the pricing layers.
//!
//! - `distributions`: standard normal CDF and PDF

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
