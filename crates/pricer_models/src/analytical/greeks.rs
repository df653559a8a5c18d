//! Greeks result bundle.

/// Price and closed-form Greeks of a European call.
///
/// # Fields
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `vega`: ∂V/∂σ
/// - `theta`: -∂V/∂T (time decay, usually negative)
/// - `rho`: ∂V/∂r
///
/// All fields are exactly zero for degenerate inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Option price
    pub price: f64,
    /// Delta: ∂V/∂S
    pub delta: f64,
    /// Gamma: ∂²V/∂S²
    pub gamma: f64,
    /// Vega: ∂V/∂σ
    pub vega: f64,
    /// Theta: -∂V/∂T
    pub theta: f64,
    /// Rho: ∂V/∂r
    pub rho: f64,
}

impl Greeks {
    /// Returns true if every field is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
