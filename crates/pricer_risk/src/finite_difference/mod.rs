//! Bump-and-revalue Greeks by central differences.
//!
//! Every Greek here is one call to [`central_difference`] with a different
//! [`Parameter`]. Gamma nests the spot difference of delta.
//!
//! The plain `*_fd` functions never fail. Any fault (a non-finite input, a
//! non-finite intermediate price or an unusable epsilon) is logged at
//! `debug` and reported as `f64::NAN`.

mod config;

pub use config::{FdConfig, FdConfigBuilder, FdConfigError, Greek};

use pricer_core::types::{OptionParams, Parameter, PricingError};
use pricer_models::analytical::EuropeanOption;

/// Central difference `(f(p + ε) - f(p - ε)) / (2ε)` along one parameter.
///
/// # Errors
///
/// - [`PricingError::InvalidInput`] if `epsilon` is not finite and positive
/// - Any error returned by `f`
/// - [`PricingError::NumericalInstability`] if the difference is not finite
///
/// # Examples
///
/// ```
/// use pricer_core::types::{OptionParams, Parameter};
/// use pricer_risk::finite_difference::{central_difference, model_price};
///
/// let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let delta = central_difference(model_price, &params, Parameter::Spot, 0.01).unwrap();
/// assert!((delta - 0.6368).abs() < 1e-3);
/// ```
pub fn central_difference<F>(
    f: F,
    params: &OptionParams,
    parameter: Parameter,
    epsilon: f64,
) -> Result<f64, PricingError>
where
    F: Fn(&OptionParams) -> Result<f64, PricingError>,
{
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "epsilon must be finite and positive, got {}",
            epsilon
        )));
    }

    let up = f(&params.with_shift(parameter, epsilon))?;
    let down = f(&params.with_shift(parameter, -epsilon))?;
    let slope = (up - down) / (2.0 * epsilon);

    if !slope.is_finite() {
        return Err(PricingError::NumericalInstability(format!(
            "central difference in {} is {}",
            parameter, slope
        )));
    }
    Ok(slope)
}

/// Prices a call on a fresh engine.
///
/// # Errors
///
/// [`PricingError::NumericalInstability`] if the price is not finite.
pub fn model_price(params: &OptionParams) -> Result<f64, PricingError> {
    let price = EuropeanOption::new(*params).calculate().price();
    if price.is_finite() {
        Ok(price)
    } else {
        Err(PricingError::NumericalInstability(format!(
            "price is {} for {:?}",
            price, params
        )))
    }
}

fn delta_at(params: &OptionParams, epsilon: f64) -> Result<f64, PricingError> {
    central_difference(model_price, params, Parameter::Spot, epsilon)
}

fn gamma_at(params: &OptionParams, epsilon: f64) -> Result<f64, PricingError> {
    central_difference(|p| delta_at(p, epsilon), params, Parameter::Spot, epsilon)
}

fn theta_at(params: &OptionParams, epsilon: f64) -> Result<f64, PricingError> {
    // Decay convention: -∂V/∂T
    central_difference(model_price, params, Parameter::Expiry, epsilon).map(|d| -d)
}

/// Unwraps a result into the NaN sentinel.
fn or_nan(greek: &str, result: Result<f64, PricingError>) -> f64 {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(greek, error = %err, "finite difference failed");
            f64::NAN
        }
    }
}

/// Evaluates a Greek from raw inputs, mapping every fault to NaN.
fn evaluate(
    greek: &str,
    inputs: [f64; 5],
    epsilon: f64,
    at: impl Fn(&OptionParams, f64) -> Result<f64, PricingError>,
) -> f64 {
    let [spot, strike, expiry, rate, volatility] = inputs;
    let result = OptionParams::new(spot, strike, expiry, rate, volatility)
        .and_then(|params| at(&params, epsilon));
    or_nan(greek, result)
}

/// Delta by central difference in spot.
pub fn delta_fd(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64, epsilon: f64) -> f64 {
    evaluate("delta", [spot, strike, expiry, rate, volatility], epsilon, delta_at)
}

/// Gamma as the spot central difference of [`delta_fd`].
pub fn gamma_fd(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64, epsilon: f64) -> f64 {
    evaluate("gamma", [spot, strike, expiry, rate, volatility], epsilon, gamma_at)
}

/// Vega by central difference in volatility.
pub fn vega_fd(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64, epsilon: f64) -> f64 {
    evaluate("vega", [spot, strike, expiry, rate, volatility], epsilon, |p, e| {
        central_difference(model_price, p, Parameter::Volatility, e)
    })
}

/// Theta as `(price(T - ε) - price(T + ε)) / (2ε)`.
///
/// Same sign convention as the analytic theta: negative for a typical call.
pub fn theta_fd(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64, epsilon: f64) -> f64 {
    evaluate("theta", [spot, strike, expiry, rate, volatility], epsilon, theta_at)
}

/// Rho by central difference in the rate.
pub fn rho_fd(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64, epsilon: f64) -> f64 {
    evaluate("rho", [spot, strike, expiry, rate, volatility], epsilon, |p, e| {
        central_difference(model_price, p, Parameter::Rate, e)
    })
}

/// Dual delta by central difference in the strike.
pub fn dual_delta_fd(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    epsilon: f64,
) -> f64 {
    evaluate("dual_delta", [spot, strike, expiry, rate, volatility], epsilon, |p, e| {
        central_difference(model_price, p, Parameter::Strike, e)
    })
}

/// The finite-difference Greeks at one bump size.
///
/// Fields are `NaN` where the corresponding difference failed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FdGreeks {
    /// Bump size used for every difference
    pub epsilon: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// -∂V/∂T
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
    /// ∂V/∂K
    pub dual_delta: f64,
}

impl FdGreeks {
    /// Returns the value for one Greek.
    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Vega => self.vega,
            Greek::Theta => self.theta,
            Greek::Rho => self.rho,
            Greek::DualDelta => self.dual_delta,
        }
    }
}

/// Computes every finite-difference Greek.
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionParams;
/// use pricer_risk::finite_difference::fd_greeks;
///
/// let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let fd = fd_greeks(&params, 0.01);
/// assert!((fd.theta + 6.414).abs() < 2e-3);
/// ```
pub fn fd_greeks(params: &OptionParams, epsilon: f64) -> FdGreeks {
    let span = tracing::debug_span!("fd_greeks", epsilon);
    let _guard = span.enter();

    FdGreeks {
        epsilon,
        delta: or_nan("delta", delta_at(params, epsilon)),
        gamma: or_nan("gamma", gamma_at(params, epsilon)),
        vega: or_nan(
            "vega",
            central_difference(model_price, params, Parameter::Volatility, epsilon),
        ),
        theta: or_nan("theta", theta_at(params, epsilon)),
        rho: or_nan(
            "rho",
            central_difference(model_price, params, Parameter::Rate, epsilon),
        ),
        dual_delta: or_nan(
            "dual_delta",
            central_difference(model_price, params, Parameter::Strike, epsilon),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    type FdFn = fn(f64, f64, f64, f64, f64, f64) -> f64;

    const ALL_FD: [(&str, FdFn); 6] = [
        ("delta", delta_fd),
        ("gamma", gamma_fd),
        ("vega", vega_fd),
        ("theta", theta_fd),
        ("rho", rho_fd),
        ("dual_delta", dual_delta_fd),
    ];

    const SCENARIOS: [(f64, f64, f64, f64, f64); 4] = [
        (100.0, 100.0, 1.0, 0.05, 0.2),
        (110.0, 100.0, 0.5, 0.03, 0.3),
        (90.0, 100.0, 2.0, 0.01, 0.25),
        (100.0, 120.0, 0.25, 0.05, 0.4),
    ];

    fn analytic(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> pricer_models::analytical::Greeks {
        EuropeanOption::from_values(s, k, t, r, sigma)
            .unwrap()
            .calculate()
            .greeks()
    }

    #[test]
    fn test_reference_scenario_at_default_bump() {
        let g = analytic(100.0, 100.0, 1.0, 0.05, 0.2);
        let eps = 0.01;

        assert_abs_diff_eq!(delta_fd(100.0, 100.0, 1.0, 0.05, 0.2, eps), g.delta, epsilon = 1e-3);
        assert_abs_diff_eq!(gamma_fd(100.0, 100.0, 1.0, 0.05, 0.2, eps), g.gamma, epsilon = 1e-1);
        assert_abs_diff_eq!(vega_fd(100.0, 100.0, 1.0, 0.05, 0.2, eps), g.vega, epsilon = 1e-2);
        assert_abs_diff_eq!(theta_fd(100.0, 100.0, 1.0, 0.05, 0.2, eps), g.theta, epsilon = 2e-3);
        assert_abs_diff_eq!(rho_fd(100.0, 100.0, 1.0, 0.05, 0.2, eps), g.rho, epsilon = 1e-2);
    }

    #[test]
    fn test_scenarios_at_default_bump() {
        for (s, k, t, r, sigma) in SCENARIOS {
            let g = analytic(s, k, t, r, sigma);
            let fd = fd_greeks(&OptionParams::new(s, k, t, r, sigma).unwrap(), 0.01);

            assert_abs_diff_eq!(fd.delta, g.delta, epsilon = 1e-3);
            assert_abs_diff_eq!(fd.gamma, g.gamma, epsilon = 1e-3);
            assert_abs_diff_eq!(fd.vega, g.vega, epsilon = 1e-2);
            assert_abs_diff_eq!(fd.theta, g.theta, epsilon = 2e-3);
            assert_abs_diff_eq!(fd.rho, g.rho, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_small_bump_tightens_all_greeks() {
        for (s, k, t, r, sigma) in SCENARIOS {
            let g = analytic(s, k, t, r, sigma);
            let fd = fd_greeks(&OptionParams::new(s, k, t, r, sigma).unwrap(), 1e-3);

            assert_abs_diff_eq!(fd.delta, g.delta, epsilon = 1e-3);
            assert_abs_diff_eq!(fd.gamma, g.gamma, epsilon = 1e-3);
            assert_abs_diff_eq!(fd.vega, g.vega, epsilon = 1e-3);
            assert_abs_diff_eq!(fd.theta, g.theta, epsilon = 1e-3);
            assert_abs_diff_eq!(fd.rho, g.rho, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_theta_uses_decay_sign() {
        let theta = theta_fd(100.0, 100.0, 1.0, 0.05, 0.2, 0.01);
        assert!(theta < 0.0);
        assert_relative_eq!(theta, -6.414, max_relative = 1e-3);
    }

    #[test]
    fn test_nan_spot_yields_nan_everywhere() {
        for (name, f) in ALL_FD {
            assert!(f(f64::NAN, 100.0, 1.0, 0.05, 0.2, 0.01).is_nan(), "{name}");
        }
    }

    #[test]
    fn test_infinite_inputs_yield_nan() {
        for (name, f) in ALL_FD {
            assert!(f(100.0, f64::INFINITY, 1.0, 0.05, 0.2, 0.01).is_nan(), "{name}");
            assert!(f(100.0, 100.0, 1.0, f64::NEG_INFINITY, 0.2, 0.01).is_nan(), "{name}");
        }
    }

    #[test]
    fn test_invalid_epsilon_yields_nan() {
        for eps in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            for (name, f) in ALL_FD {
                assert!(f(100.0, 100.0, 1.0, 0.05, 0.2, eps).is_nan(), "{name} at {eps}");
            }
        }
    }

    #[test]
    fn test_central_difference_rejects_bad_epsilon() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let err = central_difference(model_price, &params, Parameter::Spot, 0.0).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn test_central_difference_propagates_closure_error() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let failing = |_: &OptionParams| -> Result<f64, PricingError> {
            Err(PricingError::NumericalInstability("boom".into()))
        };
        let err = central_difference(failing, &params, Parameter::Rate, 0.01).unwrap_err();
        assert_eq!(err, PricingError::NumericalInstability("boom".into()));
    }

    #[test]
    fn test_central_difference_flags_non_finite_slope() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let blow_up = |p: &OptionParams| -> Result<f64, PricingError> {
            Ok(if p.spot() > 100.0 { f64::INFINITY } else { 0.0 })
        };
        let err = central_difference(blow_up, &params, Parameter::Spot, 0.01).unwrap_err();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
    }

    #[test]
    fn test_central_difference_is_exact_for_linear_functions() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let linear = |p: &OptionParams| -> Result<f64, PricingError> { Ok(3.0 * p.strike() - 2.0) };
        let slope = central_difference(linear, &params, Parameter::Strike, 0.5).unwrap();
        assert_relative_eq!(slope, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_strike_difference_matches_dual_delta() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let fd = central_difference(model_price, &params, Parameter::Strike, 1e-3).unwrap();
        let adj = EuropeanOption::new(params).calculate().adjoint();
        assert_relative_eq!(fd, adj.dual_delta(), epsilon = 1e-5, max_relative = 1e-4);
    }

    #[test]
    fn test_dual_delta_fd_across_scenarios() {
        for (s, k, t, r, sigma) in SCENARIOS {
            let priced = EuropeanOption::from_values(s, k, t, r, sigma).unwrap().calculate();
            let fd = dual_delta_fd(s, k, t, r, sigma, 0.01);
            assert!(fd < 0.0);
            assert_abs_diff_eq!(fd, priced.dual_delta(), epsilon = 1e-4);
            assert_eq!(
                fd_greeks(&OptionParams::new(s, k, t, r, sigma).unwrap(), 0.01).dual_delta,
                fd
            );
        }
    }

    #[test]
    fn test_degenerate_expiry_is_finite() {
        // Spot and rate bumps keep T = 0, which prices to zero
        let fd = fd_greeks(&OptionParams::new(100.0, 100.0, 0.0, 0.05, 0.2).unwrap(), 0.01);
        assert!(fd.delta.is_finite());
        assert!(fd.rho.is_finite());
        assert_eq!(fd.epsilon, 0.01);
    }

    #[test]
    fn test_fd_greeks_get_matches_fields() {
        let fd = fd_greeks(&OptionParams::new(110.0, 100.0, 0.5, 0.03, 0.3).unwrap(), 0.01);
        assert_eq!(fd.get(Greek::Delta), fd.delta);
        assert_eq!(fd.get(Greek::Gamma), fd.gamma);
        assert_eq!(fd.get(Greek::Vega), fd.vega);
        assert_eq!(fd.get(Greek::Theta), fd.theta);
        assert_eq!(fd.get(Greek::Rho), fd.rho);
        assert_eq!(fd.get(Greek::DualDelta), fd.dual_delta);
    }

    proptest! {
        #[test]
        fn prop_delta_fd_tracks_analytic(
            s in 50.0f64..150.0,
            k in 50.0f64..150.0,
            t in 0.1f64..3.0,
            r in 0.0f64..0.1,
            sigma in 0.1f64..0.6,
        ) {
            let fd = delta_fd(s, k, t, r, sigma, 0.01);
            let g = analytic(s, k, t, r, sigma);
            prop_assert!((fd - g.delta).abs() < 1e-3);
        }

        #[test]
        fn prop_fd_never_panics(
            s in -10.0f64..200.0,
            t in -1.0f64..3.0,
            eps in -0.1f64..0.1,
        ) {
            for (_, f) in ALL_FD {
                let value = f(s, 100.0, t, 0.05, 0.2, eps);
                prop_assert!(value.is_finite() || value.is_nan());
            }
        }
    }
}
