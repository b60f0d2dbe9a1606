//! Degree-six polynomial correlations with linear high-temperature extrapolation.
//!
//! The Kays & Crawford property fits are polynomials in absolute temperature
//! on the Rankine scale, valid from 180 to 4500 °R. Above the fitted range a
//! correlation is continued linearly through its values at two anchor
//! temperatures near the upper bound, so extrapolated values follow the local
//! slope of the fit rather than the polynomial's unconstrained tail.

/// Lower anchor temperature for linear extrapolation, °R.
pub const EXTRAPOLATION_ANCHOR: f64 = 4400.0;

/// Upper bound of the fitted temperature range, °R.
pub const FIT_CEILING: f64 = 4500.0;

/// A degree-six polynomial curve fit in Rankine temperature.
///
/// Coefficients are ordered from degree zero to degree six and carry the
/// units of whichever property the fit was generated for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFit {
    coefficients: [f64; 7],
}

impl CurveFit {
    /// Creates a fit from coefficients ordered from degree zero to degree six.
    #[must_use]
    pub const fn new(coefficients: [f64; 7]) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients ordered from degree zero to degree six.
    #[must_use]
    pub const fn coefficients(&self) -> [f64; 7] {
        self.coefficients
    }

    /// Returns the termwise antiderivative of this fit.
    ///
    /// The constant of integration is zero, so values of the integrated fit
    /// are relative rather than absolute. The degree-six coefficient has no
    /// degree-seven slot and is dropped, keeping the result at the same
    /// order as the source fit.
    #[must_use]
    pub const fn integral(self) -> Self {
        let a = self.coefficients;
        Self::new([
            0.0,
            a[0],
            a[1] / 2.0,
            a[2] / 3.0,
            a[3] / 4.0,
            a[4] / 5.0,
            a[5] / 6.0,
        ])
    }

    /// Evaluates the fit at a Rankine temperature.
    ///
    /// Within the fitted range this is the polynomial itself. Above
    /// [`FIT_CEILING`] the fit is continued linearly through its values at
    /// [`EXTRAPOLATION_ANCHOR`] and [`FIT_CEILING`].
    #[must_use]
    pub fn evaluate(&self, rankine: f64) -> f64 {
        if rankine <= FIT_CEILING {
            self.polynomial(rankine)
        } else {
            let y1 = self.polynomial(EXTRAPOLATION_ANCHOR);
            let y2 = self.polynomial(FIT_CEILING);
            (y2 - y1) * (rankine - EXTRAPOLATION_ANCHOR) / (FIT_CEILING - EXTRAPOLATION_ANCHOR)
                + y1
        }
    }

    fn polynomial(&self, rankine: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |sum, a| sum * rankine + a)
    }
}
