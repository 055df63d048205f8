use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::{erfc, erfc_inv};

/// Below this, the tie-case probability mass is treated as a point and the
/// corrections fall back to their linear asymptotes.
const TIE_MASS_FLOOR: f64 = 1e-5;

/// Standard normal cumulative distribution function.
pub fn phi_major(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Inverse of [`phi_major`].
pub fn phi_major_inverse(p: f64) -> f64 {
    -SQRT_2 * erfc_inv(2.0 * p)
}

/// Standard normal probability density function.
pub fn phi_minor(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Mean drift of a decisive comparison, `phi(x - t) / Phi(x - t)`.
///
/// For very negative `x - t` the ratio tends to `-(x - t)`, which is
/// returned directly instead of dividing by a vanishing denominator.
pub fn v(x: f64, t: f64) -> f64 {
    let xt = x - t;
    let denom = phi_major(xt);
    if denom < f64::EPSILON {
        return -xt;
    }

    phi_minor(xt) / denom
}

/// Variance shrink of a decisive comparison, in `[0, 1]`.
pub fn w(x: f64, t: f64) -> f64 {
    let xt = x - t;
    let denom = phi_major(xt);
    if denom < f64::EPSILON {
        return if x < 0.0 { 1.0 } else { 0.0 };
    }

    let v = v(x, t);
    v * (v + xt)
}

/// Mean drift of a tie, both sides held within the margin `t`.
pub fn vt(x: f64, t: f64) -> f64 {
    let xx = x.abs();
    let b = phi_major(t - xx) - phi_major(-t - xx);
    if b < TIE_MASS_FLOOR {
        return if x < 0.0 { -x - t } else { -x + t };
    }

    let a = phi_minor(-t - xx) - phi_minor(t - xx);
    (if x < 0.0 { -a } else { a }) / b
}

/// Variance shrink of a tie.
pub fn wt(x: f64, t: f64) -> f64 {
    let xx = x.abs();
    let b = phi_major(t - xx) - phi_major(-t - xx);
    if b < f64::EPSILON {
        return 1.0;
    }

    ((t - xx) * phi_minor(t - xx) + (t + xx) * phi_minor(-t - xx)) / b + vt(x, t) * vt(x, t)
}
