//! Ordinary least squares with heteroskedasticity-consistent covariance.

use ndarray::{Array1, Array2};

use crate::MathError;

/// Result of an ordinary least squares fit.
#[derive(Debug, Clone)]
pub struct OlsResult {
    /// Estimated coefficients, one per design matrix column.
    pub coefficients: Array1<f64>,
    /// Residuals `y - X beta`.
    pub residuals: Array1<f64>,
    /// HC0 heteroskedasticity-consistent standard errors.
    pub std_errors: Array1<f64>,
    /// R-squared.
    pub r_squared: f64,
}

/// Fit `y = X beta` by ordinary least squares.
///
/// Coefficients solve the normal equations `(X'X) beta = X'y`. Standard
/// errors use the HC0 sandwich estimator
/// `(X'X)^-1 X' diag(e^2) X (X'X)^-1`, which is consistent under
/// heteroskedastic residuals. Point estimates are plain OLS; no weighting
/// or regularization.
///
/// # Arguments
/// * `y` - Response vector (n,)
/// * `x` - Design matrix (n x p), intercept column included by the caller
///
/// # Errors
/// `InsufficientData` when the system is non-identifiable (fewer rows than
/// columns, or no rows); `Singular` when `X'X` cannot be inverted.
pub fn ols(y: &Array1<f64>, x: &Array2<f64>) -> Result<OlsResult, MathError> {
    let n = x.nrows();
    let p = x.ncols();

    if p == 0 {
        return Err(MathError::EmptyData);
    }
    if y.len() != n {
        return Err(MathError::DimensionMismatch { expected: n, actual: y.len() });
    }
    if n < p {
        return Err(MathError::InsufficientData { rows: n, cols: p });
    }

    let xtx = x.t().dot(x);
    let xtx_inv = invert(&xtx)?;
    let xty = x.t().dot(y);
    let coefficients = xtx_inv.dot(&xty);

    let fitted = x.dot(&coefficients);
    let residuals = y - &fitted;

    // HC0 meat: X' diag(e^2) X
    let mut meat = Array2::zeros((p, p));
    for i in 0..n {
        let e2 = residuals[i] * residuals[i];
        for j in 0..p {
            for k in 0..p {
                meat[[j, k]] += e2 * x[[i, j]] * x[[i, k]];
            }
        }
    }
    let cov = xtx_inv.dot(&meat).dot(&xtx_inv);
    let std_errors = Array1::from_iter((0..p).map(|j| cov[[j, j]].max(0.0).sqrt()));

    let y_mean = y.mean().unwrap_or(0.0);
    let ss_tot: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();
    let ss_res: f64 = residuals.iter().map(|r| r.powi(2)).sum();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };

    Ok(OlsResult { coefficients, residuals, std_errors, r_squared })
}

/// Invert a square matrix by Gauss-Jordan elimination with partial pivoting.
fn invert(a: &Array2<f64>) -> Result<Array2<f64>, MathError> {
    let n = a.nrows();
    if n == 0 {
        return Err(MathError::EmptyData);
    }
    if a.ncols() != n {
        return Err(MathError::DimensionMismatch { expected: n, actual: a.ncols() });
    }

    // Augmented matrix [A | I]
    let mut aug = Array2::zeros((n, 2 * n));
    for i in 0..n {
        for j in 0..n {
            aug[[i, j]] = a[[i, j]];
        }
        aug[[i, n + i]] = 1.0;
    }

    for col in 0..n {
        // Find pivot
        let mut max_row = col;
        let mut max_val = aug[[col, col]].abs();
        for row in (col + 1)..n {
            if aug[[row, col]].abs() > max_val {
                max_val = aug[[row, col]].abs();
                max_row = row;
            }
        }

        if max_val < 1e-12 {
            return Err(MathError::Singular { pivot: max_val });
        }

        // Swap rows
        if max_row != col {
            for j in 0..2 * n {
                let tmp = aug[[col, j]];
                aug[[col, j]] = aug[[max_row, j]];
                aug[[max_row, j]] = tmp;
            }
        }

        // Normalize pivot row
        let pivot = aug[[col, col]];
        for j in 0..2 * n {
            aug[[col, j]] /= pivot;
        }

        // Eliminate column in all other rows
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for j in 0..2 * n {
                aug[[row, j]] -= factor * aug[[col, j]];
            }
        }
    }

    let mut inv = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            inv[[i, j]] = aug[[i, n + j]];
        }
    }

    Ok(inv)
}
