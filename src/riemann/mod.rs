mod fivewave;
mod hll;

use crate::error::Error;
use crate::state::{Conserved, Primitive};




/**
 * Approximate Riemann solver selection. Inputs are interface states
 * already swapped to x-alignment; output is the numerical flux in
 * conservative variables.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiemannSolver {
    Hll,
    FiveWaves,
}

// ============================================================================
/// Dispatches to the configured solver.
///
/// # Errors
/// Returns [`Error::ConfigInvalid`] if `Hll` is selected while `mhd` is
/// enabled: it is a hydro-only solver and rejects MHD runs.
pub fn riemann(
    solver: RiemannSolver,
    ql: Primitive,
    qr: Primitive,
    gamma: f64,
    mhd: bool,
    epsilon: f64,
) -> Result<Conserved, Error> {
    match solver {
        RiemannSolver::Hll => {
            if mhd {
                return Err(Error::ConfigInvalid("HLL solver cannot be used with MHD enabled".into()));
            }
            Ok(hll::flux(ql, qr, gamma))
        }
        RiemannSolver::FiveWaves => Ok(fivewave::flux(ql, qr, gamma, epsilon)),
    }
}

pub use hll::compute_flux as hll_compute_flux;
