use rayon::prelude::*;

use crate::error::Error;
use crate::grid::Grid;
use crate::mesh::Mesh;
use crate::physics::{fast_magnetosonic_speed, speed_of_sound};
use crate::state::Direction;

// ============================================================================
/// Inverse time-step contribution of a single cell: `(cs+|u|)/dx +
/// (cs+|v|)/dy`, or the max of that with the MHD fast-magnetosonic
/// variant when `mhd` is enabled.
pub fn cell_inv_dt(grid: &Grid, mesh: &Mesh, gamma: f64, mhd: bool, i: usize, j: usize) -> Result<f64, Error> {
    let q = grid.get_primitive(i, j);
    let cs = speed_of_sound(&q, gamma, i, j)?;
    let hydro = (cs + q.u().abs()) / mesh.dx() + (cs + q.v().abs()) / mesh.dy();

    if !mhd {
        return Ok(hydro);
    }

    let cfx = fast_magnetosonic_speed(&q, gamma, Direction::X, i, j)?;
    let cfy = fast_magnetosonic_speed(&q, gamma, Direction::Y, i, j)?;
    let mhd_inv_dt = (cfx + q.u().abs()) / mesh.dx() + (cfy + q.v().abs()) / mesh.dy();
    Ok(hydro.max(mhd_inv_dt))
}

// ============================================================================
/// Grid-wide time step: `CFL / max(inv_dt)`. Does not cap against the
/// next save time — the driver performs that `min` so the estimator
/// itself stays a pure CFL computation.
pub fn compute_dt(grid: &Grid, mesh: &Mesh, gamma: f64, mhd: bool, cfl: f64) -> Result<f64, Error> {
    let max_inv_dt = (mesh.ibeg()..mesh.iend())
        .into_par_iter()
        .map(|i| -> Result<f64, Error> {
            let mut row_max = 0.0_f64;
            for j in mesh.jbeg()..mesh.jend() {
                row_max = row_max.max(cell_inv_dt(grid, mesh, gamma, mhd, i, j)?);
            }
            Ok(row_max)
        })
        .try_reduce(|| 0.0, |a, b| Ok(a.max(b)))?;

    if max_inv_dt <= 0.0 {
        return Err(Error::ConfigInvalid("time step is undefined: grid has zero wave speed everywhere".into()));
    }
    Ok(cfl / max_inv_dt)
}
