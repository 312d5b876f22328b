use ndarray::Array3;
use rayon::prelude::*;

use crate::error::Error;
use crate::mesh::Mesh;
use crate::state::{cell_cons_to_prim, cell_prim_to_cons, try_cell_cons_to_prim, Conserved, Primitive, NFIELDS};




/**
 * Owns the Q and U arrays for a mesh, each shaped `(Ntx, Nty, 9)`.
 */
pub struct Grid {
    ntx: usize,
    nty: usize,
    q: Array3<f64>,
    u: Array3<f64>,
}

// ============================================================================
impl Grid {
    pub fn new(mesh: &Mesh) -> Self {
        let ntx = mesh.ntx();
        let nty = mesh.nty();
        Self {
            ntx,
            nty,
            q: Array3::zeros((ntx, nty, NFIELDS)),
            u: Array3::zeros((ntx, nty, NFIELDS)),
        }
    }

    pub fn ntx(&self) -> usize {
        self.ntx
    }

    pub fn nty(&self) -> usize {
        self.nty
    }

    #[inline]
    pub fn get_primitive(&self, i: usize, j: usize) -> Primitive {
        let mut out = [0.0; NFIELDS];
        for f in 0..NFIELDS {
            out[f] = self.q[[i, j, f]];
        }
        Primitive(out)
    }

    #[inline]
    pub fn set_primitive(&mut self, i: usize, j: usize, q: Primitive) {
        for f in 0..NFIELDS {
            self.q[[i, j, f]] = q.0[f];
        }
    }

    #[inline]
    pub fn get_conserved(&self, i: usize, j: usize) -> Conserved {
        let mut out = [0.0; NFIELDS];
        for f in 0..NFIELDS {
            out[f] = self.u[[i, j, f]];
        }
        Conserved(out)
    }

    #[inline]
    pub fn set_conserved(&mut self, i: usize, j: usize, u: Conserved) {
        for f in 0..NFIELDS {
            self.u[[i, j, f]] = u.0[f];
        }
    }

    pub fn q(&self) -> &Array3<f64> {
        &self.q
    }

    pub fn u(&self) -> &Array3<f64> {
        &self.u
    }
}




// ============================================================================
/// Applies [`crate::state::cell_prim_to_cons`] over the domain interior
/// `[ibeg, iend) x [jbeg, jend)`.
pub fn grid_prim_to_cons(grid: &mut Grid, mesh: &Mesh, gamma: f64) {
    for i in mesh.ibeg()..mesh.iend() {
        for j in mesh.jbeg()..mesh.jend() {
            let q = grid.get_primitive(i, j);
            grid.set_conserved(i, j, cell_prim_to_cons(q, gamma));
        }
    }
}

/// Applies [`crate::state::cell_cons_to_prim`] over the domain interior,
/// clamping density to `smallr` first. This is the only silent correction
/// the core performs.
pub fn grid_cons_to_prim(grid: &mut Grid, mesh: &Mesh, gamma: f64, smallr: f64) {
    for i in mesh.ibeg()..mesh.iend() {
        for j in mesh.jbeg()..mesh.jend() {
            let mut u = grid.get_conserved(i, j);
            if u.r() < smallr {
                u.set(crate::state::IR, smallr);
                grid.set_conserved(i, j, u);
            }
            let q = cell_cons_to_prim(u, gamma);
            grid.set_primitive(i, j, q);
        }
    }
}

/// As [`grid_cons_to_prim`], but returns the first non-finite or
/// non-positive cell encountered as a diagnostic [`Error`] instead of
/// silently propagating NaNs. Scans rows in parallel, collecting each
/// row's clamped density and primitive state before writing any of them
/// back; the first row (in iteration order, not completion order) to
/// fail wins and no partial write from a failing call is observed.
pub fn try_grid_cons_to_prim(
    grid: &mut Grid,
    mesh: &Mesh,
    gamma: f64,
    smallr: f64,
    t: f64,
    iteration: u64,
) -> Result<(), Error> {
    let (ibeg, iend, jbeg, jend) = (mesh.ibeg(), mesh.iend(), mesh.jbeg(), mesh.jend());
    let grid_ref: &Grid = grid;

    let rows: Vec<Vec<(usize, usize, Conserved, Primitive)>> = (ibeg..iend)
        .into_par_iter()
        .map(|i| -> Result<Vec<(usize, usize, Conserved, Primitive)>, Error> {
            let mut row = Vec::with_capacity(jend - jbeg);
            for j in jbeg..jend {
                let mut u = grid_ref.get_conserved(i, j);
                if u.r() < smallr {
                    u.set(crate::state::IR, smallr);
                }
                let q = try_cell_cons_to_prim(u, gamma, i, j, t, iteration)?;
                row.push((i, j, u, q));
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>, Error>>()?;

    for row in rows {
        for (i, j, u, q) in row {
            grid.set_conserved(i, j, u);
            grid.set_primitive(i, j, q);
        }
    }
    Ok(())
}

/// Total mass over the domain interior, `sum(rho * dx * dy)`.
pub fn total_mass(grid: &Grid, mesh: &Mesh) -> f64 {
    let cell_area = mesh.dx() * mesh.dy();
    (mesh.ibeg()..mesh.iend())
        .into_par_iter()
        .map(|i| {
            (mesh.jbeg()..mesh.jend())
                .map(|j| grid.get_conserved(i, j).r() * cell_area)
                .sum::<f64>()
        })
        .sum()
}

/// Minimum density over the domain interior.
pub fn min_density(grid: &Grid, mesh: &Mesh) -> f64 {
    let mut m = f64::INFINITY;
    for i in mesh.ibeg()..mesh.iend() {
        for j in mesh.jbeg()..mesh.jend() {
            m = m.min(grid.get_conserved(i, j).r());
        }
    }
    m
}
