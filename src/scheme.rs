use rayon::prelude::*;

use crate::boundary::{fill_boundaries, Boundary};
use crate::error::Error;
use crate::grid::{try_grid_cons_to_prim, Grid};
use crate::mesh::Mesh;
use crate::reconstruction::{reconstruct, Reconstruction, Slopes};
use crate::riemann::{riemann, RiemannSolver};
use crate::state::{Conserved, Direction, NFIELDS};




/**
 * Time integrator selection.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStepping {
    Euler,
    Rk2,
}




/**
 * Directional-split update: one Euler sub-step and SSP-RK2 time
 * stepping built from two of them. Owns the per-run configuration the
 * update kernel needs on every call plus the PLM slope arrays,
 * allocated once rather than as module-level globals.
 */
pub struct Scheme {
    slopes: Option<Slopes>,
    reconstruction: Reconstruction,
    riemann_solver: RiemannSolver,
    time_stepping: TimeStepping,
    boundary_x: Boundary,
    boundary_y: Boundary,
    gamma: f64,
    mhd: bool,
    smallr: f64,
    epsilon: f64,
}

// ============================================================================
impl Scheme {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mesh: &Mesh,
        reconstruction: Reconstruction,
        riemann_solver: RiemannSolver,
        time_stepping: TimeStepping,
        boundary_x: Boundary,
        boundary_y: Boundary,
        gamma: f64,
        mhd: bool,
        smallr: f64,
        epsilon: f64,
    ) -> Self {
        let slopes = matches!(reconstruction, Reconstruction::Plm).then(|| Slopes::new(mesh));
        Self {
            slopes,
            reconstruction,
            riemann_solver,
            time_stepping,
            boundary_x,
            boundary_y,
            gamma,
            mhd,
            smallr,
            epsilon,
        }
    }

    /// One full Euler sub-step: fills ghosts, reconstructs, solves the
    /// Riemann problem at every interior face in both directions, and
    /// fuses the four face-flux contributions of a cell into a single
    /// accumulation before writing `U` directly, with no double buffer.
    pub fn euler_step(&mut self, grid: &mut Grid, mesh: &Mesh, dt: f64, t: f64, iteration: u64) -> Result<(), Error> {
        fill_boundaries(grid, mesh, self.boundary_x, self.boundary_y);

        if let Some(slopes) = self.slopes.as_mut() {
            slopes.compute(grid, mesh);
        }

        let (ibeg, iend, jbeg, jend) = (mesh.ibeg(), mesh.iend(), mesh.jbeg(), mesh.jend());
        let dx = mesh.dx();
        let dy = mesh.dy();
        let slopes = self.slopes.as_ref();
        let reconstruction = self.reconstruction;
        let riemann_solver = self.riemann_solver;
        let gamma = self.gamma;
        let mhd = self.mhd;
        let epsilon = self.epsilon;
        let grid_ref: &Grid = grid;

        let rows: Vec<Vec<(usize, usize, Conserved)>> = (ibeg..iend)
            .into_par_iter()
            .map(|i| -> Result<Vec<(usize, usize, Conserved)>, Error> {
                let mut row = Vec::with_capacity(jend - jbeg);
                for j in jbeg..jend {
                    let mut delta = Conserved::zero();

                    for dir in [Direction::X, Direction::Y] {
                        let (qcl, qcr, ql, qr, cell_size) = match dir {
                            Direction::X => (
                                reconstruct(grid_ref, slopes, reconstruction, i, j, -1.0, dir),
                                reconstruct(grid_ref, slopes, reconstruction, i, j, 1.0, dir),
                                reconstruct(grid_ref, slopes, reconstruction, i - 1, j, 1.0, dir),
                                reconstruct(grid_ref, slopes, reconstruction, i + 1, j, -1.0, dir),
                                dx,
                            ),
                            Direction::Y => (
                                reconstruct(grid_ref, slopes, reconstruction, i, j, -1.0, dir),
                                reconstruct(grid_ref, slopes, reconstruction, i, j, 1.0, dir),
                                reconstruct(grid_ref, slopes, reconstruction, i, j - 1, 1.0, dir),
                                reconstruct(grid_ref, slopes, reconstruction, i, j + 1, -1.0, dir),
                                dy,
                            ),
                            Direction::Z => unreachable!("2-D driver never sweeps along Z"),
                        };

                        let flux_l = riemann(riemann_solver, ql, qcl, gamma, mhd, epsilon)?.swap_components(dir);
                        let flux_r = riemann(riemann_solver, qcr, qr, gamma, mhd, epsilon)?.swap_components(dir);
                        delta = delta + (flux_l - flux_r) * (dt / cell_size);
                    }

                    row.push((i, j, delta));
                }
                Ok(row)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        for row in rows {
            for (i, j, delta) in row {
                let u0 = grid.get_conserved(i, j);
                grid.set_conserved(i, j, u0 + delta);
            }
        }

        try_grid_cons_to_prim(grid, mesh, gamma, self.smallr, t, iteration)
    }

    /// Advances the grid by `dt` using the configured [`TimeStepping`].
    pub fn step(&mut self, grid: &mut Grid, mesh: &Mesh, dt: f64, t: f64, iteration: u64) -> Result<(), Error> {
        match self.time_stepping {
            TimeStepping::Euler => self.euler_step(grid, mesh, dt, t, iteration),
            TimeStepping::Rk2 => {
                let u0 = grid.u().clone();
                self.euler_step(grid, mesh, dt, t, iteration)?;
                self.euler_step(grid, mesh, dt, t, iteration)?;

                let (ibeg, iend, jbeg, jend) = (mesh.ibeg(), mesh.iend(), mesh.jbeg(), mesh.jend());
                for i in ibeg..iend {
                    for j in jbeg..jend {
                        let mut combined = [0.0; NFIELDS];
                        for f in 0..NFIELDS {
                            combined[f] = 0.5 * (u0[[i, j, f]] + grid.u()[[i, j, f]]);
                        }
                        grid.set_conserved(i, j, Conserved(combined));
                    }
                }

                try_grid_cons_to_prim(grid, mesh, self.gamma, self.smallr, t, iteration)
            }
        }
    }
}




#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{grid_prim_to_cons, min_density, total_mass};
    use crate::state::{Primitive, NFIELDS};
    use approx::assert_relative_eq;

    fn sod_mesh() -> Mesh {
        Mesh::new(32, 4, 2, 0.0, 1.0, 0.0, 1.0).unwrap()
    }

    fn init_sod(grid: &mut Grid, mesh: &Mesh) {
        for i in mesh.ibeg()..mesh.iend() {
            for j in mesh.jbeg()..mesh.jend() {
                let (x, _) = mesh.cell_center(i, j);
                let q = if x <= 0.5 {
                    Primitive([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
                } else {
                    Primitive([0.125, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0, 0.0])
                };
                grid.set_primitive(i, j, q);
            }
        }
    }

    #[test]
    fn uniform_mhd_state_is_a_fixed_point_of_euler_step() {
        let mesh = Mesh::new(8, 8, 2, 0.0, 1.0, 0.0, 1.0).unwrap();
        let mut grid = Grid::new(&mesh);
        let q = Primitive([1.5, 0.0, 0.0, 0.0, 1.0, 0.3, 0.2, 0.1, 0.0]);
        for i in 0..mesh.ntx() {
            for j in 0..mesh.nty() {
                grid.set_primitive(i, j, q);
            }
        }
        grid_prim_to_cons(&mut grid, &mesh, 5.0 / 3.0);

        let mut scheme = Scheme::new(
            &mesh,
            Reconstruction::Pcm,
            RiemannSolver::FiveWaves,
            TimeStepping::Euler,
            Boundary::Periodic,
            Boundary::Periodic,
            5.0 / 3.0,
            true,
            1e-10,
            1e-6,
        );
        scheme.euler_step(&mut grid, &mesh, 1e-3, 0.0, 0).unwrap();

        for i in mesh.ibeg()..mesh.iend() {
            for j in mesh.jbeg()..mesh.jend() {
                let got = grid.get_primitive(i, j);
                for k in 0..NFIELDS {
                    assert_relative_eq!(got.0[k], q.0[k], epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn sod_density_plateaus_bracket_the_known_values() {
        let mesh = sod_mesh();
        let mut grid = Grid::new(&mesh);
        init_sod(&mut grid, &mesh);
        grid_prim_to_cons(&mut grid, &mesh, 1.4);

        let mut scheme = Scheme::new(
            &mesh,
            Reconstruction::Pcm,
            RiemannSolver::Hll,
            TimeStepping::Euler,
            Boundary::Absorbing,
            Boundary::Periodic,
            1.4,
            false,
            1e-10,
            1e-6,
        );

        let mass_before = total_mass(&grid, &mesh);
        let mut t = 0.0;
        let mut iteration = 0u64;
        while t < 0.2 {
            let dt = 1e-3_f64.min(0.2 - t);
            scheme.euler_step(&mut grid, &mesh, dt, t, iteration).unwrap();
            t += dt;
            iteration += 1;
        }

        assert!(min_density(&grid, &mesh) >= 1e-10);
        let mass_after = total_mass(&grid, &mesh);
        assert!((mass_after - mass_before).abs() / mass_before < 1e-2);

        let (mid_i, _) = ((mesh.ibeg() + mesh.iend()) / 2, 0);
        let rho_mid = grid.get_primitive(mid_i, mesh.jbeg()).r();
        assert!(rho_mid > 0.2 && rho_mid < 0.5);
    }
}
