use ndarray::Array3;

use crate::grid::Grid;
use crate::mesh::Mesh;
use crate::state::{Direction, Primitive, NFIELDS};




/**
 * Reconstruction scheme selection: piecewise-constant (PCM), or
 * minmod-limited piecewise-linear (PLM).
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reconstruction {
    Pcm,
    Plm,
}

// ============================================================================
/// `minmod(a, b)`: zero if `a` and `b` disagree in sign, else the
/// smaller-magnitude of the two.
#[inline]
pub fn minmod(a: f64, b: f64) -> f64 {
    if a * b <= 0.0 {
        0.0
    } else if a.abs() < b.abs() {
        a
    } else {
        b
    }
}




/**
 * Per-field slope arrays for PLM, owned by the update component and
 * allocated once at startup rather than as module-level globals.
 */
pub struct Slopes {
    x: Array3<f64>,
    y: Array3<f64>,
}

// ============================================================================
impl Slopes {
    pub fn new(mesh: &Mesh) -> Self {
        let shape = (mesh.ntx(), mesh.nty(), NFIELDS);
        Self { x: Array3::zeros(shape), y: Array3::zeros(shape) }
    }

    /// Recomputes slopes on `[ibeg-1, iend+1) x [jbeg-1, jend+1)`.
    pub fn compute(&mut self, grid: &Grid, mesh: &Mesh) {
        let (ibeg, iend, jbeg, jend) = (mesh.ibeg(), mesh.iend(), mesh.jbeg(), mesh.jend());
        for i in (ibeg - 1)..(iend + 1) {
            for j in (jbeg - 1)..(jend + 1) {
                let q = grid.get_primitive(i, j);
                let qxm = grid.get_primitive(i - 1, j);
                let qxp = grid.get_primitive(i + 1, j);
                let qym = grid.get_primitive(i, j - 1);
                let qyp = grid.get_primitive(i, j + 1);
                for f in 0..NFIELDS {
                    let d_l = q.get(f) - qxm.get(f);
                    let d_r = qxp.get(f) - q.get(f);
                    self.x[[i, j, f]] = minmod(d_l, d_r);

                    let d_d = q.get(f) - qym.get(f);
                    let d_u = qyp.get(f) - q.get(f);
                    self.y[[i, j, f]] = minmod(d_d, d_u);
                }
            }
        }
    }

    #[inline]
    fn slope(&self, i: usize, j: usize, dir: Direction) -> Primitive {
        let arr = match dir {
            Direction::X => &self.x,
            Direction::Y => &self.y,
            Direction::Z => unreachable!("2-D driver never sweeps along Z"),
        };
        let mut out = [0.0; NFIELDS];
        for f in 0..NFIELDS {
            out[f] = arr[[i, j, f]];
        }
        Primitive(out)
    }
}

// ============================================================================
/// Reconstructs the interface state at cell `(i, j)`, offset `sign *
/// 0.5` toward one face, then swapped into the x-aligned frame for
/// `dir`. `sign = -1.0` is the left/inner face, `+1.0` the right/outer
/// face.
pub fn reconstruct(
    grid: &Grid,
    slopes: Option<&Slopes>,
    reconstruction: Reconstruction,
    i: usize,
    j: usize,
    sign: f64,
    dir: Direction,
) -> Primitive {
    let q = grid.get_primitive(i, j);
    let face = match reconstruction {
        Reconstruction::Pcm => q,
        Reconstruction::Plm => {
            let slope = slopes.expect("PLM reconstruction requires precomputed slopes").slope(i, j, dir);
            q + slope * (sign * 0.5)
        }
    };
    face.swap_components(dir)
}




#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minmod_same_sign_picks_smaller_magnitude() {
        assert_eq!(minmod(1.0, 2.0), 1.0);
        assert_eq!(minmod(-1.0, -2.0), -1.0);
        assert_eq!(minmod(2.0, 1.0), 1.0);
    }

    #[test]
    fn minmod_opposite_sign_or_zero_is_zero() {
        assert_eq!(minmod(1.0, -1.0), 0.0);
        assert_eq!(minmod(0.0, 5.0), 0.0);
        assert_eq!(minmod(-3.0, 0.0), 0.0);
    }

    #[test]
    fn pcm_reconstruction_is_cell_value_both_sides() {
        let mesh = Mesh::new(6, 6, 2, 0.0, 1.0, 0.0, 1.0).unwrap();
        let mut grid = Grid::new(&mesh);
        let q = Primitive([1.0, 0.2, -0.1, 0.0, 0.8, 0.0, 0.0, 0.0, 0.0]);
        grid.set_primitive(mesh.ibeg(), mesh.jbeg(), q);
        let left = reconstruct(&grid, None, Reconstruction::Pcm, mesh.ibeg(), mesh.jbeg(), -1.0, Direction::X);
        let right = reconstruct(&grid, None, Reconstruction::Pcm, mesh.ibeg(), mesh.jbeg(), 1.0, Direction::X);
        assert_eq!(left, q);
        assert_eq!(right, q);
    }

    #[test]
    fn plm_on_uniform_state_has_zero_slope_and_equals_pcm() {
        let mesh = Mesh::new(6, 6, 2, 0.0, 1.0, 0.0, 1.0).unwrap();
        let mut grid = Grid::new(&mesh);
        let q = Primitive([1.0, 0.2, -0.1, 0.0, 0.8, 0.0, 0.0, 0.0, 0.0]);
        for i in 0..mesh.ntx() {
            for j in 0..mesh.nty() {
                grid.set_primitive(i, j, q);
            }
        }
        let mut slopes = Slopes::new(&mesh);
        slopes.compute(&grid, &mesh);
        let left = reconstruct(&grid, Some(&slopes), Reconstruction::Plm, mesh.ibeg() + 1, mesh.jbeg() + 1, -1.0, Direction::X);
        assert_eq!(left, q);
    }
}
