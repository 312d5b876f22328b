use crate::grid::Grid;
use crate::mesh::Mesh;
use crate::state::{IBX, IBY, IU, IV};




/**
 * Per-axis boundary condition. The fill loops below dispatch on this
 * enum once per ghost strip rather than branching per cell.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    Absorbing,
    Reflecting,
    Periodic,
}

// ============================================================================
fn fill_x(grid: &mut Grid, mesh: &Mesh, bc: Boundary, i: usize, j: usize, iref: usize) {
    let q = match bc {
        Boundary::Absorbing => grid.get_primitive(iref, j),
        Boundary::Reflecting => {
            let ipiv = if i < mesh.ibeg() { mesh.ibeg() } else { mesh.iend() };
            let isym = 2 * ipiv - i - 1;
            let mut q = grid.get_primitive(isym, j);
            q.set(IU, -q.get(IU));
            q.set(IBX, -q.get(IBX));
            q
        }
        Boundary::Periodic => {
            let iwrap = if i < mesh.ibeg() { i + mesh.nx } else { i - mesh.nx };
            grid.get_primitive(iwrap, j)
        }
    };
    grid.set_primitive(i, j, q);
}

// ============================================================================
fn fill_y(grid: &mut Grid, mesh: &Mesh, bc: Boundary, i: usize, j: usize, jref: usize) {
    let q = match bc {
        Boundary::Absorbing => grid.get_primitive(i, jref),
        Boundary::Reflecting => {
            let jpiv = if j < mesh.jbeg() { mesh.jbeg() } else { mesh.jend() };
            let jsym = 2 * jpiv - j - 1;
            let mut q = grid.get_primitive(i, jsym);
            q.set(IV, -q.get(IV));
            q.set(IBY, -q.get(IBY));
            q
        }
        Boundary::Periodic => {
            let jwrap = if j < mesh.jbeg() { j + mesh.ny } else { j - mesh.ny };
            grid.get_primitive(i, jwrap)
        }
    };
    grid.set_primitive(i, j, q);
}

// ============================================================================
/// Fills all four ghost strips of Q. X strips first, then Y strips —
/// the Y pass spans the full x extent, so it fills the corner ghosts
/// from whatever the X pass produced. Reversing the order changes the
/// corner values.
pub fn fill_boundaries(grid: &mut Grid, mesh: &Mesh, boundary_x: Boundary, boundary_y: Boundary) {
    let (ibeg, iend, jbeg, jend) = (mesh.ibeg(), mesh.iend(), mesh.jbeg(), mesh.jend());

    for j in jbeg..jend {
        for i in 0..ibeg {
            fill_x(grid, mesh, boundary_x, i, j, ibeg);
        }
        for di in 0..mesh.nghosts {
            let i = iend + di;
            fill_x(grid, mesh, boundary_x, i, j, iend - 1);
        }
    }

    for i in 0..mesh.ntx() {
        for j in 0..jbeg {
            fill_y(grid, mesh, boundary_y, i, j, jbeg);
        }
        for dj in 0..mesh.nghosts {
            let j = jend + dj;
            fill_y(grid, mesh, boundary_y, i, j, jend - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Primitive;

    fn uniform_grid(mesh: &Mesh, q: Primitive) -> Grid {
        let mut grid = Grid::new(mesh);
        for i in mesh.ibeg()..mesh.iend() {
            for j in mesh.jbeg()..mesh.jend() {
                grid.set_primitive(i, j, q);
            }
        }
        grid
    }

    #[test]
    fn periodic_uniform_state_is_unchanged() {
        let mesh = Mesh::new(8, 6, 2, 0.0, 1.0, 0.0, 1.0).unwrap();
        let q = Primitive([1.1, 0.2, -0.3, 0.0, 0.9, 0.0, 0.0, 0.0, 0.0]);
        let mut grid = uniform_grid(&mesh, q);
        fill_boundaries(&mut grid, &mesh, Boundary::Periodic, Boundary::Periodic);
        for i in 0..mesh.ntx() {
            for j in 0..mesh.nty() {
                assert_eq!(grid.get_primitive(i, j), q);
            }
        }
    }

    #[test]
    fn periodic_left_ghost_equals_rightmost_interior_columns() {
        let mesh = Mesh::new(8, 6, 2, 0.0, 1.0, 0.0, 1.0).unwrap();
        let mut grid = Grid::new(&mesh);
        for i in mesh.ibeg()..mesh.iend() {
            for j in mesh.jbeg()..mesh.jend() {
                let val = (i * 131 + j) as f64;
                grid.set_primitive(i, j, Primitive([val, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]));
            }
        }
        fill_boundaries(&mut grid, &mesh, Boundary::Periodic, Boundary::Periodic);

        for gi in 0..mesh.nghosts {
            for j in mesh.jbeg()..mesh.jend() {
                let left = grid.get_primitive(gi, j);
                let src = grid.get_primitive(mesh.iend() - mesh.nghosts + gi, j);
                assert_eq!(left, src);
            }
        }
        for gj in 0..mesh.nghosts {
            for i in mesh.ibeg()..mesh.iend() {
                let bottom = grid.get_primitive(i, gj);
                let src = grid.get_primitive(i, mesh.jend() - mesh.nghosts + gj);
                assert_eq!(bottom, src);
            }
        }
    }

    #[test]
    fn reflecting_x_negates_u_and_bx_only() {
        let mesh = Mesh::new(8, 6, 2, 0.0, 1.0, 0.0, 1.0).unwrap();
        let mut grid = Grid::new(&mesh);
        for i in mesh.ibeg()..mesh.iend() {
            for j in mesh.jbeg()..mesh.jend() {
                grid.set_primitive(i, j, Primitive([1.0, 0.3, 0.4, 0.0, 1.0, 0.1, 0.2, 0.0, 0.0]));
            }
        }
        fill_boundaries(&mut grid, &mesh, Boundary::Reflecting, Boundary::Absorbing);

        let j = mesh.jbeg();
        let ghost = grid.get_primitive(mesh.ibeg() - 1, j);
        let interior = grid.get_primitive(mesh.ibeg(), j);
        assert_eq!(ghost.u(), -interior.u());
        assert_eq!(ghost.bx(), -interior.bx());
        assert_eq!(ghost.v(), interior.v());
        assert_eq!(ghost.r(), interior.r());
        assert_eq!(ghost.by(), interior.by());
    }
}
