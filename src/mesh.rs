use crate::error::Error;




/**
 * Domain extent, zone counts and ghost width for a uniform Cartesian
 * grid. `Ntx = Nx + 2*Nghosts`, `ibeg = Nghosts`, `iend = Nghosts + Nx`.
 */
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mesh {
    pub nx: usize,
    pub ny: usize,
    pub nghosts: usize,
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

// ============================================================================
impl Mesh {
    pub fn new(nx: usize, ny: usize, nghosts: usize, xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, Error> {
        let mesh = Self { nx, ny, nghosts, xmin, xmax, ymin, ymax };
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.nx == 0 || self.ny == 0 {
            return Err(Error::ConfigInvalid("Nx and Ny must be > 0".into()));
        }
        if self.nghosts < 1 {
            return Err(Error::ConfigInvalid("Nghosts must be >= 1".into()));
        }
        if !(self.xmax > self.xmin) {
            return Err(Error::ConfigInvalid("xmax must be > xmin".into()));
        }
        if !(self.ymax > self.ymin) {
            return Err(Error::ConfigInvalid("ymax must be > ymin".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn ntx(&self) -> usize {
        self.nx + 2 * self.nghosts
    }

    #[inline]
    pub fn nty(&self) -> usize {
        self.ny + 2 * self.nghosts
    }

    #[inline]
    pub fn ibeg(&self) -> usize {
        self.nghosts
    }

    #[inline]
    pub fn iend(&self) -> usize {
        self.nghosts + self.nx
    }

    #[inline]
    pub fn jbeg(&self) -> usize {
        self.nghosts
    }

    #[inline]
    pub fn jend(&self) -> usize {
        self.nghosts + self.ny
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        (self.xmax - self.xmin) / self.nx as f64
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        (self.ymax - self.ymin) / self.ny as f64
    }

    /// Physical coordinate of the center of cell `(i, j)`. Cell-centered,
    /// not node-centered.
    #[inline]
    pub fn cell_center(&self, i: usize, j: usize) -> (f64, f64) {
        let x = self.xmin + (i as f64 - self.ibeg() as f64 + 0.5) * self.dx();
        let y = self.ymin + (j as f64 - self.jbeg() as f64 + 0.5) * self.dy();
        (x, y)
    }
}




#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_geometry_is_consistent() {
        let mesh = Mesh::new(10, 20, 3, 0.0, 1.0, -2.0, 2.0).unwrap();
        assert_eq!(mesh.ntx(), 16);
        assert_eq!(mesh.nty(), 26);
        assert_eq!(mesh.ibeg(), 3);
        assert_eq!(mesh.iend(), 13);
        assert_eq!(mesh.jbeg(), 3);
        assert_eq!(mesh.jend(), 23);
    }

    #[test]
    fn cell_center_is_interior_to_domain() {
        let mesh = Mesh::new(4, 4, 2, 0.0, 1.0, 0.0, 1.0).unwrap();
        let (x0, y0) = mesh.cell_center(mesh.ibeg(), mesh.jbeg());
        assert!((x0 - 0.125).abs() < 1e-12);
        assert!((y0 - 0.125).abs() < 1e-12);
        let (x1, _) = mesh.cell_center(mesh.iend() - 1, mesh.jbeg());
        assert!((x1 - 0.875).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_extent() {
        assert!(Mesh::new(4, 4, 2, 1.0, 1.0, 0.0, 1.0).is_err());
        assert!(Mesh::new(0, 4, 2, 0.0, 1.0, 0.0, 1.0).is_err());
    }
}
