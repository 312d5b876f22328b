//! Output persistence. The core makes no assumptions about format; this
//! module supplies a default no-op sink plus an optional HDF5-backed one.

use crate::grid::Grid;
use crate::mesh::Mesh;

/// Pluggable `(grid, iteration, time) -> ()` side effect, called by the
/// driver between steps. Never invoked from inside the core kernels.
pub trait OutputSink {
    fn save(&mut self, grid: &Grid, mesh: &Mesh, iteration: u64, time: f64) -> anyhow::Result<()>;
}

/// Discards every save. Default sink for library tests and any run that
/// doesn't request `hdf5-output`.
#[derive(Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn save(&mut self, _grid: &Grid, _mesh: &Mesh, _iteration: u64, _time: f64) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "hdf5-output")]
pub use hdf5_sink::Hdf5Sink;

#[cfg(feature = "hdf5-output")]
mod hdf5_sink {
    use super::*;
    use hdf5::types::VarLenAscii;
    use std::path::PathBuf;

    static VERSION_AND_BUILD: &str = git_version::git_version!(prefix = concat!("v", env!("CARGO_PKG_VERSION"), " "));

    /// Writes the domain-interior primitive grid to one group per save,
    /// plus iteration/time/build-version metadata, mirroring the
    /// teacher's per-block HDF5 checkpoint layout collapsed to a single
    /// block.
    pub struct Hdf5Sink {
        output_directory: PathBuf,
    }

    impl Hdf5Sink {
        pub fn new(output_directory: impl Into<PathBuf>) -> Self {
            Self { output_directory: output_directory.into() }
        }
    }

    impl OutputSink for Hdf5Sink {
        fn save(&mut self, grid: &Grid, mesh: &Mesh, iteration: u64, time: f64) -> anyhow::Result<()> {
            let filename = self.output_directory.join(format!("chkpt.{iteration:04}.h5"));
            let file = hdf5::File::create(filename)?;

            let state_group = file.create_group("state")?;
            state_group.new_dataset::<f64>().create("time")?.write_scalar(&time)?;
            state_group.new_dataset::<u64>().create("iteration")?.write_scalar(&iteration)?;

            let (ibeg, iend, jbeg, jend) = (mesh.ibeg(), mesh.iend(), mesh.jbeg(), mesh.jend());
            let nx = iend - ibeg;
            let ny = jend - jbeg;
            let dataset = state_group
                .new_dataset::<f64>()
                .shape((nx, ny, crate::state::NFIELDS))
                .create("primitive")?;
            for i in 0..nx {
                for j in 0..ny {
                    let q = grid.get_primitive(ibeg + i, jbeg + j);
                    dataset.write_slice(&q.0, (i, j, ..))?;
                }
            }

            file.new_dataset::<VarLenAscii>()
                .create("version")?
                .write_scalar(&VarLenAscii::from_ascii(VERSION_AND_BUILD)?)?;

            Ok(())
        }
    }
}
