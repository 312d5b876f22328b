//! User-facing simulation configuration.

use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::error::Error;
use crate::reconstruction::Reconstruction;
use crate::riemann::RiemannSolver;
use crate::scheme::TimeStepping;

/**
 * Everything a run needs: grid sizing, domain extent, physics switches,
 * numerical method choices, and driver cadence. Read-only once loaded.
 */
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub nx: usize,
    pub ny: usize,
    pub nghosts: usize,

    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,

    pub gamma: f64,
    pub cfl: f64,
    pub tend: f64,

    pub problem_name: String,
    pub mhd: bool,

    pub boundary_x: Boundary,
    pub boundary_y: Boundary,
    pub reconstruction: Reconstruction,
    pub time_stepping: TimeStepping,
    pub riemann_solver: RiemannSolver,

    #[serde(default = "Config::default_smallr")]
    pub smallr: f64,
    #[serde(default = "Config::default_epsilon")]
    pub epsilon: f64,

    pub save_freq: f64,
    pub log_frequency: u64,
}

impl Config {
    fn default_smallr() -> f64 {
        1e-10
    }

    fn default_epsilon() -> f64 {
        1e-6
    }

    /// Validates cross-field constraints required at startup; per-field
    /// enum legality (boundary/reconstruction/solver tags) is already
    /// enforced by serde at deserialization time.
    pub fn validate(&self) -> Result<(), Error> {
        if self.nx == 0 || self.ny == 0 {
            return Err(Error::ConfigInvalid("Nx and Ny must be > 0".into()));
        }
        let min_ghosts = if matches!(self.reconstruction, Reconstruction::Plm) { 2 } else { 1 };
        if self.nghosts < min_ghosts {
            return Err(Error::ConfigInvalid(format!("Nghosts must be >= {min_ghosts} for the chosen reconstruction")));
        }
        if !(self.xmax > self.xmin) {
            return Err(Error::ConfigInvalid("xmax must be > xmin".into()));
        }
        if !(self.ymax > self.ymin) {
            return Err(Error::ConfigInvalid("ymax must be > ymin".into()));
        }
        if !(self.gamma > 1.0) {
            return Err(Error::ConfigInvalid("gamma must be > 1.0".into()));
        }
        if !(self.cfl > 0.0 && self.cfl <= 1.0) {
            return Err(Error::ConfigInvalid("CFL must be in (0, 1]".into()));
        }
        if !(self.tend > 0.0) {
            return Err(Error::ConfigInvalid("tend must be > 0.0".into()));
        }
        if !(self.smallr > 0.0) {
            return Err(Error::ConfigInvalid("smallr must be > 0.0".into()));
        }
        if !(self.epsilon > 0.0) {
            return Err(Error::ConfigInvalid("epsilon must be > 0.0".into()));
        }
        if matches!(self.riemann_solver, RiemannSolver::Hll) && self.mhd {
            return Err(Error::ConfigInvalid("HLL solver cannot be used with MHD enabled".into()));
        }
        Ok(())
    }

    /// Patches this config with YAML files or `key=value` CLI overrides,
    /// in order, using the generic [`crate::yaml_patch::Patch`] trait.
    pub fn patch_from(&mut self, overrides: &[String]) -> Result<(), Error> {
        use crate::yaml_patch::Patch;
        for entry in overrides {
            if entry.ends_with(".yaml") {
                self.patch_from_reader(std::fs::File::open(entry)?)?;
            } else if let Some((key, value)) = entry.split_once('=') {
                let yaml = format!("{key}: {value}");
                self.patch_from_str(&yaml)?;
            } else {
                return Err(Error::ConfigInvalid(format!("override '{entry}' is neither a .yaml file nor key=value")));
            }
        }
        Ok(())
    }
}
