//! Named initial-condition registry, keyed by the `problem_name`
//! configuration field.

mod orszag_tang;
mod reflecting_bump;
mod sod_x;
mod uniform;

pub use orszag_tang::OrszagTang;
pub use reflecting_bump::ReflectingBump;
pub use sod_x::SodX;
pub use uniform::Uniform;

use crate::error::Error;
use crate::state::Primitive;

/// The subset of [`crate::config::Config`] a problem initializer needs
/// to build itself: the adiabatic index and the domain extent. Kept
/// narrow so models do not depend on the full driver configuration.
#[derive(Clone, Copy, Debug)]
pub struct ProblemParams {
    pub gamma: f64,
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

/// A named initial condition: validates its own parameters, then
/// supplies the primitive state at any physical coordinate.
pub trait Problem: Send + Sync {
    fn validate(&self) -> Result<(), Error>;
    fn primitive_at(&self, x: f64, y: f64) -> Primitive;
}

/// Looks up a problem by the `problem_name` configuration field.
pub fn problem_from_name(name: &str, params: &ProblemParams) -> Result<Box<dyn Problem>, Error> {
    match name {
        "sod_x" => Ok(Box::new(SodX::new(params))),
        "orszag_tang" => Ok(Box::new(OrszagTang::new(params))),
        "uniform" => Ok(Box::new(Uniform::new(params))),
        "reflecting_bump" => Ok(Box::new(ReflectingBump::new(params))),
        _ => Err(Error::UnknownProblem(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ProblemParams {
        ProblemParams { gamma: 1.4, xmin: 0.0, xmax: 1.0, ymin: 0.0, ymax: 1.0 }
    }

    #[test]
    fn every_builtin_name_resolves() {
        for name in ["sod_x", "orszag_tang", "uniform", "reflecting_bump"] {
            let problem = problem_from_name(name, &params()).unwrap();
            assert!(problem.validate().is_ok());
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!(problem_from_name("not_a_real_problem", &params()).is_err());
    }
}
