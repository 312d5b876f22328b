use super::{Problem, ProblemParams};
use crate::error::Error;
use crate::state::Primitive;

/// 1-D shock tube along x: `rho=1, p=1` for `x <= 0.5`, else
/// `rho=0.125, p=0.1`. Velocity and magnetic field are zero.
pub struct SodX;

impl SodX {
    pub fn new(_params: &ProblemParams) -> Self {
        Self
    }
}

impl Problem for SodX {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    fn primitive_at(&self, x: f64, _y: f64) -> Primitive {
        if x <= 0.5 {
            Primitive([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
        } else {
            Primitive([0.125, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0, 0.0])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_plateaus_match_known_values() {
        let params = ProblemParams { gamma: 1.4, xmin: 0.0, xmax: 1.0, ymin: 0.0, ymax: 1.0 };
        let problem = SodX::new(&params);
        assert_eq!(problem.primitive_at(0.1, 0.5).r(), 1.0);
        assert_eq!(problem.primitive_at(0.9, 0.5).r(), 0.125);
        assert_eq!(problem.primitive_at(0.5, 0.5).r(), 1.0);
    }
}
