use super::{Problem, ProblemParams};
use crate::error::Error;
use crate::state::Primitive;

/// A Gaussian density bump centered in the domain, zero velocity.
/// Meant to run with reflecting walls on both axes, where the
/// domain-integrated velocity must stay zero by symmetry.
pub struct ReflectingBump {
    xc: f64,
    yc: f64,
    sigma: f64,
    amplitude: f64,
    p0: f64,
}

impl ReflectingBump {
    pub fn new(params: &ProblemParams) -> Self {
        let width = (params.xmax - params.xmin).min(params.ymax - params.ymin);
        Self {
            xc: 0.5 * (params.xmin + params.xmax),
            yc: 0.5 * (params.ymin + params.ymax),
            sigma: 0.1 * width,
            amplitude: 1.0,
            p0: 1.0,
        }
    }
}

impl Problem for ReflectingBump {
    fn validate(&self) -> Result<(), Error> {
        if self.sigma <= 0.0 {
            return Err(Error::ConfigInvalid("reflecting_bump requires a positive domain extent".into()));
        }
        Ok(())
    }

    fn primitive_at(&self, x: f64, y: f64) -> Primitive {
        let r2 = (x - self.xc) * (x - self.xc) + (y - self.yc) * (y - self.yc);
        let rho = 1.0 + self.amplitude * (-0.5 * r2 / (self.sigma * self.sigma)).exp();
        Primitive([rho, 0.0, 0.0, 0.0, self.p0, 0.0, 0.0, 0.0, 0.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_peaks_at_domain_center_and_is_symmetric() {
        let params = ProblemParams { gamma: 1.4, xmin: 0.0, xmax: 1.0, ymin: 0.0, ymax: 1.0 };
        let problem = ReflectingBump::new(&params);
        let center = problem.primitive_at(0.5, 0.5).r();
        let off_center = problem.primitive_at(0.1, 0.1).r();
        assert!(center > off_center);

        let a = problem.primitive_at(0.3, 0.5).r();
        let b = problem.primitive_at(0.7, 0.5).r();
        assert!((a - b).abs() < 1e-12);
    }
}
