use crate::error::Error;
use crate::state::{Direction, Primitive};

// ============================================================================
/// `sqrt(gamma * p / rho)`.
///
/// # Errors
/// Returns [`Error::NonPositiveThermo`] when `rho <= 0` or `p <= 0`.
pub fn speed_of_sound(q: &Primitive, gamma: f64, i: usize, j: usize) -> Result<f64, Error> {
    if q.r() <= 0.0 || q.p() <= 0.0 {
        return Err(Error::NonPositiveThermo { i, j, rho: q.r(), p: q.p() });
    }
    Ok((gamma * q.p() / q.r()).sqrt())
}

// ============================================================================
/// Fast magnetosonic speed along `dir`.
///
/// # Errors
/// Returns [`Error::NonPositiveThermo`] when `rho <= 0` or `p <= 0`.
pub fn fast_magnetosonic_speed(q: &Primitive, gamma: f64, dir: Direction, i: usize, j: usize) -> Result<f64, Error> {
    let cs = speed_of_sound(q, gamma, i, j)?;
    let c0_sq = cs * cs;
    let b_sq = q.b_squared();
    let ca_sq = b_sq / q.r();
    let bd = match dir {
        Direction::X => q.bx(),
        Direction::Y => q.by(),
        Direction::Z => q.bz(),
    };
    let cap_sq = bd * bd / q.r();
    let sum = c0_sq + ca_sq;
    let discriminant = (sum * sum - 4.0 * c0_sq * cap_sq).max(0.0);
    Ok((0.5 * sum + 0.5 * discriminant.sqrt()).sqrt())
}




#[cfg(test)]
mod tests {
    use super::*;

    fn q(rho: f64, p: f64, bx: f64, by: f64, bz: f64) -> Primitive {
        Primitive([rho, 0.0, 0.0, 0.0, p, bx, by, bz, 0.0])
    }

    #[test]
    fn sound_speed_matches_formula() {
        let gamma = 1.4;
        let state = q(1.0, 1.0, 0.0, 0.0, 0.0);
        let cs = speed_of_sound(&state, gamma, 0, 0).unwrap();
        assert!((cs - (gamma).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn sound_speed_rejects_non_positive_thermo() {
        assert!(speed_of_sound(&q(-1.0, 1.0, 0.0, 0.0, 0.0), 1.4, 0, 0).is_err());
        assert!(speed_of_sound(&q(1.0, -1.0, 0.0, 0.0, 0.0), 1.4, 0, 0).is_err());
    }

    #[test]
    fn fast_magnetosonic_speed_reduces_to_sound_speed_without_field() {
        let gamma = 1.4;
        let state = q(1.0, 1.0, 0.0, 0.0, 0.0);
        let cs = speed_of_sound(&state, gamma, 0, 0).unwrap();
        let cf = fast_magnetosonic_speed(&state, gamma, Direction::X, 0, 0).unwrap();
        assert!((cf - cs).abs() < 1e-12);
    }

    #[test]
    fn fast_magnetosonic_speed_at_least_sound_speed_with_field() {
        let gamma = 1.4;
        let state = q(1.0, 1.0, 0.3, 0.2, 0.1);
        let cs = speed_of_sound(&state, gamma, 0, 0).unwrap();
        let cf = fast_magnetosonic_speed(&state, gamma, Direction::X, 0, 0).unwrap();
        assert!(cf >= cs);
    }
}
