use crate::physics::speed_of_sound;
use crate::state::{cell_prim_to_cons, Conserved, Primitive, IE, IR, IU, IV};

// ============================================================================
/// The hydro flux function of a single primitive state: `F.IR = rho*u`,
/// `F.IU = rho*u^2 + p`, `F.IV = rho*u*v`, `F.IE = (p + E)*u`. MHD
/// fields are left zero — `hll::flux` must never be called with MHD
/// enabled (enforced at the `riemann` dispatch seam).
pub fn compute_flux(q: &Primitive, gamma: f64) -> Conserved {
    let rho = q.r();
    let u = q.u();
    let v = q.v();
    let p = q.p();
    let ek = 0.5 * rho * (u * u + v * v);
    let e = p / (gamma - 1.0) + ek;

    let mut f = [0.0; 9];
    f[IR] = rho * u;
    f[IU] = rho * u * u + p;
    f[IV] = rho * u * v;
    f[IE] = (p + e) * u;
    Conserved(f)
}

// ============================================================================
pub fn flux(ql: Primitive, qr: Primitive, gamma: f64) -> Conserved {
    // Wave speeds use the cell itself (not the Riemann states' own
    // speed of sound failures): this solver is only reached for legal
    // hydro states, so `(i, j)` in the diagnostic is irrelevant here.
    let al = speed_of_sound(&ql, gamma, 0, 0).unwrap_or(0.0);
    let ar = speed_of_sound(&qr, gamma, 0, 0).unwrap_or(0.0);

    let sl = (ql.u() - al).min(qr.u() - ar);
    let sr = (ql.u() + al).max(qr.u() + ar);

    let fl = compute_flux(&ql, gamma);
    let fr = compute_flux(&qr, gamma);

    if sl >= 0.0 {
        fl
    } else if sr <= 0.0 {
        fr
    } else {
        let ul = cell_prim_to_cons(ql, gamma);
        let ur = cell_prim_to_cons(qr, gamma);
        (fl * sr - fr * sl + (ur - ul) * (sl * sr)) / (sr - sl)
    }
}




#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sod_left() -> Primitive {
        Primitive([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
    }

    fn sod_right() -> Primitive {
        Primitive([0.125, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0, 0.0])
    }

    #[test]
    fn identical_states_return_exact_flux() {
        let gamma = 1.4;
        let q = sod_left();
        let f = flux(q, q, gamma);
        let expect = compute_flux(&q, gamma);
        for k in 0..9 {
            assert_relative_eq!(f.0[k], expect.0[k], max_relative = 1e-12);
        }
    }

    #[test]
    fn supersonic_left_state_selects_left_flux() {
        let gamma = 1.4;
        let ql = Primitive([1.0, 10.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
        let qr = sod_right();
        let f = flux(ql, qr, gamma);
        let expect = compute_flux(&ql, gamma);
        for k in 0..9 {
            assert_relative_eq!(f.0[k], expect.0[k], max_relative = 1e-12);
        }
    }

    #[test]
    fn sod_flux_is_finite() {
        let gamma = 1.4;
        let f = flux(sod_left(), sod_right(), gamma);
        assert!(f.is_finite());
    }
}
