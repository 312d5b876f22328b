use crate::physics::{fast_magnetosonic_speed, speed_of_sound};
use crate::state::{cell_prim_to_cons, Conserved, Direction, Primitive, IBX, IBY, IBZ, IE, IR, IU, IV, IW};

const BETA_MIN: f64 = 1e-3;
const ALFVEN_MAX: f64 = 10.0;




/**
 * Five-wave MHD approximate Riemann solver: three characteristic speeds
 * (one longitudinal, two transverse) and a star state per transverse
 * component.
 */
struct LongTransverse {
    pressure_like: [f64; 3],
    velocity: [f64; 3],
    wave_speed: [f64; 3],
}

// ============================================================================
fn side(q: &Primitive, gamma: f64, epsilon: f64) -> LongTransverse {
    let b_sq = q.b_squared();
    let cs = speed_of_sound(q, gamma, 0, 0).unwrap_or(0.0);
    let ca = (q.r() * (q.bx() * q.bx() + 0.5 * b_sq)).sqrt() + epsilon;
    let cb = (q.r() * (q.r() * cs * cs + q.by() * q.by() + q.bz() * q.bz() + 0.5 * b_sq)).sqrt();

    LongTransverse {
        pressure_like: [
            -q.bx() * q.bx() + q.p() + 0.5 * b_sq,
            -q.bx() * q.by(),
            -q.bx() * q.bz(),
        ],
        velocity: [q.u(), q.v(), q.w()],
        wave_speed: [cb, ca, ca],
    }
}

pub fn flux(ql: Primitive, qr: Primitive, gamma: f64, epsilon: f64) -> Conserved {
    let l = side(&ql, gamma, epsilon);
    let r = side(&qr, gamma, epsilon);

    let hyperbolic = ql.bx() * qr.bx() < -epsilon || ql.by() * qr.by() < -epsilon || ql.bz() * qr.bz() < -epsilon;

    let (cl, cr) = if hyperbolic {
        let cf_l = fast_magnetosonic_speed(&ql, gamma, Direction::X, 0, 0).unwrap_or(0.0);
        let cf_r = fast_magnetosonic_speed(&qr, gamma, Direction::X, 0, 0).unwrap_or(0.0);
        let c = (ql.r() * cf_l).max(qr.r() * cf_r);
        ([c, c, c], [c, c, c])
    } else {
        (l.wave_speed, r.wave_speed)
    };

    let mut u_star = [0.0; 3];
    let mut p_star = [0.0; 3];
    for k in 0..3 {
        let denom = cl[k] + cr[k];
        u_star[k] = (cl[k] * l.velocity[k] + cr[k] * r.velocity[k] + l.pressure_like[k] - r.pressure_like[k]) / denom;
        p_star[k] = (cr[k] * l.pressure_like[k] + cl[k] * r.pressure_like[k]
            + cl[k] * cr[k] * (l.velocity[k] - r.velocity[k]))
            / denom;
    }

    let (q, b_cross) = if u_star[0] > 0.0 { (ql, qr.bx()) } else { (qr, ql.bx()) };
    let u = cell_prim_to_cons(q, gamma);
    let u_s = u_star[0];

    let mut f = [0.0; 9];
    f[IR] = u.get(IR) * u_s;
    f[IU] = u.get(IU) * u_s + p_star[0];
    f[IV] = u.get(IV) * u_s + p_star[1];
    f[IW] = u.get(IW) * u_s + p_star[2];
    f[IE] = u.get(IE) * u_s + p_star[0] * u_s + p_star[1] * u_star[1] + p_star[2] * u_star[2];

    let beta = q.p() / (0.5 * q.b_squared());
    let alfven = (q.r() * q.u() / q.b_squared()).sqrt();
    let b_sel = if beta < BETA_MIN || alfven > ALFVEN_MAX { q.bx() } else { b_cross };

    f[IBX] = u.get(IBX) * u_s - b_sel * u_star[0];
    f[IBY] = u.get(IBY) * u_s - b_sel * u_star[1];
    f[IBZ] = u.get(IBZ) * u_s - b_sel * u_star[2];

    Conserved(f)
}
