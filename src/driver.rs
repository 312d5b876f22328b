//! Main loop: init -> bc fill -> dt -> update -> advance time -> output.

use log::info;

use crate::config::Config;
use crate::error::Error;
use crate::grid::{grid_prim_to_cons, Grid};
use crate::io::OutputSink;
use crate::mesh::Mesh;
use crate::models::Problem;
use crate::scheme::Scheme;
use crate::tasks::Tasks;
use crate::timestep::compute_dt;

/// Runs `problem` to `config.tend`, calling `sink.save` on the
/// configured cadence. Returns the error immediately if a sub-step
/// produces a `NonFiniteState`/`NonPositiveThermo` diagnostic: numerical
/// errors abort the run rather than limping onward.
pub fn run(config: &Config, problem: &dyn Problem, sink: &mut dyn OutputSink) -> Result<(), Error> {
    config.validate()?;
    problem.validate()?;

    let mesh = Mesh::new(config.nx, config.ny, config.nghosts, config.xmin, config.xmax, config.ymin, config.ymax)?;
    let mut grid = Grid::new(&mesh);

    for i in mesh.ibeg()..mesh.iend() {
        for j in mesh.jbeg()..mesh.jend() {
            let (x, y) = mesh.cell_center(i, j);
            grid.set_primitive(i, j, problem.primitive_at(x, y));
        }
    }
    grid_prim_to_cons(&mut grid, &mesh, config.gamma);

    let mut scheme = Scheme::new(
        &mesh,
        config.reconstruction,
        config.riemann_solver,
        config.time_stepping,
        config.boundary_x,
        config.boundary_y,
        config.gamma,
        config.mhd,
        config.smallr,
        config.epsilon,
    );

    let mut tasks = Tasks::new(0.0);
    let mut t = 0.0;
    let mut iteration = 0u64;

    sink.save(&grid, &mesh, iteration, t).map_err(|e| Error::ConfigInvalid(e.to_string()))?;
    tasks.save.advance(config.save_freq);

    while t + config.epsilon < config.tend {
        let dt = compute_dt(&grid, &mesh, config.gamma, config.mhd, config.cfl)?;
        let dt = dt.min(config.tend - t).min(tasks.save.next_time() - t).max(config.epsilon);

        scheme.step(&mut grid, &mesh, dt, t, iteration)?;
        t += dt;
        iteration += 1;

        if tasks.log.is_due(t) {
            info!("iteration={iteration} t={t:.6} dt={dt:.3e}");
            tasks.log.advance(config.log_frequency.max(1) as f64 * dt);
        }

        if tasks.save.is_due(t) {
            sink.save(&grid, &mesh, iteration, t).map_err(|e| Error::ConfigInvalid(e.to_string()))?;
            tasks.save.advance(config.save_freq);
        }
    }

    Ok(())
}
