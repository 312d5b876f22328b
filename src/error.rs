//! Error kinds for the solver core, plus the ambient I/O variants needed
//! by configuration loading.

/// Errors the core and the ambient config/driver layers can produce.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Contradictory or out-of-range configuration, detected at startup.
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    /// Density or pressure `<= 0` while computing a wave speed.
    #[error("non-positive density or pressure at cell ({i}, {j}): rho={rho}, p={p}")]
    NonPositiveThermo { i: usize, j: usize, rho: f64, p: f64 },

    /// NaN/Inf detected in Q or U after a sub-step.
    #[error("non-finite state at cell ({i}, {j}), field {field}, t={t}, iteration={iteration}")]
    NonFiniteState { i: usize, j: usize, field: usize, t: f64, iteration: u64 },

    /// Initializer name not registered.
    #[error("unknown problem '{0}'")]
    UnknownProblem(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}
