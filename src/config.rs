use std::time::Duration;

/// Startup parameters for one simulation run. Dimensions are fixed for the
/// life of the grid; there is no runtime reconfiguration.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Config {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) density: f64,
    pub(crate) tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 25,
            height: 15,
            density: 0.15,
            tick: Duration::from_millis(100),
        }
    }
}
