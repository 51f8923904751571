use crate::input::InputSource;
use crate::options::{DecodePolicy, ExecutionMode, MetricSet};
use derive_builder::Builder;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Resolved inputs, in the order they were given.
    #[builder(default)]
    pub inputs: Vec<InputSource>,
    #[builder(default)]
    pub metrics: MetricSet,
    /// Requested worker count; see [`Config::worker_count`].
    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,
    #[builder(default)]
    pub mode: ExecutionMode,
    #[builder(default)]
    pub decode: DecodePolicy,
}

impl Config {
    /// Number of workers the pool actually starts: at least one, never more
    /// than there are inputs to hand out.
    pub fn worker_count(&self) -> usize {
        self.jobs.clamp(1, self.inputs.len().max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![],
            metrics: MetricSet::default(),
            jobs: num_cpus::get(),
            mode: ExecutionMode::default(),
            decode: DecodePolicy::default(),
        }
    }
}
