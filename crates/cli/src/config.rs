// crates/cli/src/config.rs
use crate::args::Args;
pub use pwc_engine::config::{Config, ConfigBuilder, ConfigBuilderError};
use pwc_engine::input::resolve_inputs;
use pwc_engine::options::{DecodePolicy, ExecutionMode};

impl TryFrom<Args> for Config {
    type Error = ConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mode = if args.sequential {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Concurrent
        };
        let decode = if args.lossy {
            DecodePolicy::Lossy
        } else {
            DecodePolicy::Strict
        };

        let mut builder = ConfigBuilder::default();
        builder
            .metrics(args.metrics())
            .mode(mode)
            .decode(decode)
            .inputs(resolve_inputs(args.paths));
        if let Some(jobs) = args.jobs {
            builder.jobs(jobs.get());
        }
        builder.build()
    }
}
