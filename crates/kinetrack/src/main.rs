use anyhow::Result;
use clap::Parser;
use kinetrack::cli::SmoothArgs;

fn main() -> Result<()> {
    kinetrack::init_tracing();
    SmoothArgs::parse().run()
}
