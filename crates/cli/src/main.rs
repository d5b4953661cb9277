//! 16-bit machine simulator CLI.
//!
//! This binary provides the command-line front end. It performs:
//! 1. **Direct run:** Execute a machine-code file against bare memory and
//!    print the final machine state.
//! 2. **Cache run:** With `--cache`, route data accesses through a one- or
//!    two-level cache and print the configuration banner followed by the
//!    access log instead of the state dump.

use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use sim16_core::config::CacheSpec;
use sim16_core::core::Machine;
use sim16_core::core::units::cache::CacheHierarchy;
use sim16_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "sim16",
    about = "Simulate a 16-bit machine-code program",
    long_about = "Simulate a 16-bit machine-code program.\n\nWithout --cache, data accesses go straight to memory and the final\nmachine state is printed. With --cache, accesses go through a one- or\ntwo-level set-associative LRU cache and every access is logged instead.\n\nExamples:\n  sim16 prog.bin\n  sim16 --cache 64,2,4 prog.bin\n  sim16 --cache 16,1,2,64,4,4 prog.bin"
)]
struct Cli {
    /// Machine-code file to simulate.
    filename: String,

    /// Cache configuration: size,assoc,blocksize (one level) or
    /// size,assoc,blocksize,size,assoc,blocksize (two levels).
    #[arg(long, value_name = "SPEC")]
    cache: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            print!("{err}");
            process::exit(0);
        }
        Err(err) => {
            eprint!("{err}");
            process::exit(1);
        }
    };

    let cache = match cli.cache.as_deref() {
        Some(raw) => match raw.parse::<CacheSpec>() {
            Ok(spec) => Some(spec),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        },
        None => None,
    };

    tracing::debug!(file = %cli.filename, cached = cache.is_some(), "starting simulation");

    let mem = match loader::load_program(&cli.filename) {
        Ok(mem) => mem,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let hierarchy = cache.as_ref().map(CacheHierarchy::new);
    let with_cache = hierarchy.is_some();
    let mut machine = Machine::new(mem, hierarchy);

    if let Some(hierarchy) = machine.cache() {
        for level in hierarchy.levels() {
            println!("{level}");
        }
    }

    machine.run(|record| println!("{record}"));

    if !with_cache {
        print!("{}", machine.render_state());
    }
}
