mod config;
mod error;
mod table;

use std::io;

use optable_core::{OptionTable, args_from_env, audit_table, execute, is_present, validate};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::HostConfig;
use crate::error::Result;
use crate::table::{HostTable, Session, host_table};

fn main() {
    let args = args_from_env();
    let table = host_table::<io::Stdout>();

    let result = HostConfig::from_env().and_then(|config| {
        setup_logging(&config, &table, &args);
        run(&table, config, &args)
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

/// Installs the stderr log subscriber.
///
/// `--debug` has no handler; it is looked up here, before validation, and
/// forces the `debug` level. Otherwise `RUST_LOG` wins over the configured
/// level.
fn setup_logging<C>(config: &HostConfig, table: &OptionTable<C>, args: &[String]) {
    let filter = if is_present(table, "debug", args).unwrap_or(false) {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(table: &HostTable<io::Stdout>, config: HostConfig, args: &[String]) -> Result<()> {
    for issue in audit_table(table) {
        warn!(%issue, "Option table issue");
    }

    let mut session = Session::new(table, config, io::stdout())?;
    if args.is_empty() {
        session.print_usage()?;
        return Ok(());
    }

    validate(table, args)?;
    debug!(count = args.len(), "Command line accepted");
    execute(table, &mut session, args)?;
    Ok(())
}
