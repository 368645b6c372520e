mod cli;
mod commands;
mod palette;


use cli::{NameParams, NamesParams, TimeParams, build_cli};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("name", m)) => {
            let params = NameParams::from_matches(m);
            commands::name::run(params.into());
        }
        Some(("names", m)) => {
            let params = NamesParams::from_matches(m);
            commands::names::run(params.into());
        }
        Some(("time", m)) => {
            let params = TimeParams::from_matches(m);
            commands::time::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
