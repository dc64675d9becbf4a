use horizon_suggest_demo::{CONFIG_ENV, DemoConfig, DemoError, init_logging, run};

fn main() {
    init_logging();

    let result = DemoConfig::resolve(std::env::args(), std::env::var(CONFIG_ENV).ok())
        .map_err(DemoError::from)
        .and_then(run);
    if let Err(err) = result {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
