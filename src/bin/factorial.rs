use clap::Parser;
use small_katas::utils::{logger, validation::Validate};
use small_katas::{FactorialConfig, FactorialProgram, KataRunner};

fn main() {
    let config = FactorialConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    // Negative arguments are reported on stdout and still exit 0.
    let runner = KataRunner::new(FactorialProgram::new(config));
    std::process::exit(runner.run_console());
}
