use clap::Parser;
use small_katas::utils::{logger, validation::Validate};
use small_katas::{KataRunner, ReverseConfig, ReverseProgram};

fn main() {
    let config = ReverseConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let runner = KataRunner::new(ReverseProgram::new(config));
    std::process::exit(runner.run_console());
}
