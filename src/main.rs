use anyhow::Context;
use clap::Parser;
use formcheck::app::{load_rules, run_command};
use formcheck::utils::logger;
use formcheck::{CliConfig, FormError};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        let exit_code = match e.downcast_ref::<FormError>() {
            Some(form_error) if form_error.is_validation_failure() => {
                tracing::warn!("❌ {}", form_error);
                eprintln!("❌ {}", form_error.user_friendly_message());
                form_error.exit_code()
            }
            Some(form_error) => {
                tracing::error!("❌ {:#} (Category: {:?})", e, form_error.category());
                eprintln!("❌ {}", form_error.user_friendly_message());
                form_error.exit_code()
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                2
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let rules = load_rules(config.config.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(&config.command, &rules, &mut out)?;
    std::io::Write::flush(&mut out).context("failed to flush output")?;
    Ok(())
}
