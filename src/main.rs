use clap::error::ErrorKind;
use clap::Parser;
use uart_push::adapters::serial;
use uart_push::utils::{logger, validation::Validate};
use uart_push::{CliConfig, PushError, PushPlan};

fn main() {
    // 參數錯誤一律以狀態碼 1 結束，help/version 則正常輸出
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let err = PushError::from(e);
            eprintln!("{}", err.user_friendly_message());
            std::process::exit(err.exit_code());
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        // 記錄詳細錯誤信息
        tracing::error!("❌ uart-push failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), PushError> {
    config.validate()?;

    if config.list_ports {
        let ports = serial::list_ports()?;
        if ports.is_empty() {
            println!("No serial ports found");
        }
        for info in &ports {
            println!("{}", serial::describe_port(info));
        }
        return Ok(());
    }

    let plan = PushPlan::from_cli(config)?;

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - port will not be opened");
        uart_push::dry_run(&plan, std::io::stdout());
        return Ok(());
    }

    let tally = uart_push::push(&plan, std::io::stdout())?;
    tracing::info!("✅ Session finished: {}", tally);
    Ok(())
}
