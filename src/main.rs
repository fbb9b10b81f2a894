use clap::Parser;
use mail_toolkit::config::cli::{password_policy_with_overrides, Command};
use mail_toolkit::core::email::check_all;
use mail_toolkit::utils::{logger, validation::Validate};
use mail_toolkit::{
    compose_and_send, CliConfig, ConfigProvider, ConsoleSender, MailError, OutboxSender, Sender,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load_file_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    match cli.command {
        Command::Validate { addresses, json } => {
            let checks = check_all(addresses);
            if json {
                println!("{}", serde_json::to_string_pretty(&checks)?);
            } else {
                for check in &checks {
                    let verdict = if check.valid { "valid" } else { "invalid" };
                    println!("{}\t{}", check.address, verdict);
                }
            }

            let invalid = checks.iter().filter(|c| !c.valid).count();
            if invalid > 0 {
                tracing::warn!("{} of {} addresses are invalid", invalid, checks.len());
                std::process::exit(1);
            }
        }
        Command::Send {
            to,
            subject,
            body,
            from,
            outbox,
            dry_run,
        } => {
            let from = from.unwrap_or_else(|| config.from_address().to_string());
            let sender: Box<dyn Sender> = if dry_run {
                tracing::info!("Dry run, printing message to stdout");
                Box::new(ConsoleSender::stdout(from))
            } else {
                let path = outbox.unwrap_or_else(|| config.outbox_path().to_string());
                Box::new(OutboxSender::new(from, path))
            };

            if let Err(e) = compose_and_send(sender.as_ref(), &to, &subject, &body) {
                fail(&MailError::from(e));
            }
            tracing::info!("Message to {} sent", to);
        }
        Command::Password {
            length,
            min_digits,
            min_special,
            min_uppercase,
        } => {
            let policy = password_policy_with_overrides(
                config.password_policy(),
                length,
                min_digits,
                min_special,
                min_uppercase,
            );
            if let Err(e) = policy.validate() {
                fail(&e);
            }
            match policy.generate() {
                Ok(password) => println!("{}", password),
                Err(e) => fail(&MailError::from(e)),
            }
        }
    }

    Ok(())
}

fn fail(e: &MailError) -> ! {
    tracing::error!("{}", e);
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(2);
}
