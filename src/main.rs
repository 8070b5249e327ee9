use clap::{CommandFactory, Parser};
use uuid_replacer::utils::error::ReplaceError;
use uuid_replacer::utils::{logger, validation::Validate};
use uuid_replacer::{CliConfig, LocalStorage, RandomUuidSource, ReplaceEngine, ReplacePipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 驗證參數
    if let Err(e) = config.validate() {
        tracing::debug!("Configuration validation failed: {}", e);
        if matches!(e, ReplaceError::MissingInputArgument) {
            eprintln!("{}", CliConfig::command().render_usage());
        } else {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
        std::process::exit(e.exit_code());
    }

    let json_output = config.json;
    let dry_run = config.dry_run;

    let pipeline = ReplacePipeline::new(LocalStorage::new(), config, RandomUuidSource);
    let engine = ReplaceEngine::new_with_dry_run(pipeline, dry_run);

    match engine.run() {
        Ok(outcome) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                for replacement in outcome.replacements.iter() {
                    println!("{} -> {}", replacement.original, replacement.replacement);
                }
                if outcome.written {
                    println!("📁 Output saved to: {}", outcome.output_path.display());
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ UUID replacement failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
