use anyhow::Context;
use clap::Parser;
use elp_codegen::core::ConfigProvider;
use elp_codegen::utils::{logger, validation::Validate};
use elp_codegen::{CliConfig, ElpPipeline, EtlEngine, LocalStorage, SummaryFormat};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting elp-codegen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("📁 Input: {}", config.input_dir());
    tracing::info!("📁 Output: {}", config.output_dir());
    if config.dry_run() {
        tracing::info!("🔍 DRY RUN MODE - no tables will be written");
    }

    let source = LocalStorage::new(config.input_dir().to_string());
    let sink = LocalStorage::new(config.output_dir().to_string());
    let engine = EtlEngine::new(ElpPipeline::new(source, sink, config));

    match engine.run() {
        Ok(summary) => match cli.summary_format {
            SummaryFormat::Text => println!("{}", summary.render_text()),
            SummaryFormat::Json => {
                let json = summary
                    .to_json()
                    .context("failed to serialize generation summary")?;
                println!("{}", json);
            }
        },
        Err(e) => {
            tracing::error!(
                "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
