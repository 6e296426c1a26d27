use clap::Parser;
use tab2opf::utils::{logger, validation::Validate};
use tab2opf::{CliConfig, ConvertPipeline, Customization, Engine, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tab2opf");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    // The customization module must resolve before any reading begins.
    let custom = match Customization::load(config.module.as_deref()) {
        Ok(custom) => custom,
        Err(e) => {
            tracing::error!("Failed to load customization module: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ConvertPipeline::new(storage, config, custom);
    let engine = Engine::new(pipeline);

    match engine.run() {
        Ok(opf_name) => {
            tracing::info!("Dictionary package written, manifest: {}", opf_name);
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
