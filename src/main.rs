use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use dto_kit::generator::{Generator, GeneratorOptions, LocalFileSystem, StubRenderer};
use dto_kit::utils::logging::{create_main_progress_bar, finish_progress_bar};
use dto_kit::{DtoConfig, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "dto-make", version, about = "Create record stub files")]
struct Cli {
    #[arg(required = true, help = "Names of the records to create, e.g. image or videos/videoFile")]
    names: Vec<String>,
    #[arg(long, help = "Folder below the source root that receives the records")]
    folder_name: Option<String>,
    #[arg(long, default_value_t = false, help = "Append Dto to the record names")]
    attach_dto: bool,
    #[arg(long, default_value_t = false, help = "Overwrite files that already exist")]
    force: bool,
    #[arg(long, help = "JSON configuration file")]
    config: Option<PathBuf>,
    #[arg(long, default_value = "src", help = "Source root of the crate")]
    root: PathBuf,
    #[arg(long, help = "Custom stub template")]
    stub: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DtoConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?
            .generator,
        None => GeneratorConfig::default(),
    };

    let renderer = match &cli.stub {
        Some(path) => StubRenderer::from_file(path)?,
        None => StubRenderer::default(),
    };

    let options = GeneratorOptions {
        folder_name: cli.folder_name,
        attach_dto: cli.attach_dto,
        force: cli.force,
    };

    let generator = Generator::new(LocalFileSystem, renderer, &cli.root, config);

    info!("Process of creating {} record file(s) has started", cli.names.len());
    generator.check_reserved(&cli.names)?;
    let output = generator.prepare(&options)?;

    let pb = create_main_progress_bar(cli.names.len() as u64, Some("Creating records"));
    for name in &cli.names {
        let path = generator
            .generate_one(&output, name, &options)
            .with_context(|| format!("creating {name}"))?;
        pb.set_message(path.display().to_string());
        pb.inc(1);
    }
    finish_progress_bar(&pb, Some("done"));

    info!("Successfully created all record files in {}", output.path.display());
    Ok(())
}
