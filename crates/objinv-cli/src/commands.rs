use anyhow::Context;
use colored::Colorize;
use objinv::{
    InventoryConfig, InventoryFile, InventoryReader, InventoryWriter, Manifest, TracingLogger,
};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => cmd_generate(args).map(|_| ()),
        Command::Dump(args) => cmd_dump(args),
    }
}

/// Project name precedence: `--project`, then the manifest, then the config.
fn resolve_config(args: &GenerateArgs, manifest: &Manifest) -> anyhow::Result<InventoryConfig> {
    let mut config = match &args.config {
        Some(path) => InventoryConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => InventoryConfig::default(),
    };
    if let Some(project) = args.project.clone().or_else(|| manifest.project.clone()) {
        config.project_name = project;
    }
    Ok(config)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<InventoryFile> {
    let manifest = Manifest::load(&args.manifest)
        .with_context(|| format!("reading manifest {}", args.manifest.display()))?;
    let config = resolve_config(&args, &manifest)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let tree = manifest.to_tree();
    tracing::debug!(objects = tree.len(), project = %config.project_name, "loaded manifest");

    let writer = InventoryWriter::with_config(TracingLogger, &config)?;
    let file = writer.generate(&tree.roots(), &args.out)?;

    println!(
        "{} Wrote {} entries to {}",
        "✓".green().bold(),
        file.entry_count.to_string().bold(),
        file.path.display().to_string().cyan()
    );
    Ok(file)
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let reader = InventoryReader::open(&args.path)
        .with_context(|| format!("reading inventory {}", args.path.display()))?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(reader.entries())?);
        }
        OutputFormat::Text => {
            println!(
                "Project: {}  Version: {}  ({} entries)",
                reader.project_name().bold(),
                reader.version(),
                reader.len()
            );
            for entry in reader.entries() {
                println!(
                    "  {} {} {}",
                    entry.name.yellow(),
                    format!("{}:{}", entry.domain, entry.role).dimmed(),
                    entry.uri.blue()
                );
            }
        }
    }
    Ok(())
}
