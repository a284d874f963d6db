use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "objinv",
    about = "Write and inspect Sphinx objects inventories",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write objects.inv from a JSON object manifest
    Generate(GenerateArgs),
    /// Print the entries of an existing inventory
    Dump(DumpArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// JSON manifest describing the documented objects
    #[arg(short, long)]
    pub manifest: PathBuf,
    /// Project name for the header (overrides manifest and config)
    #[arg(short, long)]
    pub project: Option<String>,
    /// TOML file with writer settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Output directory, created if missing
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct DumpArgs {
    pub path: PathBuf,
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_generate() {
        let cli = Cli::try_parse_from(["objinv", "generate", "--manifest", "tree.json"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.manifest, PathBuf::from("tree.json"));
            assert_eq!(args.out, PathBuf::from("."));
            assert!(args.project.is_none());
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_generate_all_flags() {
        let cli = Cli::try_parse_from([
            "objinv", "generate", "-m", "t.json", "-p", "Foo", "-c", "objinv.toml", "-o", "build",
        ])
        .unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.project, Some("Foo".into()));
            assert_eq!(args.config, Some(PathBuf::from("objinv.toml")));
            assert_eq!(args.out, PathBuf::from("build"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn generate_requires_manifest() {
        assert!(Cli::try_parse_from(["objinv", "generate"]).is_err());
    }

    #[test]
    fn parse_dump_json() {
        let cli = Cli::try_parse_from(["objinv", "dump", "objects.inv", "--format", "json"]).unwrap();
        if let Command::Dump(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("objects.inv"));
            assert!(matches!(args.format, OutputFormat::Json));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["objinv", "--verbose", "dump", "x.inv"]).unwrap();
        assert!(cli.verbose);
    }
}
