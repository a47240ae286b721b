use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use portalworld_kernel::WorldDefinition;
use portalworld_registry::{Format, WorldRegistry};
use portalworld_scatter::Scatter;
use portalworld_tools::WorldInspector;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portalworld-cli", about = "CLI tool for portalworld world presets")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory of world definition files merged over the built-in worlds
    #[arg(long, global = true)]
    worlds: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// List registered worlds
    List,
    /// Print a world definition
    Show {
        world: String,
        /// Output format (json or yaml)
        #[arg(short, long, default_value = "json")]
        format: Format,
    },
    /// Summarize a world and list its obstacles
    Inspect { world: String },
    /// Check portal references, ranges and fog planes
    Validate {
        /// Extra world file to check against the registry; its key is the file stem
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Write one definition file per world
    Export {
        dir: PathBuf,
        #[arg(short, long, default_value = "json")]
        format: Format,
    },
    /// Scatter a world's procedural scenery and print it as JSON
    Scatter {
        world: String,
        /// RNG seed for deterministic placement
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
    /// Report which portal, if any, a viewer at (x, z) would enter
    Portal {
        world: String,
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
        /// Trigger radius around each portal
        #[arg(short, long, default_value = "5")]
        radius: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let registry = load_registry(cli.worlds.as_ref())?;

    match cli.command {
        Commands::Validate { file } => validate(registry, file.as_ref()),
        command => {
            let registry = registry
                .validated()
                .context("world registry failed validation; run `validate` for details")?;
            run(command, &registry)
        }
    }
}

fn run(command: Commands, registry: &WorldRegistry) -> anyhow::Result<()> {
    match command {
        Commands::Info => {
            println!("portalworld-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("registry: {}", portalworld_registry::crate_info());
            println!("tools: {}", portalworld_tools::crate_info());
            println!("worlds: {}", registry.len());
        }
        Commands::List => {
            for (key, world) in registry.iter() {
                println!("{key:<10} {}", world.name);
            }
        }
        Commands::Show { world, format } => {
            let def = lookup(registry, &world)?;
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(def)?),
                Format::Yaml => print!("{}", serde_yaml::to_string(def)?),
                Format::Cbor => bail!("cbor is a binary format; use `export --format cbor`"),
            }
        }
        Commands::Inspect { world } => {
            let def = lookup(registry, &world)?;
            println!("{}", WorldInspector::summary(&world, def));
            for info in WorldInspector::obstacles(def) {
                println!("  {info}");
            }
        }
        Commands::Validate { file } => validate(registry.clone(), file.as_ref())?,
        Commands::Export { dir, format } => {
            let written = registry
                .export_dir(&dir, format)
                .with_context(|| format!("exporting worlds to {}", dir.display()))?;
            for path in written {
                println!("wrote {}", path.display());
            }
        }
        Commands::Scatter { world, seed } => {
            let def = lookup(registry, &world)?;
            let layout = Scatter::world(seed, def);
            tracing::info!(world = %world, seed, placements = layout.total(), "scattered");
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Commands::Portal {
            world,
            x,
            z,
            radius,
        } => {
            let def = lookup(registry, &world)?;
            match def.portal_near(x, z, radius) {
                Some(portal) => println!(
                    "portal at ({}, {}) -> {}",
                    portal.x, portal.z, portal.destination
                ),
                None => println!("no portal within {radius} of ({x}, {z})"),
            }
        }
    }

    Ok(())
}

fn load_registry(dir: Option<&PathBuf>) -> anyhow::Result<WorldRegistry> {
    let mut registry = WorldRegistry::builtin().clone();
    if let Some(dir) = dir {
        let extra = WorldRegistry::load_dir(dir)
            .with_context(|| format!("loading worlds from {}", dir.display()))?;
        tracing::info!(count = extra.len(), dir = %dir.display(), "merging world files");
        registry.merge(extra);
    }
    Ok(registry)
}

fn lookup<'a>(registry: &'a WorldRegistry, key: &str) -> anyhow::Result<&'a WorldDefinition> {
    match registry.get(key) {
        Some(def) => Ok(def),
        None => {
            let known: Vec<&str> = registry.keys().collect();
            bail!("unknown world {key:?} (known: {})", known.join(", "))
        }
    }
}

fn validate(mut registry: WorldRegistry, file: Option<&PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = file {
        let format = Format::from_path(path)
            .with_context(|| format!("cannot tell the format of {}", path.display()))?;
        let key = path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("cannot derive a world key from {}", path.display()))?
            .to_string();
        let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let world: WorldDefinition = format
            .read(file)
            .with_context(|| format!("decoding {}", path.display()))?;
        registry.insert(key, world);
    }

    match registry.validate() {
        Ok(()) => {
            println!("{} world(s) OK", registry.len());
            Ok(())
        }
        Err(report) => {
            for issue in &report.issues {
                println!("error: {issue}");
            }
            bail!("{} validation issue(s)", report.issues.len())
        }
    }
}
