use std::path::{Path, PathBuf};
use clap::{Args, Parser, Subcommand};
use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

use newick_viz::{DocumentAssembler, RenderConfig};

#[derive(Parser)]
#[command(name = "newick-viz")]
#[command(author, version, about = "Phylogenetic tree visualization tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an HTML visualization of a Newick tree
    Render {
        /// Path to a file holding the tree in Newick format
        #[arg(value_name = "TREE")]
        tree: PathBuf,

        /// Output HTML file path (default: <tree>.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with group metadata
        #[arg(short, long)]
        groups: Option<PathBuf>,

        /// JSON file with render options, layered over the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: ConfigOverrides,

        #[command(flatten)]
        templates: TemplateArgs,
    },

    /// Print the template directory in use
    TemplateDir {
        #[command(flatten)]
        templates: TemplateArgs,
    },
}

#[derive(Args)]
struct TemplateArgs {
    /// Directory holding base.html, styles/ and scripts/
    #[arg(long, env = "NEWICK_VIZ_TEMPLATE_DIR")]
    template_dir: Option<PathBuf>,
}

impl TemplateArgs {
    fn assembler(self) -> DocumentAssembler {
        match self.template_dir {
            Some(dir) => DocumentAssembler::with_template_dir(dir),
            None => DocumentAssembler::new(),
        }
    }
}

/// Command-line overrides, applied on top of the config file
#[derive(Args)]
struct ConfigOverrides {
    /// Padding around group hulls
    #[arg(long)]
    padding: Option<f64>,

    /// Fill opacity of group hulls
    #[arg(long)]
    opacity: Option<f64>,

    /// Points sampled per node for hulls
    #[arg(long)]
    points: Option<u64>,

    /// Distance threshold for merging hull points
    #[arg(long)]
    distance_threshold: Option<f64>,

    /// Show branch support values (`--show-confidence=false` turns it off)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    show_confidence: Option<bool>,

    #[arg(long)]
    font_size: Option<f64>,

    #[arg(long)]
    font_family: Option<String>,

    #[arg(long)]
    font_weight: Option<String>,

    #[arg(long)]
    min_branch_length: Option<f64>,

    #[arg(long)]
    max_branch_length: Option<f64>,

    /// Length used for branches without one
    #[arg(long)]
    default_length: Option<f64>,
}

impl ConfigOverrides {
    fn apply(self, map: &mut Map<String, Value>) {
        let numbers = [
            ("padding", self.padding),
            ("opacity", self.opacity),
            ("distance_threshold", self.distance_threshold),
            ("font_size", self.font_size),
            ("min_branch_length", self.min_branch_length),
            ("max_branch_length", self.max_branch_length),
            ("default_length", self.default_length),
        ];
        for (key, value) in numbers {
            if let Some(v) = value {
                map.insert(key.to_string(), number(v));
            }
        }
        if let Some(points) = self.points {
            map.insert("points".to_string(), Value::from(points));
        }
        if let Some(show) = self.show_confidence {
            map.insert("show_confidence".to_string(), Value::Bool(show));
        }
        if let Some(family) = self.font_family {
            map.insert("font_family".to_string(), Value::String(family));
        }
        if let Some(weight) = self.font_weight {
            let weight = match weight.parse::<u64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::String(weight),
            };
            map.insert("font_weight".to_string(), weight);
        }
    }
}

/// Whole numbers stay integers in the page
fn number(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Value::from(v as i64)
    } else {
        Value::from(v)
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render { tree, output, groups, config, overrides, templates } => {
            let assembler = templates.assembler();

            let newick = std::fs::read_to_string(&tree)
                .with_context(|| format!("Failed to read tree file {}", tree.display()))?;
            let newick = newick.trim_end();

            let groups = match groups {
                Some(path) => read_json(&path)?,
                None => Value::Object(Map::new()),
            };

            let mut config_map = RenderConfig::default().to_map();
            if let Some(path) = config {
                match read_json(&path)? {
                    Value::Object(file_map) => config_map.extend(file_map),
                    _ => bail!("Config file {} must hold a JSON object", path.display()),
                }
            }
            overrides.apply(&mut config_map);
            let render_config = RenderConfig::from_map(&config_map)?;

            let output_path = output.unwrap_or_else(|| {
                let mut path = tree.clone();
                path.set_extension("html");
                path
            });

            assembler.render_to_file(&render_config, &groups, newick, &output_path)?;

            println!("Visualization generated: {}", output_path.display());
        }

        Commands::TemplateDir { templates } => {
            println!("{}", templates.assembler().template_dir().display());
        }
    }

    Ok(())
}
