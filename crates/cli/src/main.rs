#![deny(unsafe_code)]
//! CLI binary for abyss.
//!
//! Subcommands:
//! - `render [engine]`: run the frame loop offline, write the last frame as PNG
//! - `replay <recipe.json>`: same, driven by a recipe file
//! - `trace [engine]`: print the draw commands of the last frame as JSON
//! - `list`: print available engines and their parameters

mod error;

use abyss_core::recipe::{BurstEvent, Recipe};
use abyss_core::{Engine, RecordingSurface};
use abyss_engines::pixel::abyss_background;
use abyss_engines::{play, EngineKind, Raster};
use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "abyss", about = "Underwater particle-field renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by `render` and `trace`; together they form a recipe.
#[derive(Args)]
struct RunArgs {
    /// Engine name.
    #[arg(default_value = "plankton")]
    engine: String,

    /// Surface width in pixels.
    #[arg(short = 'W', long, default_value_t = 800)]
    width: usize,

    /// Surface height in pixels.
    #[arg(short = 'H', long, default_value_t = 600)]
    height: usize,

    /// Number of frames to run.
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// PRNG seed for deterministic output.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Burst injected before a frame, as FRAME:UNITS. Repeatable.
    #[arg(short, long, value_parser = parse_burst)]
    burst: Vec<BurstEvent>,

    /// Engine parameters as a JSON object.
    #[arg(long, default_value = "{}")]
    params: String,
}

impl RunArgs {
    fn into_recipe(self) -> Result<Recipe, CliError> {
        let params: serde_json::Value = serde_json::from_str(&self.params)
            .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
        let mut recipe = Recipe::new(&self.engine, self.width, self.height, self.seed);
        recipe.params = params;
        recipe.frames = self.frames;
        recipe.bursts = self.burst;
        Ok(recipe)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Run an engine and write its last frame as a PNG.
    Render {
        #[command(flatten)]
        run: RunArgs,

        /// Output file path.
        #[arg(short, long, default_value = "abyss.png")]
        output: PathBuf,

        /// Also write the recipe of this run as JSON.
        #[arg(long)]
        save_recipe: Option<PathBuf>,
    },
    /// Replay a recipe file and write its last frame as a PNG.
    Replay {
        recipe: PathBuf,

        #[arg(short, long, default_value = "abyss.png")]
        output: PathBuf,
    },
    /// Print the draw commands of an engine's last frame.
    Trace {
        #[command(flatten)]
        run: RunArgs,
    },
    /// List available engines and their parameters.
    List,
}

/// Parses `FRAME:UNITS` into a burst event.
fn parse_burst(s: &str) -> Result<BurstEvent, String> {
    let (frame, units) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FRAME:UNITS, got '{s}'"))?;
    let frame = frame
        .trim()
        .parse()
        .map_err(|e| format!("invalid frame '{frame}': {e}"))?;
    let units = units
        .trim()
        .parse()
        .map_err(|e| format!("invalid units '{units}': {e}"))?;
    Ok(BurstEvent { frame, units })
}

fn load_recipe(path: &Path) -> Result<Recipe, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid recipe {}: {e}", path.display())))
}

/// Plays `recipe` onto a raster and writes the final frame.
///
/// The raster starts empty; `play` sizes it once the recipe has validated.
fn render(recipe: &Recipe, output: &Path, json: bool) -> Result<(), CliError> {
    let raster = play(recipe, Raster::new(0, 0))?.stop();
    abyss_engines::snapshot::write_png(&raster, abyss_background(), output)?;

    if json {
        let info = serde_json::json!({
            "engine": recipe.engine,
            "width": recipe.width,
            "height": recipe.height,
            "frames": recipe.frames,
            "seed": recipe.seed,
            "bursts": recipe.bursts,
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {} ({}x{}, {} frames, seed {}) -> {}",
            recipe.engine,
            recipe.width,
            recipe.height,
            recipe.frames,
            recipe.seed,
            output.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let schemas = EngineKind::list_engines()
                .iter()
                .map(|name| {
                    EngineKind::from_name(name, 1, 1, 0, &serde_json::json!({}))
                        .map(|e| (name.to_string(), e.param_schema()))
                })
                .collect::<Result<serde_json::Map<_, _>, _>>()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&schemas)?);
            } else {
                for (name, schema) in &schemas {
                    println!("{name}");
                    let Some(params) = schema.as_object() else {
                        continue;
                    };
                    for (key, spec) in params.iter().filter(|(k, _)| !k.starts_with('_')) {
                        println!(
                            "  {key:<16} default {:<6} {}",
                            spec["default"].to_string(),
                            spec["description"].as_str().unwrap_or_default()
                        );
                    }
                }
            }
        }
        Command::Render {
            run,
            output,
            save_recipe,
        } => {
            let recipe = run.into_recipe()?;
            if let Some(path) = save_recipe {
                std::fs::write(&path, serde_json::to_string_pretty(&recipe)?)?;
                log::info!("recipe saved to {}", path.display());
            }
            render(&recipe, &output, cli.json)?;
        }
        Command::Replay { recipe, output } => {
            let recipe = load_recipe(&recipe)?;
            render(&recipe, &output, cli.json)?;
        }
        Command::Trace { run } => {
            let recipe = run.into_recipe()?;
            let surface = play(&recipe, RecordingSurface::new(0, 0))?.stop();
            let frame = surface.last_frame();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(frame)?);
            } else {
                for command in frame {
                    println!("{}", serde_json::to_string(command)?);
                }
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        log::debug!("exiting with code {}", e.exit_code());
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
