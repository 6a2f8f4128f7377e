use gravsim::{bench_step, Modes, RecordingRenderer, Scenario, ScenarioConfig, Shell, TickDriver};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(version, about = "2D gravity and collision simulator")]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless it is an existing path
    #[arg(short, default_value = "orbit.yaml")]
    file_name: String,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Stop after this many frames (headless only)
    #[arg(long)]
    frames: Option<u64>,

    /// Time the pair pass for growing N and exit
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.is_file() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let text = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read scenario {}", config_path.display()))?;
    let scenario_cfg = ScenarioConfig::from_yaml(&text)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let engine = Arc::new(scenario.build_engine()?);
    info!(file = %args.file_name, bodies = engine.live_count(), "scenario loaded");

    if scenario.modes.contains(Modes::ENABLE_INPUT) {
        Shell::new(engine.clone()).spawn()?;
    }

    let headless = args.headless || cfg!(not(feature = "viewer"));
    let frames = if headless { args.frames } else { None };
    let driver = TickDriver::new(engine, RecordingRenderer::new(frames));

    if headless {
        let stats = driver.run();
        println!("{stats}");
    } else {
        #[cfg(feature = "viewer")]
        gravsim::run_2d(driver);
    }

    Ok(())
}
