use clap::Parser;
use pulse_bar::core::effects;
use pulse_bar::utils::monitor::RunMonitor;
use pulse_bar::utils::{logger, validation::Validate};
use pulse_bar::{
    CliConfig, ConsoleSink, Counter, DriverConfig, FileConfig, ProgressEngine, RandomSource,
    SeededRandom, ThreadRandom, Viewport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting pulse-bar demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 可選的 TOML 配置檔案
    let file_config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::error!("❌ Failed to load config file: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let driver_config: &dyn DriverConfig = match &file_config {
        Some(config) => config,
        None => &cli,
    };
    let seed = file_config
        .as_ref()
        .and_then(|config| config.engine.seed)
        .or(cli.seed);
    let demo = file_config.as_ref().and_then(|config| config.demo.clone());

    let monitor = RunMonitor::new(cli.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 Process monitoring enabled");
    }

    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => {
            tracing::info!("Reproducible run with seed {}", seed);
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom),
    };

    // 計數器示範
    let mut counter = Counter::new();
    let counter_steps = demo
        .as_ref()
        .and_then(|demo| demo.counter_steps.clone())
        .unwrap_or_else(|| vec![1, 1, 1, -1, 5]);
    for change in counter_steps {
        let value = counter.update(change);
        tracing::info!(
            "Counter now {} ({})",
            value,
            if counter.is_positive() {
                "positive"
            } else {
                "non-positive"
            }
        );
    }
    counter.reset();
    tracing::info!("Counter reset to {}", counter.value());

    // 粒子示範
    let viewport = Viewport {
        width: demo
            .as_ref()
            .and_then(|demo| demo.viewport_width)
            .unwrap_or(800),
        height: demo
            .as_ref()
            .and_then(|demo| demo.viewport_height)
            .unwrap_or(600),
    };
    let particles = effects::spawn_particles(&mut rng, viewport)?;
    tracing::info!(
        "Rolled {} particles over a {}x{} viewport",
        particles.len(),
        viewport.width,
        viewport.height
    );

    // 建立引擎並跑完進度條
    let sink = ConsoleSink::new();
    let mut engine = ProgressEngine::new_with_monitoring(driver_config, rng, sink, cli.monitor);
    engine.start().await;
    engine.join().await;

    tracing::info!("✅ Progress complete at {}%", engine.progress().await);
    monitor.log_phase("Demo finished");

    Ok(())
}
