use clap::Parser;
use dengue_dashboard::presenter::{self, AppState};
use dengue_dashboard::utils::{logger, validation::Validate};
use dengue_dashboard::{
    CliConfig, DashboardEngine, DashboardError, DashboardPipeline, LocalStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting dengue-dashboard");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => abort(&e),
    };

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 資料必須在開始服務前完整建置，否則直接結束
    let pipeline = DashboardPipeline::new(LocalStorage::default(), config.clone());
    let engine = DashboardEngine::new_with_monitoring(pipeline, config.monitor);
    let build = match engine.run() {
        Ok(build) => build,
        Err(e) => abort(&e),
    };

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - dashboard built, not serving");
        println!("✅ Source: {}", config.source_path);
        println!(
            "   Rows: {} loaded, {} kept, {} dropped",
            build.stats.rows_loaded,
            build.stats.rows_kept,
            build.stats.rows_dropped()
        );
        println!("   Municipalities: {}", build.stats.municipalities);
        for total in &build.aggregates.monthly_totals {
            println!("   {}: {} confirmed", total.month, total.confirmed);
        }
        return Ok(());
    }

    let page = presenter::render_page(&build.dashboard, chrono::Utc::now())?;
    let state = AppState::new(page);
    tracing::debug!("Rendered dashboard page ({} bytes)", state.page_len());

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    presenter::serve(listener, state).await?;

    Ok(())
}

fn abort(e: &DashboardError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    println!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
