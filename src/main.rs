use clap::Parser;
use threshold_report::core::render::sink_for;
use threshold_report::utils::error::ErrorSeverity;
use threshold_report::utils::{logger, validation::Validate};
use threshold_report::{build_reports, CliConfig, ReportConfig, ReportEngine, ReportError};

fn run(cli: &CliConfig, config: &ReportConfig) -> Result<usize, ReportError> {
    let engine = ReportEngine::with_fill(config.fill()?);
    let reports = build_reports(&cli.problems, &engine, config.threshold)?;

    let stdout = std::io::stdout();
    let mut sink = sink_for(config.format, stdout.lock());
    for report in &reports {
        sink.write_report(report)?;
    }
    sink.finish()?;

    Ok(reports.len())
}

fn exit_with(e: &ReportError) -> ! {
    tracing::error!("❌ Report failed: {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    match run(&cli, &config) {
        Ok(count) => tracing::info!("✅ Printed {} report(s)", count),
        Err(e) => exit_with(&e),
    }

    Ok(())
}
