mod cli;

use clap::Parser;
use geoaudit::analyze;
use geoaudit::config;
use geoaudit::error::AuditError;
use geoaudit::report::{self, OutputFormat};
use geoaudit::source::{JsonFileSource, WebsiteSource};
use geoaudit::storage::{FileStore, MemoryStore, ReportStore};
use geoaudit::types::config::{AnalysisToggles, AuditConfig};
use geoaudit::types::report::{AuditReport, FindingKind};
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const ERRORS: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn output_format(flag: Option<cli::ReportFormat>, cfg: Option<&AuditConfig>) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        Some(cli::ReportFormat::Sarif) => OutputFormat::Sarif,
        None => cfg
            .and_then(AuditConfig::output_format)
            .and_then(OutputFormat::parse)
            .unwrap_or(OutputFormat::Md),
    }
}

fn report_store(cfg: Option<&AuditConfig>) -> FileStore {
    let dir = cfg
        .map(AuditConfig::storage_dir)
        .unwrap_or(geoaudit::types::config::DEFAULT_STORAGE_DIR);
    FileStore::new(dir)
}

fn analysis_exit_code(report: &AuditReport) -> i32 {
    let has_kind = |kind| report.all_findings().any(|(_, finding)| finding.kind == kind);
    if has_kind(FindingKind::Error) {
        exit_code::ERRORS
    } else if has_kind(FindingKind::Warning) {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, AuditError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let loaded = config::load_config(Path::new("."), cli.config.as_deref())?;
    if loaded.is_none() {
        warn!("no {} found, using defaults", config::DEFAULT_CONFIG_FILE);
    }
    let base_toggles = loaded
        .as_ref()
        .map(|cfg| cfg.analysis)
        .unwrap_or_default();
    let emit = |rendered: String| {
        if !cli.quiet {
            println!("{rendered}");
        }
    };

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let data = JsonFileSource.fetch(&cmd.input)?;
            let toggles = AnalysisToggles {
                traditional_seo: base_toggles.traditional_seo && !cmd.no_seo,
                geo: base_toggles.geo && !cmd.no_geo,
                ai_visibility: base_toggles.ai_visibility && !cmd.no_visibility,
                content_suggestions: base_toggles.content_suggestions && !cmd.no_suggestions,
            };
            let url = cmd.url.unwrap_or_else(|| cmd.input.clone());
            let new_report = analyze::audit(&url, &data, &toggles);

            let stored = if cmd.save {
                report_store(loaded.as_ref()).create(new_report)?
            } else {
                MemoryStore::new().create(new_report)?
            };

            let format = output_format(cmd.format, loaded.as_ref());
            emit(report::render(&stored, format)?);
            Ok(analysis_exit_code(&stored))
        }
        cli::Commands::Visibility(cmd) => {
            let data = JsonFileSource.fetch(&cmd.input)?;
            let visibility = analyze::analyze_ai_platform_visibility(&data);
            let format = output_format(cmd.format, loaded.as_ref());
            emit(report::render_visibility(&visibility, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Suggest(cmd) => {
            let data = JsonFileSource.fetch(&cmd.input)?;
            let ai_score = match cmd.ai_score {
                Some(score) => score,
                None => analyze::analyze_geo(&data).score,
            };
            let suggestions = analyze::generate_content_suggestions(&data, ai_score);
            let format = output_format(cmd.format, loaded.as_ref());
            emit(report::render_suggestions(&suggestions, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Compare(cmd) => {
            let data1 = JsonFileSource.fetch(&cmd.input1)?;
            let data2 = JsonFileSource.fetch(&cmd.input2)?;
            let url1 = cmd.url1.unwrap_or_else(|| cmd.input1.clone());
            let url2 = cmd.url2.unwrap_or_else(|| cmd.input2.clone());

            let mut store = MemoryStore::new();
            let report1 = store.create(analyze::audit(&url1, &data1, &base_toggles))?;
            let report2 = store.create(analyze::audit(&url2, &data2, &base_toggles))?;

            let visibility = cmd.with_visibility.then(|| {
                (
                    analyze::analyze_ai_platform_visibility(&data1),
                    analyze::analyze_ai_platform_visibility(&data2),
                )
            });
            let result = analyze::compare_websites(
                &data1,
                &report1,
                &data2,
                &report2,
                visibility.as_ref().map(|(first, second)| (first, second)),
            );

            let format = output_format(cmd.format, loaded.as_ref());
            emit(report::render_comparison(&result, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cmd) => {
            let store = report_store(loaded.as_ref());
            let format = output_format(cmd.format, loaded.as_ref());

            if let Some(id) = cmd.id {
                let found = store
                    .get_by_id(&id)?
                    .ok_or_else(|| AuditError::ReportNotFound(id.clone()))?;
                emit(report::render(&found, format)?);
                return Ok(exit_code::SUCCESS);
            }
            if let Some(url) = cmd.url {
                let found = store
                    .get_by_url(&url)?
                    .ok_or_else(|| AuditError::ReportNotFound(url.clone()))?;
                emit(report::render(&found, format)?);
                return Ok(exit_code::SUCCESS);
            }

            let reports = store.get_all()?;
            match format {
                OutputFormat::Json => emit(report::json::to_json(&reports)?),
                OutputFormat::Md | OutputFormat::Sarif => {
                    if reports.is_empty() {
                        emit("history: no stored reports".to_string());
                    } else {
                        let lines = reports
                            .iter()
                            .map(|stored| {
                                format!(
                                    "- {} {} {} (SEO {}, AI {})",
                                    stored.created_at.to_rfc3339(),
                                    stored.id,
                                    stored.url,
                                    stored.seo_score,
                                    stored.ai_score
                                )
                            })
                            .collect::<Vec<_>>();
                        emit(lines.join("\n"));
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
