//! `conform`: file-organization convention checker.
//!
//! Exit codes: 0 when no error-level violations, 1 when there are, 2 on
//! configuration or fatal errors.

mod cli;

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use conform_analysis::engine::ConventionEngine;
use conform_analysis::reporters::ReportFormat;
use conform_core::errors::ConfigError;
use conform_core::{ConformConfig, ConformErrorCode, Preset, RuleId};

use cli::{CheckArgs, Cli, Commands};

const EXIT_CLEAN: u8 = 0;
const EXIT_VIOLATIONS: u8 = 1;
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    conform_core::tracing::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Rules => print_rules().map(|()| EXIT_CLEAN),
        Commands::Schema => print_schema().map(|()| EXIT_CLEAN),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            match e.downcast_ref::<ConfigError>() {
                Some(config_err) => eprintln!("error[{}]: {e:#}", config_err.error_code()),
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run_check(args: &CheckArgs) -> Result<u8> {
    let format = ReportFormat::parse_str(&args.format).with_context(|| {
        format!(
            "unknown format {:?} (expected one of: {})",
            args.format,
            ReportFormat::all()
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;
    let config = resolve_config(args)?;
    let engine = ConventionEngine::from_config(&config).context("invalid configuration")?;
    tracing::debug!(rules = ?engine.rules(), "engine ready");

    let report = engine
        .run(&args.path)
        .with_context(|| format!("failed to check {}", args.path.display()))?;

    let output = format.reporter().generate(&report)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(if report.has_errors() {
        EXIT_VIOLATIONS
    } else {
        EXIT_CLEAN
    })
}

/// Config file (explicit or discovered), then preset, then `--rule` filtering.
fn resolve_config(args: &CheckArgs) -> Result<ConformConfig> {
    let mut config = match &args.config {
        Some(path) => ConformConfig::load(path)?,
        None => {
            // Absolute, so the walk continues past the working directory.
            let start = args.path.canonicalize().unwrap_or_else(|_| args.path.clone());
            let (config, found) = ConformConfig::discover(&start)?;
            if let Some(found) = found {
                tracing::info!(path = %found.display(), "using config file");
            }
            config
        }
    };

    if let Some(name) = &args.preset {
        let Some(preset) = Preset::parse_str(name) else {
            bail!(ConfigError::UnknownPreset(name.clone()));
        };
        tracing::debug!(preset = preset.name(), "applying preset");
        config.apply_preset(preset);
    }

    if !args.rules.is_empty() {
        let mut selected = Vec::with_capacity(args.rules.len());
        for name in &args.rules {
            match RuleId::parse_str(name) {
                Some(rule) => selected.push(rule),
                None => bail!(ConfigError::UnknownRule(name.clone())),
            }
        }
        config.rules.retain_only(&selected);
    }

    Ok(config)
}

fn print_rules() -> Result<()> {
    for rule in RuleId::all() {
        println!("{:<24} {}", rule.name(), rule.description());
    }
    Ok(())
}

fn print_schema() -> Result<()> {
    let schema = ConformConfig::json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
