mod brief_input;
mod cli;
mod output;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use reelplan_core::engine::core::settings::default_settings_dir;
use reelplan_core::engine::ipc::validate_brief;
use reelplan_core::{init_logging, AppSettings, GenerationOutcome, PlanSession, SettingsManager};

use brief_input::{ensure_ready, resolve_brief};
use cli::{BriefArgs, Cli, Command, OutputFormat, SettingsAction};
use output::{render_plans, render_trends, to_json, PlansDocument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_dir.as_deref(), cli.verbose);

    let settings_dir = cli.settings_dir.clone().unwrap_or_else(default_settings_dir);
    let manager = SettingsManager::new(settings_dir);
    debug!("Using settings at {:?}", manager.settings_path());

    match cli.command {
        Command::Generate {
            brief,
            format,
            no_delay,
        } => {
            let settings = manager.load();
            let format = format.unwrap_or_else(|| OutputFormat::from_setting(&settings.output.format));
            run_generate(&brief, &settings, format, no_delay).await
        }
        Command::Trends => {
            print!("{}", render_trends());
            Ok(())
        }
        Command::Validate { brief } => run_validate(&brief, &manager.load()),
        Command::Settings { action } => run_settings(action, &manager),
    }
}

async fn run_generate(
    args: &BriefArgs,
    settings: &AppSettings,
    format: OutputFormat,
    no_delay: bool,
) -> anyhow::Result<()> {
    let brief = resolve_brief(args, settings.default_brief())?;
    ensure_ready(&brief)?;

    let delay = if no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(settings.generation.render_delay_ms)
    };
    let session = PlanSession::with_defaults(settings.default_brief(), delay);
    session.update_brief(brief.clone()).await;

    info!("Rendering beats...");
    let plans = match session.generate().await? {
        GenerationOutcome::Published(plans) => plans,
        GenerationOutcome::Superseded => anyhow::bail!("Generation was superseded"),
    };

    match format {
        OutputFormat::Text => print!("{}", render_plans(&brief, &plans)),
        OutputFormat::Json => {
            let document = PlansDocument {
                brief: &brief,
                plans: &plans,
            };
            let json = to_json(&document, settings.output.pretty_json)
                .context("Failed to serialize plans")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn run_validate(args: &BriefArgs, settings: &AppSettings) -> anyhow::Result<()> {
    let brief = resolve_brief(args, settings.default_brief())?;
    let payload = validate_brief(brief.clone());

    println!("Trend notes: {}", payload.trend_hint);
    ensure_ready(&brief)?;
    println!("Brief is ready to generate.");
    Ok(())
}

fn run_settings(action: SettingsAction, manager: &SettingsManager) -> anyhow::Result<()> {
    match action {
        SettingsAction::Show => {
            let settings = manager.load();
            println!("{}", to_json(&settings, true)?);
        }
        SettingsAction::Reset => {
            let settings = manager.reset().context("Failed to reset settings")?;
            println!("{}", to_json(&settings, true)?);
        }
        SettingsAction::Path => println!("{}", manager.settings_path().display()),
    }
    Ok(())
}
