use crate::agents::command_runner::{CommandRunner, SystemCommandRunner};
use crate::agents::update::{
    CheckReport, InteractiveUpdater, UpdateInteraction, UpdateResult, UpdateSummary,
};
use crate::agents::{CordovaAgent, ProjectScannerAgent, UpdateChecker};
use crate::config::ToolConfig;
use crate::cordova::TextListParser;
use crate::error::Result;
use crate::repository::{DefaultVersionStrategy, RegistryFactory};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

/// What a session found and did
#[derive(Debug)]
pub struct SessionOutcome {
    pub report: CheckReport,
    pub summary: UpdateSummary,
}

/// Execute the check-and-update workflow against the real CLIs
pub fn execute_update<P: AsRef<Path>>(project_path: P, config: &ToolConfig) -> Result<()> {
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner);
    let mut interaction = UpdateInteraction::stdio();
    let outcome = run_session(project_path.as_ref(), config, runner, &mut interaction)?;
    tracing::debug!(
        checked = outcome.report.results.len(),
        updated = outcome.summary.updated.len(),
        "session finished"
    );
    Ok(())
}

/// Validate the project, check every plugin, print the report and offer
/// each available update.
pub fn run_session<R: BufRead, W: Write>(
    project_path: &Path,
    config: &ToolConfig,
    runner: Arc<dyn CommandRunner>,
    interaction: &mut UpdateInteraction<R, W>,
) -> Result<SessionOutcome> {
    println!("{}", "Checking Cordova plugins for updates...".cyan().bold());

    // Step 1: Validate project structure
    println!("\n{}", "1. Validating project structure...".yellow());
    let scanner = ProjectScannerAgent::new(project_path);
    let project_info = scanner.validate()?;
    println!(
        "{}",
        format!(
            "✓ Cordova project found ({})",
            project_info.manifest_path.display()
        )
        .green()
    );

    // Step 2: Compare installed plugins with the registry
    println!(
        "\n{}",
        "2. Checking installed plugins against the npm registry...".yellow()
    );
    let cordova = CordovaAgent::new(
        runner.clone(),
        config.cordova_bin.as_str(),
        &project_info.project_path,
    );
    let checker = UpdateChecker::new(
        RegistryFactory::create_npm(runner, config, &project_info.project_path),
        Arc::new(TextListParser),
        DefaultVersionStrategy::shared(),
    );
    let report = checker.check(&cordova)?;
    println!("{}", "✓ Check completed".green());

    print_report(&mut io::stdout().lock(), &report)?;

    let outdated = report.outdated();
    if outdated.is_empty() {
        return Ok(SessionOutcome {
            report,
            summary: UpdateSummary::default(),
        });
    }

    // Step 3: Interactive updates
    println!("\n{}", "3. Updating plugins...".yellow());
    let summary = InteractiveUpdater::new(&cordova, interaction).apply(&outdated)?;
    print_summary(&mut io::stdout().lock(), &summary)?;

    Ok(SessionOutcome { report, summary })
}

fn print_report<O: Write>(out: &mut O, report: &CheckReport) -> io::Result<()> {
    if report.results.is_empty() {
        writeln!(out, "\n{}", "No plugins installed".yellow())?;
    } else {
        writeln!(out, "\n{}", "📦 Installed plugins:".cyan().bold())?;
        for result in &report.results {
            writeln!(out, "  • {}", render_result(result))?;
        }
    }

    if report.is_up_to_date() {
        writeln!(out, "\n{}", "✨ All plugins are up to date!".green().bold())?;
    } else {
        writeln!(
            out,
            "\n{}",
            format!("Found {} update(s)", report.total_updates()).yellow()
        )?;
    }

    let failures = report.failures().len();
    if failures > 0 {
        writeln!(
            out,
            "{}",
            format!("   ({failures} plugin(s) could not be checked)").dimmed()
        )?;
    }

    Ok(())
}

fn render_result(result: &UpdateResult) -> String {
    let name = result.plugin.white().bold();

    if let Some(error) = &result.error {
        return format!(
            "{} {} {}",
            name,
            result.current_version.dimmed(),
            format!("✗ {error}").red()
        );
    }

    let latest = result.latest_version.as_deref().unwrap_or_default();
    if result.has_update {
        format!(
            "{} {} → {} ({})",
            name,
            result.current_version.red(),
            latest.green().bold(),
            "update available".yellow()
        )
    } else {
        format!(
            "{} {} ({})",
            name,
            result.current_version.green(),
            "up to date".dimmed()
        )
    }
}

fn print_summary<O: Write>(out: &mut O, summary: &UpdateSummary) -> io::Result<()> {
    if summary.attempted() == 0 {
        return writeln!(out, "\n{}", "No updates were applied".yellow());
    }

    writeln!(out, "\n{}", "Update Summary:".cyan().bold())?;
    let line = format!(
        "{} updated, {} failed, {} skipped",
        summary.updated.len(),
        summary.failed.len(),
        summary.skipped.len()
    );
    if summary.failed.is_empty() {
        writeln!(out, "{}", line.green())?;
    } else {
        writeln!(out, "{}", line.red())?;
        for (plugin, error) in &summary.failed {
            writeln!(out, "  • {} {}", plugin.white().bold(), error.dimmed())?;
        }
    }

    Ok(())
}
