//! todoist-rotate CLI — advances rotating tasks after they are completed.

use clap::{Parser, Subcommand};
use todoist_rotation::api::http::HttpApi;
use todoist_rotation::config::Config;
use todoist_rotation::pipeline::{self, RunOptions, RunSummary};
use todoist_rotation::readers;
use todoist_rotation::rotation;
use todoist_rotation::telemetry::{TelemetryConfig, init_telemetry};

#[derive(Parser)]
#[command(
    name = "todoist-rotate",
    about = "Rotate recurring Todoist task text on completion"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read recent completions and rotate the affected tasks (default)
    Run {
        /// Print the planned updates without writing them
        #[arg(long)]
        dry_run: bool,
    },
    /// List rotation notes and how they parse
    Notes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env()?;

    let _guard = init_telemetry(TelemetryConfig {
        endpoint: config.otel_endpoint.clone(),
        service_name: "todoist-rotation".to_string(),
        default_filter: config.log_level.clone(),
    })?;

    let api = HttpApi::from_config(&config);

    match cli.command.unwrap_or(Command::Run { dry_run: false }) {
        Command::Run { dry_run } => cmd_run(&api, dry_run).await,
        Command::Notes => cmd_notes(&api).await,
    }
}

async fn cmd_run(api: &HttpApi, dry_run: bool) -> anyhow::Result<()> {
    let summary = pipeline::run(api, RunOptions { dry_run }).await?;
    print_summary(&summary, dry_run);
    Ok(())
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    if summary.updates.is_empty() {
        println!(
            "No updates ({} completion(s), {} unchanged since completion).",
            summary.completions, summary.unchanged
        );
        return;
    }

    println!("{}", updates_heading(summary, dry_run));
    for update in &summary.updates {
        println!("  {update}");
    }

    if let Some(ref report) = summary.write {
        println!(
            "\n{} submitted, {} ok, {} failed",
            report.submitted,
            report.succeeded,
            report.failed.len()
        );
        for failure in &report.failed {
            println!("  task {} failed: {}", failure.task_id, failure.status);
        }
    }
}

fn updates_heading(summary: &RunSummary, dry_run: bool) -> &'static str {
    match (&summary.write, dry_run) {
        (Some(_), _) => "Performed updates:",
        (None, true) => "Would perform updates:",
        (None, false) => "Will perform updates:",
    }
}

async fn cmd_notes(api: &HttpApi) -> anyhow::Result<()> {
    let notes = readers::read_rotation_notes(api).await?;
    if notes.is_empty() {
        println!("No rotation notes found.");
        return Ok(());
    }

    let mut notes: Vec<_> = notes.into_values().collect();
    notes.sort_by_key(|note| note.item_id);

    for note in &notes {
        match rotation::parse_rotation_note(note) {
            Ok(parsed) => {
                println!("Task {} ({} entries):", note.item_id, parsed.len());
                for entry in parsed.entries() {
                    println!("  - {entry}");
                }
            }
            Err(e) => println!("Task {}: {e}", note.item_id),
        }
    }

    println!("\n{} rotation note(s)", notes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoist_rotation::model::{TaskId, TaskUpdate};
    use todoist_rotation::updater::WriteReport;

    fn planned() -> RunSummary {
        RunSummary {
            updates: vec![TaskUpdate {
                task_id: TaskId(1),
                content: "B".to_string(),
            }],
            ..RunSummary::default()
        }
    }

    #[test]
    fn heading_reflects_whether_the_write_happened() {
        let mut summary = planned();
        assert_eq!(updates_heading(&summary, true), "Would perform updates:");
        assert_eq!(updates_heading(&summary, false), "Will perform updates:");

        summary.write = Some(WriteReport {
            submitted: 1,
            succeeded: 1,
            failed: Vec::new(),
        });
        assert_eq!(updates_heading(&summary, false), "Performed updates:");
    }
}
