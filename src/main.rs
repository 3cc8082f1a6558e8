//! Prints a JSON validation report for a worker's stored availability.
//!
//! Usage: `availability-editor <worker-id>`
//!
//! Exits with status 1 when the stored week has validation issues.

use std::process::ExitCode;
use std::sync::Arc;

use serde::Serialize;

use availability_editor::adapters::{FileAvailabilityRepository, InMemoryEventBus, TracingNotifier};
use availability_editor::application::{OpenAvailabilityEditorHandler, OpenAvailabilityEditorQuery};
use availability_editor::config::AppConfig;
use availability_editor::domain::availability::{
    AvailabilityEditor, DayAvailability, TimeOfDay, ValidationReport,
};
use availability_editor::domain::foundation::{CommandMetadata, WorkerId};
use availability_editor::telemetry;

#[derive(Debug, Serialize)]
struct Report {
    worker_id: String,
    valid: bool,
    days: Vec<DaySummary>,
    issues: ValidationReport,
}

#[derive(Debug, Serialize)]
struct DaySummary {
    day: &'static str,
    available: bool,
    slots: Vec<String>,
    total_minutes: u32,
}

impl From<&DayAvailability> for DaySummary {
    fn from(day: &DayAvailability) -> Self {
        let slots = day
            .slots
            .iter()
            .map(|s| format!("{}-{}", bound(s.start_time), bound(s.end_time)))
            .collect();
        Self {
            day: day.day_of_week.name(),
            available: day.is_available,
            slots,
            total_minutes: day.total_minutes(),
        }
    }
}

fn bound(time: Option<TimeOfDay>) -> String {
    time.map_or_else(|| "?".to_string(), |t| t.to_string())
}

fn build_report(worker_id: &WorkerId, editor: &AvailabilityEditor) -> Report {
    let issues = editor.validation_report();
    Report {
        worker_id: worker_id.to_string(),
        valid: issues.is_valid(),
        days: editor
            .week()
            .iter(editor.settings().week_start)
            .map(DaySummary::from)
            .collect(),
        issues,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.logging)?;

    let Some(raw_id) = std::env::args().nth(1) else {
        eprintln!("usage: availability-editor <worker-id>");
        return Ok(ExitCode::from(2));
    };
    let worker_id = WorkerId::new(raw_id)?;

    let repository = Arc::new(FileAvailabilityRepository::new(&config.storage.data_dir));
    let handler = OpenAvailabilityEditorHandler::new(
        repository,
        Arc::new(InMemoryEventBus::new()),
        config.editor.settings(),
    );

    let editor = handler
        .handle(
            OpenAvailabilityEditorQuery {
                worker_id: worker_id.clone(),
            },
            CommandMetadata::new(worker_id.clone()).with_source("cli"),
            Arc::new(TracingNotifier::new()),
        )
        .await?;

    let report = build_report(&worker_id, &editor);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
