use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use pointwatch::clearance::{
    default_term, paginate, Department, EmployeeSwtdReport, EmployeeSwtdView, PointsOverview,
    PointsOverviewSummary, Term, ValidationStatus,
};
use pointwatch::config::{AppConfig, ConfigError};
use pointwatch::dataset::{records_from_csv, Dataset, DatasetError};
use pointwatch::error::AppError;
use pointwatch::telemetry::{self, TelemetryError};

mod sample;

#[derive(Parser, Debug)]
#[command(
    name = "pointwatch",
    about = "Derive training-point compliance reports from exported dashboard snapshots",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Points overview for a term, optionally scoped to a department
    Overview(OverviewArgs),
    /// One employee's submissions and term standing
    Employee(EmployeeArgs),
}

#[derive(Args, Debug)]
struct SnapshotArgs {
    /// JSON snapshot exported from the backend; omit for the built-in sample
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Merge submission rows from a CSV export on top of the snapshot
    #[arg(long)]
    records_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct OverviewArgs {
    #[command(flatten)]
    snapshot: SnapshotArgs,
    /// Department id to scope the overview to
    #[arg(long)]
    department: Option<i64>,
    /// Term id; defaults to the ongoing term
    #[arg(long)]
    term: Option<i64>,
    /// Search by ID number, firstname, or lastname
    #[arg(long, default_value = "")]
    search: String,
    /// Keep only employees with records in this status, busiest first
    #[arg(long, value_parser = parse_status)]
    status: Option<ValidationStatus>,
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Rows per page; overrides POINTWATCH_PAGE_SIZE (0 disables paging)
    #[arg(long)]
    page_size: Option<usize>,
    /// Also write the full overview to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EmployeeArgs {
    #[command(flatten)]
    snapshot: SnapshotArgs,
    /// Employee id
    #[arg(long)]
    id: i64,
    /// Term id; omit for the all-terms view
    #[arg(long)]
    term: Option<i64>,
    #[arg(long, value_parser = parse_status)]
    status: Option<ValidationStatus>,
    #[arg(long, default_value = "")]
    search: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Overview(args) => run_overview(args, &config),
        Command::Employee(args) => run_employee(args),
    }
}

fn parse_status(raw: &str) -> Result<ValidationStatus, String> {
    raw.parse::<ValidationStatus>().map_err(|err| err.to_string())
}

fn load_dataset(args: &SnapshotArgs) -> Result<Dataset, CliError> {
    let mut dataset = match &args.dataset {
        Some(path) => Dataset::from_json_path(path).map_err(AppError::from)?,
        None => {
            info!("no snapshot provided, using the built-in sample campus");
            sample::dataset()
        }
    };

    if let Some(path) = &args.records_csv {
        let file = File::open(path).map_err(AppError::from)?;
        let imported = records_from_csv(BufReader::new(file)).map_err(AppError::from)?;
        info!(rows = imported.len(), "merged CSV submission export");
        dataset.records.extend(imported);
    }

    Ok(dataset)
}

fn resolve_term(dataset: &Dataset, term_id: Option<i64>) -> Result<Term, CliError> {
    match term_id {
        Some(id) => dataset
            .term(id)
            .cloned()
            .ok_or(CliError::UnknownTerm(id)),
        None => default_term(&dataset.terms)
            .cloned()
            .ok_or(CliError::NoOngoingTerm),
    }
}

fn run_overview(args: OverviewArgs, config: &AppConfig) -> Result<(), CliError> {
    let dataset = load_dataset(&args.snapshot)?;

    let department: Option<Department> = match args.department {
        Some(id) => Some(
            dataset
                .department(id)
                .cloned()
                .ok_or(CliError::UnknownDepartment(id))?,
        ),
        None => None,
    };
    let term = resolve_term(&dataset, args.term)?;

    let overview = PointsOverview::build(
        &dataset,
        department.as_ref(),
        &term,
        &args.search,
        args.status,
    );
    let summary = overview.summary(&term, department.as_ref());

    let page_size = args.page_size.unwrap_or(config.listing.page_size);
    render_overview(&summary, page_size, args.page);

    if let Some(path) = &args.csv {
        write_overview_csv(path, &summary)?;
    }

    Ok(())
}

fn run_employee(args: EmployeeArgs) -> Result<(), CliError> {
    let dataset = load_dataset(&args.snapshot)?;

    let term: Option<Term> = match args.term {
        Some(id) => Some(
            dataset
                .term(id)
                .cloned()
                .ok_or(CliError::UnknownTerm(id))?,
        ),
        None => None,
    };

    let report =
        EmployeeSwtdReport::build(&dataset, args.id, term.as_ref(), args.status, &args.search)
            .ok_or(CliError::UnknownEmployee(args.id))?;

    render_employee(&report.to_view());
    Ok(())
}

fn render_overview(summary: &PointsOverviewSummary, page_size: usize, page: usize) {
    println!("Points Overview — {}", summary.term_name);
    if let Some(name) = &summary.department_name {
        println!("Department: {name}");
    }

    let rows = paginate(&summary.rows, page_size, page);
    if rows.is_empty() {
        println!("\nNo employees found.");
    } else {
        println!();
        for row in rows {
            println!(
                "- {} | {} | {} / {} pts | {}",
                row.id_label, row.name, row.valid_points, row.required_points, row.status_label
            );
        }
    }

    let totals = &summary.totals;
    println!(
        "\nTotal: {} employees — {} cleared, {} not cleared ({}% cleared)",
        totals.total_employees, totals.cleared, totals.not_cleared, totals.percent_cleared
    );

    if page_size > 0 && !summary.rows.is_empty() {
        let total_pages = (summary.rows.len() + page_size - 1) / page_size;
        println!("Page {} of {}", page.clamp(1, total_pages), total_pages);
    }
}

fn render_employee(view: &EmployeeSwtdView) {
    println!("{}'s SWTDs", view.name);
    if let Some(dept) = &view.department {
        println!("Department: {dept}");
    }

    match (&view.term_name, &view.status) {
        (Some(term_name), Some(status)) => {
            println!("Term: {term_name}");
            println!(
                "Points: {} / {}",
                status.valid_points, status.required_points
            );
            if let Some(label) = view.status_label {
                println!("Status: {label}");
            }
            if status.pending_count > 0 || status.rejected_count > 0 {
                println!(
                    "Awaiting review: {} — rejected: {}",
                    status.pending_count, status.rejected_count
                );
            }
        }
        _ => {
            if let Some(balance) = view.point_balance {
                println!("Point Balance: {balance}");
            }
        }
    }

    if view.records.is_empty() {
        println!("\nNo records submitted.");
        return;
    }

    println!();
    for record in &view.records {
        println!(
            "- #{} {} | {} pts | {}",
            record.id, record.title, record.points, record.status_label
        );
    }
}

fn write_overview_csv(path: &Path, summary: &PointsOverviewSummary) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|err| AppError::from(DatasetError::from(err)))?;

    for row in &summary.rows {
        writer
            .serialize(row)
            .map_err(|err| AppError::from(DatasetError::from(err)))?;
    }
    writer.flush().map_err(AppError::from)?;

    info!(path = %path.display(), rows = summary.rows.len(), "overview exported");
    Ok(())
}

#[derive(Debug)]
enum CliError {
    App(AppError),
    UnknownTerm(i64),
    UnknownDepartment(i64),
    UnknownEmployee(i64),
    NoOngoingTerm,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::App(err) => write!(f, "{err}"),
            CliError::UnknownTerm(id) => write!(f, "no term with id {id} in the snapshot"),
            CliError::UnknownDepartment(id) => {
                write!(f, "no department with id {id} in the snapshot")
            }
            CliError::UnknownEmployee(id) => {
                write!(f, "no employee with id {id} in the snapshot")
            }
            CliError::NoOngoingTerm => {
                write!(f, "the snapshot has no ongoing term; pass --term")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::App(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AppError> for CliError {
    fn from(value: AppError) -> Self {
        Self::App(value)
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::App(AppError::from(value))
    }
}

impl From<TelemetryError> for CliError {
    fn from(value: TelemetryError) -> Self {
        Self::App(AppError::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parser_is_case_insensitive() {
        assert_eq!(
            parse_status("rejected").expect("parses"),
            ValidationStatus::Rejected
        );
        assert!(parse_status("maybe").is_err());
    }

    #[test]
    fn sample_campus_has_an_ongoing_term() {
        let dataset = sample::dataset();
        let term = resolve_term(&dataset, None).expect("ongoing term present");
        assert!(term.is_ongoing);
    }

    #[test]
    fn sample_overview_is_internally_consistent() {
        let dataset = sample::dataset();
        let term = resolve_term(&dataset, None).expect("ongoing term present");
        let overview = PointsOverview::build(&dataset, None, &term, "", None);
        let totals = overview.totals();

        assert_eq!(totals.total_employees, overview.standings.len());
        assert_eq!(totals.cleared + totals.not_cleared, totals.total_employees);
        assert!(totals.cleared >= 1, "sample should include a cleared employee");
    }

    #[test]
    fn unknown_lookups_are_reported_not_panicked() {
        let dataset = sample::dataset();
        assert!(matches!(
            resolve_term(&dataset, Some(999)),
            Err(CliError::UnknownTerm(999))
        ));
    }
}
