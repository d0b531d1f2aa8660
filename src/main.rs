// Entry point and high-level CLI flow.
//
// - With no subcommand, run one render pass from the command-line flags,
//   print the dashboard and write the report.
// - `interactive` opens a menu where each parameter change reruns the whole
//   pipeline against a fresh batch.
use chrono::{Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use labor_dashboard::config::AppConfig;
use labor_dashboard::dashboard::{
    render, DashboardParams, DashboardView, CONTRACT_STEP, DEFAULT_CONTRACTS, MAX_CONTRACTS,
    MIN_CONTRACTS,
};
use labor_dashboard::error::{DashboardError, Result};
use labor_dashboard::filter::FilterSet;
use labor_dashboard::{output, telemetry, util};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

const DEFAULT_PREVIEW_ROWS: usize = 10;

#[derive(Parser, Debug)]
#[command(
    name = "labor-dashboard",
    about = "Synthetic labor supply chain contract analytics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Menu-driven session; every change regenerates the dashboard
    Interactive,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Number of contracts to generate
    #[arg(long, default_value_t = DEFAULT_CONTRACTS)]
    contracts: usize,
    /// City to include (repeatable); defaults to Mumbai and Pune
    #[arg(long = "city", value_name = "CITY")]
    cities: Vec<String>,
    /// Status to include (repeatable); defaults to Active
    #[arg(long = "status", value_name = "STATUS")]
    statuses: Vec<String>,
    /// Include every city
    #[arg(long, conflicts_with = "cities")]
    all_cities: bool,
    /// Include every status
    #[arg(long, conflicts_with = "statuses")]
    all_statuses: bool,
    /// Seed the random source for a reproducible batch
    #[arg(long)]
    seed: Option<u64>,
    /// Directory the report is written to
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Number of contract rows shown in the console preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview_rows: usize,
    /// Also export the filtered contracts as CSV
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,
    /// Also export the summary as JSON
    #[arg(long, value_name = "PATH")]
    export_json: Option<PathBuf>,
    /// Skip writing the text report
    #[arg(long)]
    no_report: bool,
}

impl RenderArgs {
    fn params(&self) -> Result<DashboardParams> {
        let defaults = FilterSet::default();
        let cities = if self.all_cities {
            FilterSet::all().cities
        } else if self.cities.is_empty() {
            defaults.cities
        } else {
            FilterSet::parse_cities(&self.cities)?
        };
        let statuses = if self.all_statuses {
            FilterSet::all().statuses
        } else if self.statuses.is_empty() {
            defaults.statuses
        } else {
            FilterSet::parse_statuses(&self.statuses)?
        };
        Ok(DashboardParams {
            num_contracts: self.contracts,
            filters: FilterSet { cities, statuses },
        })
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Print the dashboard sections in page order.
fn print_view(view: &DashboardView, preview_rows: usize) {
    println!("Labor Supply Chain Intelligence Dashboard");
    println!("AI-driven workforce & contract analytics\n");

    output::preview_table("Key Metrics", None, &view.summary.kpis(), usize::MAX);
    output::preview_table("Contracts by City", None, &view.by_city, usize::MAX);
    output::preview_table("Contracts by Status", None, &view.by_status, usize::MAX);

    let note = format!(
        "{} of {} generated contracts match; showing up to {}",
        util::format_int(view.records.len()),
        util::format_int(view.generated),
        util::format_int(preview_rows)
    );
    output::preview_table("Contract Data", Some(&note), &view.records, preview_rows);
}

fn run_once(args: RenderArgs, config: &AppConfig) -> Result<()> {
    let params = args.params()?;
    let mut rng = make_rng(args.seed.or(config.seed));
    let view = render(&params, &mut rng, now())?;
    print_view(&view, args.preview_rows);

    if let Some(path) = &args.export_csv {
        output::write_csv(path, &view.records)?;
        println!("(Filtered contracts exported to {})", path.display());
    }
    if let Some(path) = &args.export_json {
        output::write_json(path, &view.summary)?;
        println!("(Summary exported to {})", path.display());
    }
    if !args.no_report {
        let dir = args.output_dir.as_deref().unwrap_or(config.output_dir.as_path());
        let path = output::write_report(dir, &view.report)?;
        println!("Report saved to {}", path.display());
    }
    Ok(())
}

/// Read a single line of input after printing `prompt`.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

/// Slider semantics: a multiple of the step within the slider bounds.
fn parse_contract_count(input: &str) -> Result<usize> {
    let n: usize = input
        .parse()
        .map_err(|_| DashboardError::InvalidArgument(format!("'{input}' is not a number")))?;
    if !(MIN_CONTRACTS..=MAX_CONTRACTS).contains(&n) || n % CONTRACT_STEP != 0 {
        return Err(DashboardError::InvalidArgument(format!(
            "choose a multiple of {CONTRACT_STEP} between {MIN_CONTRACTS} and {MAX_CONTRACTS}"
        )));
    }
    Ok(n)
}

/// Comma-separated names; `all` selects everything, an empty line selects nothing.
fn split_selection(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

struct Session {
    params: DashboardParams,
    rng: StdRng,
    preview_rows: usize,
    output_dir: PathBuf,
    // Report text of the pass currently on screen.
    last_report: Option<String>,
}

impl Session {
    fn rerender(&mut self) {
        match render(&self.params, &mut self.rng, now()) {
            Ok(view) => {
                print_view(&view, self.preview_rows);
                self.last_report = Some(view.report);
            }
            Err(e) => {
                error!(error = %e, "render failed");
                eprintln!("Error: {}\n", e);
                self.last_report = None;
            }
        }
    }

    fn set_contracts(&mut self, input: &str) {
        match parse_contract_count(input) {
            Ok(n) => {
                self.params.num_contracts = n;
                self.rerender();
            }
            Err(e) => println!("{}\n", e),
        }
    }

    fn set_cities(&mut self, input: &str) {
        let parsed = if input.eq_ignore_ascii_case("all") {
            Ok(FilterSet::all().cities)
        } else {
            FilterSet::parse_cities(&split_selection(input))
        };
        match parsed {
            Ok(cities) => {
                self.params.filters.cities = cities;
                self.rerender();
            }
            Err(e) => println!("{}\n", e),
        }
    }

    fn set_statuses(&mut self, input: &str) {
        let parsed = if input.eq_ignore_ascii_case("all") {
            Ok(FilterSet::all().statuses)
        } else {
            FilterSet::parse_statuses(&split_selection(input))
        };
        match parsed {
            Ok(statuses) => {
                self.params.filters.statuses = statuses;
                self.rerender();
            }
            Err(e) => println!("{}\n", e),
        }
    }

    fn download(&self) {
        let Some(report) = &self.last_report else {
            println!("Error: nothing rendered yet. Render the dashboard first (option 4).\n");
            return;
        };
        match output::write_report(&self.output_dir, report) {
            Ok(path) => println!("Report saved to {}\n", path.display()),
            Err(e) => eprintln!("Write error: {}\n", e),
        }
    }
}

fn run_interactive(args: RenderArgs, config: &AppConfig) -> Result<()> {
    let mut session = Session {
        params: args.params()?,
        rng: make_rng(args.seed.or(config.seed)),
        preview_rows: args.preview_rows,
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output_dir.clone()),
        last_report: None,
    };
    session.rerender();

    loop {
        println!("Controls:");
        println!(
            "[1] Number of Contracts (current: {})",
            session.params.num_contracts
        );
        println!(
            "[2] Filter by City (current: {})",
            session.params.filters.city_labels().join(", ")
        );
        println!(
            "[3] Filter by Status (current: {})",
            session.params.filters.status_labels().join(", ")
        );
        println!("[4] Render Dashboard");
        println!("[5] Download Report");
        println!("[0] Exit\n");

        let Some(choice) = read_line("Enter choice: ") else {
            break;
        };
        match choice.as_str() {
            "1" => {
                let prompt = format!(
                    "Contracts ({MIN_CONTRACTS}-{MAX_CONTRACTS}, step {CONTRACT_STEP}): "
                );
                if let Some(input) = read_line(&prompt) {
                    session.set_contracts(&input);
                }
            }
            "2" => {
                if let Some(input) = read_line("Cities (comma-separated, or 'all'): ") {
                    session.set_cities(&input);
                }
            }
            "3" => {
                if let Some(input) = read_line("Statuses (comma-separated, or 'all'): ") {
                    session.set_statuses(&input);
                }
            }
            "4" => session.rerender(),
            "5" => session.download(),
            "0" => break,
            _ => println!("Invalid choice. Please enter 0-5.\n"),
        }
    }
    println!("Exiting the program.");
    Ok(())
}

fn run() -> Result<()> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Interactive) => run_interactive(cli.render, &config),
        None => run_once(cli.render, &config),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
