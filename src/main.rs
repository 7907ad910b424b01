use career_hub::config::AppConfig;
use career_hub::error::AppError;
use career_hub::telemetry;
use career_hub::workflows::placement::domain::{
    FilterPrefs, InternshipLevel, Role, StaffProfile, StudentProfile, User, UserId,
};
use career_hub::workflows::placement::lifecycle::{
    accept_placement, apply, create_internship, register_company_rep, review_application,
    review_company_rep, review_internship, InternshipDraft,
};
use career_hub::workflows::placement::{listing_views, open_listings_for, HubStore, PlacementError};
use career_hub::workflows::snapshot::SnapshotStore;
use chrono::{Duration, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Career Hub",
    about = "Track internship postings, applications, and placements from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scripted placement walkthrough in memory (default command)
    Demo(DemoArgs),
    /// Print the postings a student can apply to right now
    Listings(ListingsArgs),
}

#[derive(Args, Debug, Default)]
struct DemoArgs {
    /// Persist the final walkthrough state as CSV snapshots here
    #[arg(long)]
    save_to: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ListingsArgs {
    /// Student account ID, e.g. S1
    #[arg(long)]
    student: String,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Narrow by company name
    #[arg(long, default_value = "")]
    company: String,
    /// Narrow by level label (Basic, Intermediate, Advanced)
    #[arg(long, default_value = "")]
    level: String,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command.unwrap_or_else(|| Command::Demo(DemoArgs::default())) {
        Command::Demo(args) => run_demo(args),
        Command::Listings(args) => run_listings(&config, args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_listings(config: &AppConfig, args: ListingsArgs) -> Result<(), AppError> {
    let store = SnapshotStore::new(config.data_dir.clone()).load_all()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let student_id = UserId(args.student);
    let student = store
        .user(&student_id)
        .ok_or(AppError::Placement(PlacementError::NotFound))?;

    let criteria = FilterPrefs {
        company: args.company,
        level: args.level,
        ..Default::default()
    };
    let views = listing_views(&open_listings_for(&store, student, today, &criteria));

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "student": student_id.0,
            "today": today,
            "listings": views,
        }))
        .map_err(std::io::Error::other)?
    );
    Ok(())
}

/// Walks one posting from creation through approval, applications, and
/// placement confirmation, printing the student's view at each step.
fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = Local::now().date_naive();
    let mut store = HubStore::new();

    store.put_user(User::new(
        UserId("T1".to_string()),
        "Taylor",
        "password",
        Role::Staff(StaffProfile {
            department: "Career Center".to_string(),
        }),
    ));
    store.put_user(User::new(
        UserId("S1".to_string()),
        "Ana",
        "password",
        Role::Student(StudentProfile {
            year: 3,
            major: "CSC".to_string(),
        }),
    ));
    store.put_user(User::new(
        UserId("S2".to_string()),
        "Ben",
        "password",
        Role::Student(StudentProfile {
            year: 3,
            major: "CSC".to_string(),
        }),
    ));

    let staff = UserId("T1".to_string());
    let rep = UserId("C1".to_string());
    register_company_rep(
        &mut store,
        rep.clone(),
        "Casey",
        "password",
        "Initech",
        "Engineering",
        "Manager",
    )?;
    review_company_rep(&mut store, &staff, &rep, true)?;
    println!("Company rep C1 registered and approved");

    let internship_id = create_internship(
        &mut store,
        &rep,
        InternshipDraft {
            title: "QA Intern".to_string(),
            description: "Test automation for the billing platform".to_string(),
            level: InternshipLevel::Intermediate,
            preferred_major: "CSC".to_string(),
            open_date: Some(today - Duration::days(7)),
            close_date: Some(today + Duration::days(60)),
            slots: 1,
        },
    )?;
    review_internship(&mut store, &staff, &internship_id, true)?;
    println!("Posting {} approved and visible", internship_id.0);

    render_student_view(&store, "S1", today);

    let first = apply(&mut store, &UserId("S1".to_string()), &internship_id, today)?;
    let second = apply(&mut store, &UserId("S2".to_string()), &internship_id, today)?;
    review_application(&mut store, &rep, &first, true)?;
    review_application(&mut store, &rep, &second, true)?;
    println!("Both applications marked Successful by the rep");

    accept_placement(&mut store, &UserId("S1".to_string()), &first)?;
    println!("S1 accepted the placement; the single slot is now filled");

    render_student_view(&store, "S2", today);

    if let Some(dir) = args.save_to {
        SnapshotStore::new(dir.clone()).save_all(&store)?;
        println!("Snapshot written to {}", dir.display());
    }

    info!("demo walkthrough complete");
    Ok(())
}

fn render_student_view(store: &HubStore, student: &str, today: NaiveDate) {
    let student_id = UserId(student.to_string());
    let views = store
        .user(&student_id)
        .map(|user| listing_views(&open_listings_for(store, user, today, &FilterPrefs::default())))
        .unwrap_or_default();

    match serde_json::to_string_pretty(&views) {
        Ok(rendered) => println!("Open listings for {student}:\n{rendered}"),
        Err(err) => eprintln!("failed to render listings: {err}"),
    }
}
