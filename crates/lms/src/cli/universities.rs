//! the `universities` subcommand - manage universities

use clap::{Args, Subcommand};
use color_eyre::eyre::{Context, Result, bail};
use lms_db::Database;
use lms_types::{University, UniversityStatus};

use super::DbArgs;

/// manage universities
#[derive(Subcommand, Debug)]
pub enum UniversitiesCommand {
    /// create a new university
    Create(CreateUniversityArgs),

    /// list all universities
    List(ListUniversitiesArgs),
}

/// create a new university
#[derive(Args, Debug)]
pub struct CreateUniversityArgs {
    #[command(flatten)]
    db: DbArgs,

    /// university name
    name: String,

    /// year of establishment
    #[arg(long, default_value = "")]
    established: String,

    /// postal address
    #[arg(long, default_value = "")]
    address: String,

    /// name of the administrator
    #[arg(long, default_value = "")]
    admin_name: String,

    /// create the university as inactive
    #[arg(long, default_value_t = false)]
    inactive: bool,
}

/// list universities
#[derive(Args, Debug)]
pub struct ListUniversitiesArgs {
    #[command(flatten)]
    db: DbArgs,

    /// output format (table, json)
    #[arg(short, long, default_value = "table")]
    output: String,
}

impl UniversitiesCommand {
    /// run the universities command
    pub async fn run(self) -> Result<()> {
        match self {
            UniversitiesCommand::Create(args) => create_university(args).await,
            UniversitiesCommand::List(args) => list_universities(args).await,
        }
    }
}

async fn create_university(args: CreateUniversityArgs) -> Result<()> {
    let db = args.db.connect().await?;

    if db
        .get_university_by_name(&args.name)
        .await
        .context("failed to check for existing university")?
        .is_some()
    {
        bail!("university '{}' already exists", args.name);
    }

    let mut university = University::new(args.name);
    university.established_year = args.established;
    university.address = args.address;
    university.admin_name = args.admin_name;
    if args.inactive {
        university.status = UniversityStatus::Inactive;
    }

    let created = db
        .create_university(&university)
        .await
        .context("failed to create university")?;

    println!("Created university:");
    println!("  ID:      {}", created.id);
    println!("  Name:    {}", created.name);
    println!("  Status:  {}", created.status);

    Ok(())
}

async fn list_universities(args: ListUniversitiesArgs) -> Result<()> {
    let db = args.db.connect().await?;

    let universities = db
        .list_universities()
        .await
        .context("failed to list universities")?;

    if args.output == "json" {
        println!("{}", serde_json::to_string_pretty(&universities)?);
        return Ok(());
    }

    if universities.is_empty() {
        println!("No universities found.");
        return Ok(());
    }

    println!(
        "{:<6} {:<35} {:<6} {:<10} {:<25}",
        "ID", "NAME", "EST.", "STATUS", "ADMIN"
    );
    println!("{}", "-".repeat(85));

    for university in universities {
        println!(
            "{:<6} {:<35} {:<6} {:<10} {:<25}",
            university.id.0,
            university.name,
            university.established_year,
            university.status.as_str(),
            university.admin_name,
        );
    }

    Ok(())
}
