//! the `admins` subcommand - manage admin accounts

use clap::{Args, Subcommand};
use color_eyre::eyre::{Context, Result, bail};
use lms_db::Database;
use lms_types::Admin;

use super::DbArgs;

/// manage admin accounts
#[derive(Subcommand, Debug)]
pub enum AdminsCommand {
    /// create a new admin
    Create(CreateAdminArgs),

    /// list all admins
    List(ListAdminsArgs),
}

/// create a new admin
#[derive(Args, Debug)]
pub struct CreateAdminArgs {
    #[command(flatten)]
    db: DbArgs,

    /// login email
    email: String,

    /// display name
    name: String,

    /// name of the university this admin manages
    #[arg(long, default_value = "")]
    university: String,
}

/// list admins
#[derive(Args, Debug)]
pub struct ListAdminsArgs {
    #[command(flatten)]
    db: DbArgs,

    /// output format (table, json)
    #[arg(short, long, default_value = "table")]
    output: String,
}

impl AdminsCommand {
    /// run the admins command
    pub async fn run(self) -> Result<()> {
        match self {
            AdminsCommand::Create(args) => create_admin(args).await,
            AdminsCommand::List(args) => list_admins(args).await,
        }
    }
}

async fn create_admin(args: CreateAdminArgs) -> Result<()> {
    if !email_address::EmailAddress::is_valid(&args.email) {
        bail!("'{}' is not a valid email address", args.email);
    }

    let db = args.db.connect().await?;

    // login picks the first admin by email, so keep them unique
    if db
        .get_admin_by_email(&args.email)
        .await
        .context("failed to check for existing admin")?
        .is_some()
    {
        bail!("admin '{}' already exists", args.email);
    }

    let mut admin = Admin::new(args.email, args.name);
    admin.university_name = args.university;

    let created = db
        .create_admin(&admin)
        .await
        .context("failed to create admin")?;

    println!("Created admin:");
    println!("  ID:         {}", created.id);
    println!("  Email:      {}", created.email);
    println!("  Name:       {}", created.admin_name);
    if !created.university_name.is_empty() {
        println!("  University: {}", created.university_name);
    }

    Ok(())
}

async fn list_admins(args: ListAdminsArgs) -> Result<()> {
    let db = args.db.connect().await?;

    let admins = db.list_admins().await.context("failed to list admins")?;

    if args.output == "json" {
        println!("{}", serde_json::to_string_pretty(&admins)?);
        return Ok(());
    }

    if admins.is_empty() {
        println!("No admins found.");
        return Ok(());
    }

    println!("{:<6} {:<30} {:<25} {:<30}", "ID", "EMAIL", "NAME", "UNIVERSITY");
    println!("{}", "-".repeat(90));

    for admin in admins {
        println!(
            "{:<6} {:<30} {:<25} {:<30}",
            admin.id,
            admin.email,
            admin.admin_name,
            if admin.university_name.is_empty() {
                "-"
            } else {
                &admin.university_name
            },
        );
    }

    Ok(())
}
