use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::application::{AppError, ExpenseService};
use crate::domain::{format_amount, parse_amount, Category};
use crate::io::Exporter;

/// Spesa - Personal Expense Tracker
#[derive(Parser)]
#[command(name = "spesa")]
#[command(about = "A local-first expense tracker backed by a single JSON file")]
#[command(version)]
pub struct Cli {
    /// Expense file path
    #[arg(short, long, default_value = "expenses.json")]
    pub file: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "50.00" or "50")
        amount: String,

        /// Category: food, transport, shopping, bills, entertainment, other
        #[arg(short, long)]
        category: String,

        /// Description of the expense
        #[arg(short, long)]
        description: String,

        /// Date of the expense (ISO 8601 format: YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    List,

    /// Delete an expense
    Delete {
        /// Expense id (as shown by `list`)
        id: String,
    },

    /// Show weekly and monthly spending totals
    Stats {
        /// Reference date for the windows (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Export all expenses to CSV
    Export {
        /// Output file
        #[arg(short, long, default_value = "expenses_export.csv")]
        output: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let service = ExpenseService::open(&self.file);

        match self.command {
            Commands::Add {
                amount,
                category,
                description,
                date,
            } => {
                let amount = parse_amount(&amount)
                    .context("Invalid amount format. Use '50.00' or '50'")?;

                let category = Category::from_str(&category).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Invalid category '{}'. Valid categories: {}",
                        category,
                        Category::ALL.map(|c| c.as_str()).join(", ")
                    )
                })?;

                let date = match date {
                    Some(date_str) => parse_date(&date_str).with_context(|| {
                        format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)
                    })?,
                    None => Local::now().date_naive(),
                };

                let record = service.add_expense(date, amount, category, &description)?;

                println!(
                    "Added expense: {} {} ({}, {})",
                    format_amount(record.amount),
                    record.description,
                    record.category,
                    record.date
                );
            }

            Commands::List => {
                run_list_command(&service)?;
            }

            Commands::Delete { id } => {
                let id = Uuid::parse_str(&id).context("Invalid expense id (expected UUID)")?;

                match service.delete_expense(id) {
                    Ok(removed) => println!(
                        "Deleted expense: {} {} ({})",
                        format_amount(removed.amount),
                        removed.description,
                        removed.date
                    ),
                    // Stale id (e.g. already deleted elsewhere): warn, don't crash
                    Err(AppError::ExpenseNotFound(_)) => {
                        eprintln!("Warning: no expense with id {}, nothing deleted", id);
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            Commands::Stats { date } => {
                let today = match date {
                    Some(date_str) => parse_date(&date_str).with_context(|| {
                        format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)
                    })?,
                    None => Local::now().date_naive(),
                };

                run_stats_command(&service, today)?;
            }

            Commands::Export { output } => {
                let file = std::fs::File::create(&output)
                    .with_context(|| format!("Failed to create output file: {}", output))?;

                let exporter = Exporter::new(&service);
                let count = exporter.export_expenses_csv(file)?;
                println!("Exported {} expense(s) to {}", count, output);
            }
        }

        Ok(())
    }
}

fn run_list_command(service: &ExpenseService) -> Result<()> {
    let expenses = service.list_expenses_recent_first()?;

    if expenses.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    println!(
        "{:<36} {:<12} {:<14} {:>12}  {}",
        "ID", "DATE", "CATEGORY", "AMOUNT", "DESCRIPTION"
    );
    println!("{}", "-".repeat(90));
    for expense in expenses {
        println!(
            "{:<36} {:<12} {:<14} {:>12}  {}",
            expense.id,
            expense.date,
            expense.category,
            format_amount(expense.amount),
            expense.description
        );
    }

    Ok(())
}

fn run_stats_command(service: &ExpenseService, today: NaiveDate) -> Result<()> {
    let report = service.spending_report(today)?;

    println!(
        "This week (since {}):  {}",
        report.week_start,
        format_amount(report.weekly_total)
    );
    println!(
        "This month (since {}): {}",
        report.month_start,
        format_amount(report.monthly_total)
    );

    if report.categories.is_empty() {
        println!();
        println!("No expenses this month.");
        return Ok(());
    }

    println!();
    println!("By category this month:");
    for summary in &report.categories {
        println!(
            "  {:<14} {:>12}  {:>5.1}%  ({})",
            summary.category,
            format_amount(summary.total),
            summary.percentage,
            summary.count
        );
    }

    if let Some(top) = report.top_category {
        println!();
        println!("Top category this month: {}", top);
    }

    Ok(())
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(Into::into)
}
