//! Ticket client: one officer session per invocation.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ticket_client::{OfficerSession, TicketApiClient, TicketForm, DEFAULT_ENDPOINT};

/// Ticket client: issue, cancel and look up traffic tickets
#[derive(Parser, Debug)]
#[command(name = "ticket-client")]
#[command(about = "Officer client for the ticket desk server")]
struct Args {
    /// Server envelope endpoint URL
    #[arg(short, long, env = "TK_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Officer service number
    #[arg(short, long, env = "TK_SERVICE_NUMBER", default_value = "")]
    service_number: String,

    /// Officer password
    #[arg(short, long, env = "TK_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the offense catalog
    Offenses,
    /// Issue a ticket
    Issue {
        /// Driver and vehicle description
        #[arg(long)]
        driver: String,
        /// Driver PESEL
        #[arg(long)]
        pesel: String,
        /// Offense name, exactly as listed by `offenses`
        #[arg(long)]
        offense: String,
        /// Fine before any recidivist adjustment
        #[arg(long)]
        fine: String,
        /// Penalty points
        #[arg(long)]
        points: String,
        /// Driver is a repeat offender
        #[arg(long)]
        recidivist: bool,
    },
    /// Cancel a ticket by id
    Cancel { ticket_id: i64 },
    /// List a driver's tickets
    Tickets { pesel: String },
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("TK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = Arc::new(
        TicketApiClient::new(&args.endpoint).context("failed to create API client")?,
    );
    let session = OfficerSession::login(client, &args.service_number, &args.password)
        .await
        .context("login failed")?;

    match args.command {
        Command::Offenses => {
            for offense in session.catalog().iter() {
                println!(
                    "{}\tpoints {}-{}\tfine {}-{}{}",
                    offense.name(),
                    offense.penalty_points_min(),
                    offense.penalty_points_max(),
                    offense.fine_min(),
                    offense.fine_max(),
                    if offense.recidivist() { "\trecidivist" } else { "" },
                );
            }
        }
        Command::Issue {
            driver,
            pesel,
            offense,
            fine,
            points,
            recidivist,
        } => {
            let form = TicketForm {
                driver,
                pesel,
                offense,
                fine,
                penalty_points: points,
                recidivist,
            };
            let issued = session.issue(&form).await.context("ticket not issued")?;
            println!(
                "Ticket {} issued, fine {}",
                issued.ticket_id, issued.fine_amount
            );
        }
        Command::Cancel { ticket_id } => {
            if !session.cancel(ticket_id).await? {
                bail!("ticket {ticket_id} could not be cancelled");
            }
            println!("Ticket {ticket_id} cancelled");
        }
        Command::Tickets { pesel } => {
            let tickets = session.driver_tickets(&pesel).await?;
            if tickets.is_empty() {
                println!("No tickets for {pesel}");
            }
            for t in tickets {
                println!(
                    "{}\t{}\t{}\t{}\tfine {}\tpoints {}",
                    t.ticket_id,
                    t.issue_date.format("%Y-%m-%d %H:%M"),
                    t.driver_name,
                    t.offense,
                    t.fine_amount,
                    t.penalty_points
                );
            }
        }
    }

    Ok(())
}
