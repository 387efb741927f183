//! Command-line front end for the contact service.

use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use contact_client::{
    AddError, ContactBook, ContactDraft, HttpContactsApi, NotificationKind, SortOrder,
    DEFAULT_BASE_URL,
};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `contacts` command arguments.
#[derive(Debug, Parser)]
#[command(name = "contacts", about = "List, add, and delete contacts", version)]
struct CliArgs {
    /// Base URL of the contact API.
    #[arg(long, env = "CONTACTS_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show stored contacts.
    List {
        /// Display order: newest, oldest, or name.
        #[arg(long, default_value = "newest", value_parser = parse_sort_order)]
        sort: SortOrder,
    },
    /// Store a new contact.
    Add {
        /// Person's name.
        #[arg(long)]
        name: String,
        /// Email address.
        #[arg(long)]
        email: String,
        /// Phone number, 10 to 15 digits.
        #[arg(long)]
        phone: String,
        /// Optional note.
        #[arg(long)]
        message: Option<String>,
    },
    /// Delete a contact by id.
    Delete {
        /// Contact identifier.
        id: Uuid,
    },
}

fn parse_sort_order(raw: &str) -> Result<SortOrder, String> {
    raw.parse()
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    let api = HttpContactsApi::new(&args.base_url, REQUEST_TIMEOUT).map_err(io::Error::other)?;
    let mut book = ContactBook::new(api);
    let mut out = io::stdout().lock();

    let succeeded = match args.command {
        Command::List { sort } => {
            book.set_sort_order(sort);
            book.refresh().await;
            for contact in book.sorted() {
                writeln!(
                    out,
                    "{}  {}  <{}>  {}  {}",
                    contact.id,
                    contact.name,
                    contact.email,
                    contact.phone,
                    contact.created_at.to_rfc3339()
                )?;
                if !contact.message.is_empty() {
                    writeln!(out, "    {}", contact.message)?;
                }
            }
            book.notification().is_none()
        }
        Command::Add {
            name,
            email,
            phone,
            message,
        } => {
            let mut draft = ContactDraft::new(name, email, phone);
            draft.message = message;
            match book.add(draft).await {
                Ok(contact) => {
                    writeln!(out, "{}", contact.id)?;
                    true
                }
                Err(AddError::Invalid(report)) => {
                    for violation in report.violations() {
                        writeln!(io::stderr(), "{violation}")?;
                    }
                    false
                }
                Err(_) => false,
            }
        }
        Command::Delete { id } => book.delete(id).await.is_ok(),
    };

    if let Some(notification) = book.take_notification() {
        match notification.kind {
            NotificationKind::Success => writeln!(out, "{notification}")?,
            NotificationKind::Error => writeln!(io::stderr(), "{notification}")?,
        }
    }

    if succeeded {
        Ok(())
    } else {
        Err(io::Error::other("contact operation failed"))
    }
}
