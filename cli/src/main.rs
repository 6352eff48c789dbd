use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use goodreads_core::{ClientConfig, GoodreadsClient, ReviewListOptions, SearchField};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Query the Goodreads API and print the result as JSON.
#[derive(Parser, Debug)]
#[command(name = "goodreads", version, about)]
struct Cli {
    /// Developer key sent with every request.
    #[arg(long, env = "GOODREADS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the API, e.g. a local mock server.
    #[arg(long, env = "GOODREADS_API_ROOT")]
    api_root: Option<String>,

    /// Whole-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log every request URL.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Show an author and their books.
    Author { id: String },

    /// List one page of an author's books.
    AuthorBooks {
        id: String,
        #[arg(long, default_value_t = 0)]
        page: i32,
    },

    /// Show a member profile.
    User { id: String },

    /// List a member's shelves.
    Shelves { user_id: String },

    /// List the reviews on a member's shelves.
    Reviews {
        user_id: String,
        #[arg(long, default_value = "")]
        shelf: String,
        #[arg(long, default_value = "")]
        sort: String,
        #[arg(long, default_value = "")]
        search: String,
        /// `a` (ascending) or `d` (descending).
        #[arg(long, default_value = "")]
        order: String,
        #[arg(long, default_value_t = 0)]
        page: i32,
        #[arg(long, default_value_t = 0)]
        per_page: i32,
    },

    /// Review statistics for one or more ISBNs.
    ReviewCounts {
        #[arg(required = true)]
        isbns: Vec<String>,
    },

    /// Search books by title, author or ISBN.
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = Field::All)]
        field: Field,
        #[arg(long, default_value_t = 0)]
        page: i32,
    },

    /// Show a series and its works.
    Series { id: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Author,
    Title,
    All,
}

impl From<Field> for SearchField {
    fn from(field: Field) -> Self {
        match field {
            Field::Author => SearchField::Author,
            Field::Title => SearchField::Title,
            Field::All => SearchField::All,
        }
    }
}

impl Cli {
    fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.api_key).with_verbose(self.verbose);
        if let Some(root) = &self.api_root {
            config = config.with_api_root(root);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "parsed arguments");
    let client = GoodreadsClient::with_config(cli.config());
    run(&client, cli.command)
}

fn run(client: &GoodreadsClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Author { id } => print(
            client
                .author_show(&id)
                .with_context(|| format!("fetching author {id}"))?,
        ),
        Command::AuthorBooks { id, page } => print(
            client
                .author_books(&id, page)
                .with_context(|| format!("fetching books of author {id}"))?,
        ),
        Command::User { id } => print(
            client
                .user_show(&id)
                .with_context(|| format!("fetching user {id}"))?,
        ),
        Command::Shelves { user_id } => print(
            client
                .shelves_list(&user_id)
                .with_context(|| format!("listing shelves of user {user_id}"))?,
        ),
        Command::Reviews {
            user_id,
            shelf,
            sort,
            search,
            order,
            page,
            per_page,
        } => {
            let options = ReviewListOptions {
                shelf,
                sort,
                search,
                order,
                page,
                per_page,
            };
            print(
                client
                    .review_list(&user_id, &options)
                    .with_context(|| format!("listing reviews of user {user_id}"))?,
            )
        }
        Command::ReviewCounts { isbns } => print(
            client
                .book_review_counts(isbns.as_slice())
                .context("fetching review counts")?,
        ),
        Command::Search { query, field, page } => print(
            client
                .search_books(&query, page, field.into())
                .with_context(|| format!("searching for {query:?}"))?,
        ),
        Command::Series { id } => print(
            client
                .series_show(&id)
                .with_context(|| format!("fetching series {id}"))?,
        ),
    }
}

fn print<T: Serialize>(value: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
