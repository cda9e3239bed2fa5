use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use actix_web::{web, App, HttpServer};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use urlcounts::api;
use urlcounts::client::{FormState, UrlcountsClient, UrlcountsForm};
use urlcounts::hosts::KnownHosts;

#[derive(Parser, Debug)]
#[command(
    name = "urlcounts",
    about = "Match submitted URLs against a known-hosts list and report per-host counts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service
    Serve {
        /// Address to bind
        #[arg(long, env = "URLCOUNTS_BIND", default_value = "127.0.0.1:8080")]
        bind: String,

        /// Known-hosts file, one host per line
        #[arg(long, env = "URLCOUNTS_HOSTS_FILE", default_value = "hosts.txt")]
        hosts_file: PathBuf,
    },
    /// Submit newline-separated URLs to a running service and print the result
    Submit {
        /// Endpoint of the aggregation service
        #[arg(
            long,
            env = "URLCOUNTS_ENDPOINT",
            default_value = "http://127.0.0.1:8080/urlcounts"
        )]
        endpoint: String,

        /// Read URLs from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> std::io::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("urlcounts=info,actix_web=info")),
        )
        .init();

    match Cli::parse().command {
        Command::Serve { bind, hosts_file } => run_server(&bind, &hosts_file),
        Command::Submit { endpoint, file } => run_submit(&endpoint, file.as_deref()),
    }
}

fn run_server(bind: &str, hosts_file: &Path) -> std::io::Result<()> {
    let known = match KnownHosts::load(hosts_file) {
        Ok(known) => known,
        Err(err) => {
            error!("{}", err);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, err.to_string()));
        }
    };
    info!(
        hosts = known.len(),
        file = %hosts_file.display(),
        "loaded known hosts"
    );

    let data = web::Data::new(known);
    let bind = bind.to_string();

    actix_web::rt::System::new().block_on(async move {
        info!("listening on {}", bind);
        HttpServer::new(move || App::new().app_data(data.clone()).configure(api::configure))
            .bind(bind.as_str())?
            .run()
            .await
    })
}

fn run_submit(endpoint: &str, file: Option<&Path>) -> std::io::Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let client = UrlcountsClient::new(endpoint);
    let mut form = UrlcountsForm::new();
    // A trailing newline is a file convention, not an extra blank entry.
    form.set_urls_text(text.trim_end_matches(&['\n', '\r'][..]));
    form.submit(|urls| client.submit(urls));

    match form.state() {
        FormState::Success(result) => {
            println!("URLs processed successfully.");
            println!();
            println!(
                "The count of URLs that did match a host : {}",
                result.count_urls_match_a_host
            );
            println!(
                "The count of URLs that did not match any hosts : {}",
                result.count_urls_not_match_any_hosts
            );
            println!();
            println!("Hosts with a matching URL, with the count of URLs that matched:");
            for line in &result.count_urls_matched_per_host {
                println!("  {}", line);
            }
            println!();
            println!("URLs that did not match any hosts:");
            for url in &result.urls_not_match_any_hosts {
                println!("  {}", url);
            }
            Ok(())
        }
        FormState::Error(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        // submit always lands in Success or Error
        FormState::Idle | FormState::Submitting => Ok(()),
    }
}
