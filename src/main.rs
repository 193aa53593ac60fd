// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Renamer CLI
//!
//! Dumps Strava activities to CSV and, after the file has been edited,
//! pushes the renamed activities back to Strava.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use strava_renamer::{
    config::Config,
    error::AppError,
    logging,
    services::{
        export_activities, oauth, run_update, ApplyEvent, OAuthClient, Snapshot, StravaClient,
        TokenResponse, TokenStatus, UpdateOptions,
    },
    time_utils::format_unix_timestamp,
};

#[derive(Parser)]
#[command(name = "strava-renamer")]
#[command(
    about = "Dump Strava activities to CSV and, after editing, update them automatically"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build an authorization URL
    GetCode {
        /// Client ID
        #[arg(long, env = "STRAVA_CLIENT_ID")]
        client_id: String,
    },

    /// Exchange a temporary code for a permanent token
    GetToken {
        /// Client ID
        #[arg(long, env = "STRAVA_CLIENT_ID")]
        client_id: String,
        /// Client secret
        #[arg(long, env = "STRAVA_CLIENT_SECRET", hide_env_values = true)]
        client_secret: String,
        /// Previously generated temporary code
        #[arg(long)]
        code: String,
    },

    /// Check the validity of a token and, if needed, request a new one
    CheckTokenValidity {
        /// Client ID
        #[arg(long, env = "STRAVA_CLIENT_ID")]
        client_id: String,
        /// Client secret
        #[arg(long, env = "STRAVA_CLIENT_SECRET", hide_env_values = true)]
        client_secret: String,
        /// Refresh access token
        #[arg(long, env = "STRAVA_REFRESH_TOKEN", hide_env_values = true)]
        refresh_access_token: String,
        /// Expiration time of the access token (Unix seconds)
        #[arg(long)]
        expires_at: i64,
    },

    /// Retrieve all activities and write them in CSV format
    GetActivities {
        /// Access token
        #[arg(long, env = "STRAVA_ACCESS_TOKEN", hide_env_values = true)]
        access_token: String,
        /// Output file where activities will be dumped in CSV format
        #[arg(long)]
        output_file: PathBuf,
    },

    /// Update all activities that differ between two CSV files, or only print the differences
    UpdateActivities {
        /// Access token
        #[arg(long, env = "STRAVA_ACCESS_TOKEN", hide_env_values = true)]
        access_token: String,
        /// Original CSV file
        #[arg(long)]
        original_file: PathBuf,
        /// CSV file with modified activities
        #[arg(long)]
        modified_file: PathBuf,
        /// Only print the differences, without updating the remote activities
        #[arg(long)]
        only_print: bool,
        /// Empty the descriptions of the renamed activities
        #[arg(long)]
        empty_descriptions: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("failed to load configuration")?;
    logging::init(config.log_format);

    let result = run(cli.command, &config).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Command failed");
        if let Some(hint) = e.downcast_ref::<AppError>().and_then(AppError::hint) {
            eprintln!("[!] {}", hint);
        }
    }
    result
}

async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::GetCode { client_id } => {
            let url = oauth::authorization_url(
                &config.oauth_base_url,
                &client_id,
                &config.redirect_uri,
                &oauth::DEFAULT_SCOPES,
            );
            println!("[+] Authorization URL is: {}", url);
        }

        Command::GetToken {
            client_id,
            client_secret,
            code,
        } => {
            let client = OAuthClient::new(config.oauth_base_url.clone(), client_id, client_secret);
            let tokens = client
                .exchange_code(&code)
                .await
                .context("failed to exchange code for token")?;
            print_tokens("[+] A new permanent token was generated", &tokens);
        }

        Command::CheckTokenValidity {
            client_id,
            client_secret,
            refresh_access_token,
            expires_at,
        } => match TokenStatus::check(expires_at, chrono::Utc::now()) {
            TokenStatus::Valid => {
                println!(
                    "[+] The access token is still valid (until {})!",
                    format_unix_timestamp(expires_at)
                );
            }
            TokenStatus::Expired => {
                let client =
                    OAuthClient::new(config.oauth_base_url.clone(), client_id, client_secret);
                let tokens = client
                    .refresh_token(&refresh_access_token)
                    .await
                    .context("failed to refresh access token")?;
                print_tokens(
                    "[!] The access token expired. A new access token was generated",
                    &tokens,
                );
            }
        },

        Command::GetActivities {
            access_token,
            output_file,
        } => {
            let api = StravaClient::with_base_url(config.api_base_url.clone(), access_token);
            let file = File::create(&output_file)
                .with_context(|| format!("failed to create {}", output_file.display()))?;

            let count = export_activities(&api, BufWriter::new(file), config.page_size).await?;
            println!("[+] Number of saved activities: {}", count);
        }

        Command::UpdateActivities {
            access_token,
            original_file,
            modified_file,
            only_print,
            empty_descriptions,
        } => {
            let _log_sink = logging::scoped_file_sink(&config.update_log_path).with_context(
                || format!("failed to open {}", config.update_log_path.display()),
            )?;

            let original = Snapshot::load_from_file(&original_file)?;
            let modified = Snapshot::load_from_file(&modified_file)?;
            let api = StravaClient::with_base_url(config.api_base_url.clone(), access_token);

            let options = UpdateOptions {
                only_print,
                empty_descriptions,
                ..Default::default()
            };

            // Dry runs never apply, so they get no bar
            let progress =
                (!only_print).then(|| ProgressBar::new(0).with_style(progress_style()));
            let mut stdout = io::stdout();

            let summary = run_update(
                &api,
                &original,
                &modified,
                &options,
                &mut stdout,
                |event| {
                    let Some(progress) = &progress else {
                        return;
                    };
                    match event {
                        ApplyEvent::Started { total } => progress.set_length(total as u64),
                        ApplyEvent::Updated { .. } => progress.inc(1),
                        ApplyEvent::Pausing { after, duration } => {
                            progress.set_message(format!(
                                "{} updated, waiting {} min for the write quota",
                                after,
                                duration.as_secs() / 60
                            ))
                        }
                    }
                },
            )
            .await;
            if let Some(progress) = &progress {
                progress.finish_and_clear();
            }
            stdout.flush()?;

            let summary = summary?;
            tracing::info!(
                names = summary.name_changes,
                types = summary.type_changes,
                applied = summary.applied,
                "Update finished"
            );
        }
    }

    Ok(())
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

fn print_tokens(headline: &str, tokens: &TokenResponse) {
    println!(
        "{}, with the following details:\n\t- access token: {}\n\t- refresh access token: {}\n\t- expires at: {} ({})",
        headline,
        tokens.access_token,
        tokens.refresh_token,
        tokens.expires_at,
        format_unix_timestamp(tokens.expires_at)
    );
}
