use clap::Parser;
use std::process::ExitCode;

use civic_connect::cli::{Cli, Commands, generate_completions};
use civic_connect::commands::{
    OutputOptions, RegisterOptions, ReportOptions, VoteOptions, cmd_analyze, cmd_chat, cmd_export,
    cmd_issues, cmd_login, cmd_register, cmd_report, cmd_show, cmd_users, cmd_vote,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Issues {
            query,
            category,
            status,
            severity,
            table,
            json,
        } => {
            cmd_issues(
                query.as_deref(),
                &category,
                &status,
                &severity,
                table,
                OutputOptions { json },
            )
            .await
        }
        Commands::Show { id, json } => cmd_show(id, OutputOptions { json }).await,
        Commands::Report {
            title,
            description,
            location,
            category,
            severity,
            photo,
            reporter,
            analyze,
            json,
        } => {
            cmd_report(
                ReportOptions {
                    title,
                    description,
                    location,
                    category,
                    severity,
                    photo,
                    reporter,
                    analyze,
                },
                OutputOptions { json },
            )
            .await
        }
        Commands::Vote {
            id,
            comment,
            near,
            voter,
            json,
        } => {
            cmd_vote(
                VoteOptions {
                    id,
                    comment,
                    near,
                    voter,
                },
                OutputOptions { json },
            )
            .await
        }
        Commands::Login {
            email,
            password,
            json,
        } => cmd_login(email, password, OutputOptions { json }).await,
        Commands::Register {
            name,
            email,
            department,
            password,
            confirm_password,
            agree_terms,
            json,
        } => {
            cmd_register(
                RegisterOptions {
                    name,
                    email,
                    department,
                    password,
                    confirm_password,
                    agree_terms,
                },
                OutputOptions { json },
            )
            .await
        }
        Commands::Users {
            query,
            role,
            status,
            table,
            json,
        } => {
            cmd_users(
                query.as_deref(),
                &role,
                &status,
                table,
                OutputOptions { json },
            )
            .await
        }
        Commands::Analyze { description, json } => {
            cmd_analyze(&description, OutputOptions { json }).await
        }
        Commands::Chat { message, json } => cmd_chat(&message, OutputOptions { json }).await,
        Commands::Export {
            kind,
            format,
            range,
            category,
            location,
            no_charts,
            raw_data,
            preview,
            json,
        } => {
            cmd_export(
                kind,
                format,
                range,
                category,
                location,
                no_charts,
                raw_data,
                preview,
                OutputOptions { json },
            )
            .await
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
