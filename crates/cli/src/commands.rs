//! Command dispatch: wires the configured backends into the engine and
//! runs the requested subcommand.

use crate::cli::{Commands, UsersCommands};
use crate::config;
use crate::output;
use anyhow::Result;
use conneqt_directory::{DirectoryUser, JsonDirectory, UserDirectory};
use conneqt_engine::{EngineError, Recommender};
use conneqt_matching::MentorCriteria;
use conneqt_people::PeopleApiSource;
use conneqt_store::{JsonStore, RecommendationStore};
use std::sync::Arc;
use time::OffsetDateTime;

/// Build the engine against the JSON-backed stores under the data dir.
///
/// Reads the Google token lazily, so commands that never hit the People
/// API still work without one.
fn build_recommender(need_token: bool) -> Result<Recommender> {
    let token = if need_token {
        config::google_token()?
    } else {
        String::new()
    };
    let data_dir = config::data_dir();
    let source = Arc::new(PeopleApiSource::new(token));
    let directory = Arc::new(JsonDirectory::new(data_dir.join("users.json")));
    let backend = Arc::new(JsonStore::new(&data_dir));
    let store = RecommendationStore::new(backend.clone(), backend);
    Ok(Recommender::new(source, directory, store).with_page_size(config::page_size()))
}

fn user_directory() -> JsonDirectory {
    JsonDirectory::new(config::data_dir().join("users.json"))
}

pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Sync { user, page_size } => {
            let mut recommender = build_recommender(true)?;
            if let Some(page_size) = page_size {
                recommender = recommender.with_page_size(page_size);
            }
            match recommender.sync(&user).await {
                Ok(report) => print!("{}", output::render_sync(&report)),
                // A blank user id is a usage error, not a transient failure.
                Err(err @ EngineError::InvalidUserId) => return Err(err.into()),
                Err(err) => {
                    tracing::warn!(user = %user, error = %err, "sync failed");
                    println!("No new recommendations available, try again.");
                }
            }
            Ok(())
        }
        Commands::Recommendations { user, limit, format } => {
            let recommender = build_recommender(false)?;
            let records = recommender.recommendations(&user, limit).await?;
            println!("{}", output::render_recommendations(&records, format)?);
            Ok(())
        }
        Commands::Stats { user, format } => {
            let recommender = build_recommender(false)?;
            let stats = recommender.stats(&user).await?;
            print!("{}", output::render_stats(&stats, format)?);
            Ok(())
        }
        Commands::Mentors {
            user,
            skills,
            location,
            industry,
            format,
        } => {
            let recommender = build_recommender(false)?;
            let criteria = MentorCriteria {
                skills,
                location,
                industry,
            };
            let mentors = recommender.find_mentors(&user, &criteria).await?;
            if mentors.is_empty() {
                println!("No mentor candidates found.");
            } else {
                println!("{}", output::render_recommendations(&mentors, format)?);
            }
            Ok(())
        }
        Commands::Profile { user, format } => {
            let recommender = build_recommender(false)?;
            match recommender.enhanced_profile(&user).await? {
                Some(profile) => print!("{}", output::render_profile(&profile, format)?),
                None => println!("No enhanced profile yet. Run `conneqt sync` first."),
            }
            Ok(())
        }
        Commands::Users { command } => dispatch_users(command).await,
    }
}

async fn dispatch_users(command: UsersCommands) -> Result<()> {
    let directory = user_directory();
    match command {
        UsersCommands::Add { id, name, email } => {
            directory.add_user(DirectoryUser {
                user_id: id.clone(),
                email,
                name,
                joined_at: OffsetDateTime::now_utc(),
            })?;
            println!("Added user {id}.");
            Ok(())
        }
        UsersCommands::List { format } => {
            let users = directory.list_all_users().await?;
            println!("{}", output::render_users(&users, format)?);
            Ok(())
        }
    }
}
