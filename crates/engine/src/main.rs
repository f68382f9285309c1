//! Menagerie engine - demo entry point.
//!
//! Seeds two creatures and walks them through train/rest/fight so the engine
//! can be exercised end to end from a terminal. Set `MENAGERIE_SEED` to make
//! the battle reproducible.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use menagerie_engine::infrastructure::clock::{SeededRandom, SystemRandom};
use menagerie_engine::infrastructure::ports::RandomPort;
use menagerie_engine::use_cases::{CreateCreatureRequest, Requester};
use menagerie_engine::App;
use menagerie_domain::UserId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment overrides from a local .env, if present.
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menagerie_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Menagerie engine");

    let rng: Arc<dyn RandomPort> = match std::env::var("MENAGERIE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
    {
        Some(seed) => {
            tracing::info!(seed, "Using seeded battle randomness");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(SystemRandom::new()),
    };
    let app = App::in_memory(rng);

    let owner = UserId::new();
    let requester = Requester::user(owner);

    let attacker = app
        .creatures
        .create
        .execute(
            owner,
            CreateCreatureRequest {
                name: "Huan".into(),
                race: "Hound".into(),
                character_class: "knight".into(),
                image_url: None,
            },
        )
        .await?;
    let opponent = app
        .creatures
        .create
        .execute(
            owner,
            CreateCreatureRequest {
                name: "Carcharoth".into(),
                race: "Wolf".into(),
                character_class: "barbarian".into(),
                image_url: None,
            },
        )
        .await?;

    let trained = app
        .creatures
        .train
        .execute(attacker.id(), &requester)
        .await?;
    tracing::info!(
        health = trained.health(),
        experience = trained.experience(),
        "{} finished training",
        trained.name()
    );

    let fought = app
        .creatures
        .fight
        .execute(attacker.id(), opponent.id(), &requester)
        .await?;
    tracing::info!(
        level = fought.level(),
        experience = fought.experience(),
        health = fought.health(),
        "{} came out of the arena",
        fought.name()
    );

    let rested = app.creatures.rest.execute(attacker.id(), &requester).await?;
    tracing::info!(health = rested.health(), "{} rested up", rested.name());

    Ok(())
}
