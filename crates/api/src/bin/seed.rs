//! Development fixture loader.
//!
//! Idempotently seeds the settings singleton and four demo members, then
//! creates a sample outing with a full schedule. Run with
//! `cargo run --bin seed`.

use chrono::{Duration, Utc};
use stichting_api::auth::password::hash_password;
use stichting_core::roles::Role;
use stichting_db::models::outing::{
    CreateOuting, CreateOutingEvent, CreateOutingMeal, CreateOutingTravel,
};
use stichting_db::models::user::CreateUser;
use stichting_db::repositories::{ActivityRepo, OutingRepo, SettingRepo, UserRepo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initial password for seeded members, to be changed on first login.
const DEFAULT_PASSWORD: &str = "1234";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Seed failed");
        std::process::exit(1);
    }

    tracing::info!("Seed complete");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL")?;
    let pool = stichting_db::create_pool(&database_url).await?;
    stichting_db::run_migrations(&pool).await?;

    SettingRepo::seed(&pool, "de Stichting").await?;

    let members = [
        ("Marcel", "Marcel", "Admin", Role::Admin),
        ("Dennis", "Dennis", "Admin", Role::Admin),
        ("Roelie", "Roelie", "Gebruiker", Role::User),
        ("Sandra", "Sandra", "Gebruiker", Role::User),
    ];

    let password_hash =
        hash_password(DEFAULT_PASSWORD).map_err(|e| format!("Password hashing error: {e}"))?;

    for (username, first_name, last_name, role) in members {
        // Upsert by username so re-running the seed leaves existing
        // members (and their changed passwords) alone.
        if UserRepo::find_by_username(&pool, username).await?.is_some() {
            tracing::info!(username, "User already seeded, skipping");
            continue;
        }
        UserRepo::create(
            &pool,
            &CreateUser {
                username: username.to_string(),
                first_name: first_name.to_string(),
                tussenvoegsel: None,
                last_name: last_name.to_string(),
                phone: None,
                role,
                password_hash: password_hash.clone(),
                must_change_password: true,
                special_notes: None,
            },
        )
        .await?;
        tracing::info!(username, "Seeded user");
    }

    let now = Utc::now();
    let outing = OutingRepo::create(
        &pool,
        &CreateOuting {
            title: "Stranddag Scheveningen".to_string(),
            date: now + Duration::days(21),
            description: "Dagje strand met lunch en wandeling over de boulevard.".to_string(),
            image_url: None,
            collect_point: Some("P+R Den Haag".to_string()),
            collect_time: Some("09:15".to_string()),
            registration_until: Some(now + Duration::days(14)),
            cancel_until: Some(now + Duration::days(12)),
            published: true,
            show_on_frontend: true,
            maps_url: Some("https://maps.google.com".to_string()),
            terms_url: Some("https://example.org/algemene-voorwaarden".to_string()),
        },
    )
    .await?;
    tracing::info!(outing_id = outing.id, "Seeded sample outing");

    for (title, start, end, price, position) in [
        ("Museum Bezoek", "10:30", "12:00", 12.5, 1),
        ("Rondvaart Haven", "14:00", "15:30", 16.0, 3),
    ] {
        ActivityRepo::create_event(
            &pool,
            &CreateOutingEvent {
                outing_id: outing.id,
                title: title.to_string(),
                start_time: Some(start.to_string()),
                end_time: Some(end.to_string()),
                price_pp: Some(price),
                position,
            },
        )
        .await?;
    }

    for (title, start, end, position) in [
        ("Lunch bij 't Strandhuis", "12:30", "13:30", 2),
        ("Diner Pizza", "18:00", "19:00", 5),
    ] {
        ActivityRepo::create_meal(
            &pool,
            &CreateOutingMeal {
                outing_id: outing.id,
                title: title.to_string(),
                start_time: Some(start.to_string()),
                end_time: Some(end.to_string()),
                position,
            },
        )
        .await?;
    }

    for (title, start, end, from, to, position) in [
        ("Reis naar Scheveningen", "09:30", "10:15", "P+R", "Scheveningen", 0),
        ("Terugreis", "21:00", "22:00", "Scheveningen", "P+R", 6),
    ] {
        ActivityRepo::create_travel(
            &pool,
            &CreateOutingTravel {
                outing_id: outing.id,
                title: title.to_string(),
                start_time: Some(start.to_string()),
                end_time: Some(end.to_string()),
                mode: Some("car".to_string()),
                from_location: Some(from.to_string()),
                to_location: Some(to.to_string()),
                position,
            },
        )
        .await?;
    }

    Ok(())
}
