//! Repository for outing sub-activities: events, meals, travel legs.

use sqlx::PgPool;
use stichting_core::types::DbId;

use crate::models::outing::{
    CreateOutingEvent, CreateOutingMeal, CreateOutingTravel, OutingEvent, OutingMeal, OutingTravel,
};

const EVENT_COLUMNS: &str = "id, outing_id, title, start_time, end_time, price_pp, position";
const MEAL_COLUMNS: &str = "id, outing_id, title, start_time, end_time, position";
const TRAVEL_COLUMNS: &str =
    "id, outing_id, title, start_time, end_time, mode, from_location, to_location, position";

/// Provides operations for the three sub-activity tables.
pub struct ActivityRepo;

impl ActivityRepo {
    pub async fn create_event(
        pool: &PgPool,
        input: &CreateOutingEvent,
    ) -> Result<OutingEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO outing_events (outing_id, title, start_time, end_time, price_pp, position)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, OutingEvent>(&query)
            .bind(input.outing_id)
            .bind(&input.title)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .bind(input.price_pp)
            .bind(input.position)
            .fetch_one(pool)
            .await
    }

    pub async fn create_meal(
        pool: &PgPool,
        input: &CreateOutingMeal,
    ) -> Result<OutingMeal, sqlx::Error> {
        let query = format!(
            "INSERT INTO outing_meals (outing_id, title, start_time, end_time, position)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {MEAL_COLUMNS}"
        );
        sqlx::query_as::<_, OutingMeal>(&query)
            .bind(input.outing_id)
            .bind(&input.title)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .bind(input.position)
            .fetch_one(pool)
            .await
    }

    pub async fn create_travel(
        pool: &PgPool,
        input: &CreateOutingTravel,
    ) -> Result<OutingTravel, sqlx::Error> {
        let query = format!(
            "INSERT INTO outing_travels (outing_id, title, start_time, end_time, mode, \
                                         from_location, to_location, position)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {TRAVEL_COLUMNS}"
        );
        sqlx::query_as::<_, OutingTravel>(&query)
            .bind(input.outing_id)
            .bind(&input.title)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .bind(&input.mode)
            .bind(&input.from_location)
            .bind(&input.to_location)
            .bind(input.position)
            .fetch_one(pool)
            .await
    }

    /// Events of an outing in schedule order.
    pub async fn list_events(
        pool: &PgPool,
        outing_id: DbId,
    ) -> Result<Vec<OutingEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM outing_events
             WHERE outing_id = $1 ORDER BY position ASC"
        );
        sqlx::query_as::<_, OutingEvent>(&query)
            .bind(outing_id)
            .fetch_all(pool)
            .await
    }

    /// Meals of an outing in schedule order.
    pub async fn list_meals(pool: &PgPool, outing_id: DbId) -> Result<Vec<OutingMeal>, sqlx::Error> {
        let query = format!(
            "SELECT {MEAL_COLUMNS} FROM outing_meals
             WHERE outing_id = $1 ORDER BY position ASC"
        );
        sqlx::query_as::<_, OutingMeal>(&query)
            .bind(outing_id)
            .fetch_all(pool)
            .await
    }

    /// Travel legs of an outing in schedule order.
    pub async fn list_travels(
        pool: &PgPool,
        outing_id: DbId,
    ) -> Result<Vec<OutingTravel>, sqlx::Error> {
        let query = format!(
            "SELECT {TRAVEL_COLUMNS} FROM outing_travels
             WHERE outing_id = $1 ORDER BY position ASC"
        );
        sqlx::query_as::<_, OutingTravel>(&query)
            .bind(outing_id)
            .fetch_all(pool)
            .await
    }
}
