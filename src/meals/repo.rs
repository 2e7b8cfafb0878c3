use sqlx::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::{Meal, MealChanges, NewMeal};

impl Meal {
    /// All meals of a user, oldest insert first.
    pub async fn list_by_user(db: &SqlitePool, user_id: Uuid) -> sqlx::Result<Vec<Meal>> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, "userId", name, description, datetime, "withinDiet", "createdAt", "updatedAt"
            FROM meals
            WHERE "userId" = ?
            ORDER BY rowid ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    pub async fn find_for_user(
        db: &SqlitePool,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> sqlx::Result<Option<Meal>> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, "userId", name, description, datetime, "withinDiet", "createdAt", "updatedAt"
            FROM meals
            WHERE id = ? AND "userId" = ?
            "#,
        )
        .bind(meal_id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(db: &SqlitePool, user_id: Uuid, meal: &NewMeal) -> sqlx::Result<Meal> {
        let now = OffsetDateTime::now_utc();
        sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (id, "userId", name, description, datetime, "withinDiet", "createdAt", "updatedAt")
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, "userId", name, description, datetime, "withinDiet", "createdAt", "updatedAt"
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(&meal.datetime)
        .bind(meal.within_diet)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
    }

    /// Apply `changes` to an owned meal. Returns the number of rows touched.
    pub async fn update_for_user(
        db: &SqlitePool,
        user_id: Uuid,
        meal_id: Uuid,
        changes: &MealChanges,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE meals
            SET name = COALESCE(?, name),
                description = COALESCE(?, description),
                datetime = COALESCE(?, datetime),
                "withinDiet" = COALESCE(?, "withinDiet"),
                "updatedAt" = ?
            WHERE id = ? AND "userId" = ?
            "#,
        )
        .bind(changes.name.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.datetime.as_deref())
        .bind(changes.within_diet)
        .bind(OffsetDateTime::now_utc())
        .bind(meal_id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_for_user(db: &SqlitePool, user_id: Uuid, meal_id: Uuid) -> sqlx::Result<u64> {
        let result = sqlx::query(r#"DELETE FROM meals WHERE id = ? AND "userId" = ?"#)
            .bind(meal_id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
