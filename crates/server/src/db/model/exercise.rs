use chrono::NaiveDate;
use exemplar::Model;
use rusqlite::Connection;
use sea_query::{enum_def, Expr, Order, Query, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};
use shared::{api::LogsQuery, types::Uuid};

#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("exercise")]
#[check("../../../migrations/002-exercise/up.sql")]
#[enum_def]
pub struct Exercise {
    pub id: Uuid,
    /// Weak reference: the schema carries no foreign key, the handler checks
    /// the user exists before inserting
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl Exercise {
    pub fn create(
        conn: &Connection,
        user_id: Uuid,
        description: String,
        duration: i64,
        date: NaiveDate,
    ) -> Result<Exercise, rusqlite::Error> {
        let exercise = Exercise { id: Uuid::new_v4(), user_id, description, duration, date };
        exercise.insert(conn)?;
        Ok(exercise)
    }

    /// A user's log, optionally bounded by the inclusive `from`/`to` dates
    /// and capped at `limit` entries. Ordered by date ascending with rowid
    /// (insertion order) as the tie break so results are reproducible.
    pub fn fetch_log(
        conn: &Connection,
        user_id: &Uuid,
        filter: &LogsQuery,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        let mut select = Query::select();
        select
            .columns([
                ExerciseIden::Id,
                ExerciseIden::UserId,
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
            ])
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::UserId).eq(user_id))
            .order_by(ExerciseIden::Date, Order::Asc)
            .order_by_expr(Expr::cust("rowid"), Order::Asc);

        if let Some(from) = filter.from {
            select.and_where(Expr::col(ExerciseIden::Date).gte(from));
        }
        if let Some(to) = filter.to {
            select.and_where(Expr::col(ExerciseIden::Date).lte(to));
        }
        if let Some(limit) = filter.limit {
            select.limit(limit as u64);
        }

        let (sql, values) = select.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }
}
