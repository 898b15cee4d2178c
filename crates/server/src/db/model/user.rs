use exemplar::Model;
use rusqlite::{Connection, OptionalExtension};
use sea_query::{enum_def, Expr, Query, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};
use shared::types::Uuid;

#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("user")]
#[check("../../../migrations/001-user/up.sql")]
#[enum_def]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

impl User {
    /// Usernames aren't unique, so the id is the only handle on a user
    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.query_row(&*values.as_params(), User::from_row).optional()
    }

    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn create(conn: &Connection, username: String) -> Result<User, rusqlite::Error> {
        let user = User { id: Uuid::new_v4(), username };
        user.insert(conn)?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::model::test_connection;

    #[test]
    fn created_users_can_be_fetched_back() {
        let conn = test_connection();

        let user = User::create(&conn, "fcc_test".into()).unwrap();
        assert_eq!(user.username, "fcc_test");

        let fetched = User::fetch_by_id(&conn, &user.id).unwrap().unwrap();
        assert_eq!(fetched, user);
    }

    #[test]
    fn fetching_a_missing_user_returns_none() {
        let conn = test_connection();
        assert_eq!(User::fetch_by_id(&conn, &Uuid::new_v4()).unwrap(), None);
    }

    #[test]
    fn fetch_all_returns_every_user() {
        let conn = test_connection();

        let a = User::create(&conn, "alice".into()).unwrap();
        let b = User::create(&conn, "bob".into()).unwrap();

        let all = User::fetch_all(&conn).unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&a));
        assert!(all.contains(&b));
    }

    #[test]
    fn duplicate_usernames_are_allowed() {
        let conn = test_connection();

        let a = User::create(&conn, "dup".into()).unwrap();
        let b = User::create(&conn, "dup".into()).unwrap();
        assert_ne!(a.id, b.id);
    }
}
