mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

#[cfg(test)]
pub(crate) fn test_connection() -> rusqlite::Connection {
    let mut conn = rusqlite::Connection::open_in_memory().unwrap();
    crate::db::migrations().unwrap().to_latest(&mut conn).unwrap();
    conn
}
