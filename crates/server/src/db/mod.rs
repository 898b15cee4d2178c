use std::{ffi::c_int, sync::Once, time::Duration};

use anyhow::bail;
use include_dir::{include_dir, Dir};
use rusqlite::{Connection, OpenFlags};
use rusqlite_migration::{Migrations, SchemaVersion};
use tracing::{debug, error, info, trace, warn};

mod database_connection;
pub use database_connection::*;

pub mod model;

static MIGRATIONS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/migrations");

pub fn migrations() -> Result<Migrations<'static>, anyhow::Error> {
    Ok(Migrations::from_directory(&MIGRATIONS_DIR)?)
}

fn profiling_callback(query: &str, duration: Duration) {
    trace!(target: "sqlite_profiling", ?duration, query);
}

fn trace_callback(query: &str) {
    trace!(target: "sqlite_tracing", query);
}

fn log_callback(sqlite_code: c_int, msg: &str) {
    use rusqlite::ffi;
    let err_code = ffi::Error::new(sqlite_code);

    // See https://www.sqlite.org/rescode.html for the result codes
    match sqlite_code & 0xff {
        ffi::SQLITE_NOTICE => info!(target: "sqlite", msg, %err_code, "SQLITE NOTICE"),
        ffi::SQLITE_WARNING => warn!(target: "sqlite", msg, %err_code, "SQLITE WARNING"),
        _ => error!(target: "sqlite", msg, %err_code, "SQLITE ERROR"),
    };
}

pub fn run_pragmas(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(())
}

/// Applied to every connection the pool hands out as well as the migration
/// connection
pub fn configure_new_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    run_pragmas(conn)?;

    if cfg!(debug_assertions) {
        conn.trace(Some(trace_callback));
    } else {
        conn.profile(Some(profiling_callback));
    }

    Ok(())
}

fn schema_version(
    migrations: &Migrations<'_>,
    conn: &Connection,
) -> Result<usize, anyhow::Error> {
    Ok(match migrations.current_version(conn)? {
        SchemaVersion::Inside(n) => n.into(),
        SchemaVersion::Outside(n) => {
            bail!("schema version {n} is outside the known migrations, manual intervention required")
        },
        SchemaVersion::NoneSet => 0,
    })
}

/// Brings the schema to the latest version, returning how many migrations ran.
/// Called once at startup, before the pool exists.
pub fn run_migrations(connection_string: &str) -> Result<usize, anyhow::Error> {
    // The log callback has to be configured before any connection is opened
    static CONFIG_LOG: Once = Once::new();
    let mut config_result = Ok(());
    CONFIG_LOG.call_once(|| unsafe {
        config_result = rusqlite::trace::config_log(Some(log_callback));
    });
    config_result?;

    let open_flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX
        | OpenFlags::SQLITE_OPEN_CREATE;

    let mut conn = Connection::open_with_flags(connection_string, open_flags)?;
    configure_new_connection(&mut conn)?;

    let migrations = migrations()?;
    let initial_version = schema_version(&migrations, &conn)?;
    migrations.to_latest(&mut conn)?;
    let final_version = schema_version(&migrations, &conn)?;

    debug!("database schema at version {final_version}");

    if let Err((_conn, e)) = conn.close() {
        Err(e)?;
    }

    Ok(final_version - initial_version)
}
