pub mod db;

mod cli;
pub use cli::*;

mod errors;
pub use errors::*;

mod state;
pub use state::*;

pub mod routes;
