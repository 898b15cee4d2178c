mod pool;
pub use pool::*;

mod state;
pub use state::*;
