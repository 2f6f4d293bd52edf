pub mod helpers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;
