pub mod pool;
pub mod postgres;
pub mod store;

pub use postgres::PgTriviaStore;
pub use store::TriviaStore;
