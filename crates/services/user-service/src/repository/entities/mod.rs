//! SeaORM entities backing the Postgres store.

pub mod user;
