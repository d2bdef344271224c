use advocates_directory::db::{DbPool, establish_connection_pool};
use advocates_directory::domain::advocate::NewAdvocate;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A throwaway SQLite database with migrations applied. The backing file
/// lives in a temp directory removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("non-utf8 temp path"))
            .expect("failed to build pool");

        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Convenience fixture row; the phone number doubles as a distinct marker.
pub fn advocate(
    first_name: &str,
    last_name: &str,
    city: &str,
    degree: &str,
    specialties: &[&str],
    years_of_experience: i32,
    phone_number: i64,
) -> NewAdvocate {
    NewAdvocate::new(
        first_name.to_string(),
        last_name.to_string(),
        city.to_string(),
        degree.to_string(),
        specialties.iter().map(|s| s.to_string()).collect(),
        years_of_experience,
        phone_number,
    )
}
