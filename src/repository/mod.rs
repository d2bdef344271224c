use crate::db::DbPool;
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::repository::errors::RepositoryResult;

pub mod advocate;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Parameters for listing advocates. An empty query lists the whole table;
/// `search` narrows it with the case-insensitive substring predicate.
#[derive(Debug, Clone, Default)]
pub struct AdvocateListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl AdvocateListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait AdvocateReader {
    /// Returns the total number of matching rows together with the requested
    /// page. Both are computed from the same predicate.
    fn list(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)>;
}

pub trait AdvocateWriter {
    fn create(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
}

/// Diesel-backed repository holding the connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}
