use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};

use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AdvocateListQuery, AdvocateReader, AdvocateWriter, DieselRepository};

/// Builds the free-text predicate: a case-insensitive `%term%` match against
/// any of first name, last name, city, degree, the serialized specialties
/// list, or the decimal form of years of experience. SQLite's `LIKE` is
/// case-insensitive for ASCII, which matches the intended semantics.
macro_rules! search_predicate {
    ($pattern:expr) => {{
        use crate::schema::advocates;
        advocates::first_name
            .like($pattern.clone())
            .or(advocates::last_name.like($pattern.clone()))
            .or(advocates::city.like($pattern.clone()))
            .or(advocates::degree.like($pattern.clone()))
            .or(advocates::specialties.like($pattern.clone()))
            .or(sql::<Bool>("CAST(years_of_experience AS TEXT) LIKE ")
                .bind::<Text, _>($pattern.clone()))
    }};
}

impl AdvocateReader for DieselRepository {
    fn list(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)> {
        use crate::models::advocate::Advocate as DbAdvocate;
        use crate::schema::advocates;

        let mut conn = self.conn()?;

        let pattern = query
            .search
            .as_deref()
            .map(|term| term.trim())
            .filter(|term| !term.is_empty())
            .map(|term| format!("%{term}%"));

        let total: i64 = match &pattern {
            Some(pattern) => advocates::table
                .filter(search_predicate!(pattern))
                .count()
                .get_result(&mut conn)?,
            None => advocates::table.count().get_result(&mut conn)?,
        };

        let mut items_query = match &pattern {
            Some(pattern) => advocates::table
                .filter(search_predicate!(pattern))
                .order(advocates::id.asc())
                .into_boxed(),
            None => advocates::table.order(advocates::id.asc()).into_boxed(),
        };

        if let Some(pagination) = &query.pagination {
            // Saturate rather than cast: a page beyond i64 must stay a
            // past-the-end offset, not wrap negative and alias page 1.
            let page = i64::try_from(pagination.page.max(1)).unwrap_or(i64::MAX);
            let per_page = i64::try_from(pagination.per_page.max(1)).unwrap_or(i64::MAX);
            let offset = (page - 1).saturating_mul(per_page);
            items_query = items_query.limit(per_page).offset(offset);
        }

        let items = items_query
            .load::<DbAdvocate>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Advocate>, serde_json::Error>>()?;

        Ok((total as usize, items))
    }
}

impl AdvocateWriter for DieselRepository {
    fn create(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize> {
        use crate::models::advocate::NewAdvocate as DbNewAdvocate;
        use crate::schema::advocates;

        let mut conn = self.conn()?;
        let insertables = new_advocates
            .iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<DbNewAdvocate>, serde_json::Error>>()?;
        let affected = diesel::insert_into(advocates::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
