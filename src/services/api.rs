use crate::dto::api::{AdvocatesQuery, AdvocatesResponse};
use crate::pagination::{DEFAULT_PAGE_SIZE, PageInfo, clamp_page_size, normalize_page};
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of advocates matching the request.
///
/// Page and page size are clamped before use, the search term is trimmed
/// (whitespace-only means no filter), and the count and the page are always
/// computed from the same predicate, so `pagination` describes exactly the
/// set `data` was drawn from. A page past the end is a success with empty
/// `data` and the true totals.
pub fn list_advocates<R>(repo: &R, params: AdvocatesQuery) -> ServiceResult<AdvocatesResponse>
where
    R: AdvocateReader + ?Sized,
{
    let page = normalize_page(params.page.unwrap_or(1));
    let page_size = clamp_page_size(params.page_size.unwrap_or(DEFAULT_PAGE_SIZE as i64));

    let mut query = AdvocateListQuery::new().paginate(page, page_size);

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if let Some(term) = search {
        query = query.search(term);
    }

    let (total, data) = repo.list(query).map_err(ServiceError::from)?;

    Ok(AdvocatesResponse {
        data,
        pagination: PageInfo::new(total, page, page_size),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advocate::Advocate;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn advocate(first_name: &str) -> Advocate {
        Advocate {
            first_name: first_name.to_string(),
            last_name: "Smith".to_string(),
            city: "Chicago".to_string(),
            degree: "MD".to_string(),
            specialties: vec!["Pediatrics".to_string()],
            years_of_experience: 5,
            phone_number: 5550000000,
        }
    }

    #[test]
    fn defaults_applied_when_params_absent() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .withf(|query| {
                let pagination = query.pagination.as_ref().unwrap();
                query.search.is_none() && pagination.page == 1 && pagination.per_page == 25
            })
            .returning(|_| Ok((1, vec![advocate("Jane")])));

        let response = list_advocates(&repo, AdvocatesQuery::default()).unwrap();
        assert_eq!(response.pagination.page, 1);
        assert_eq!(response.pagination.page_size, 25);
        assert_eq!(response.pagination.total_pages, 1);
    }

    #[test]
    fn page_size_clamped_to_max() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .withf(|query| query.pagination.as_ref().unwrap().per_page == 100)
            .returning(|_| Ok((250, vec![])));

        let params = AdvocatesQuery {
            page_size: Some(1000),
            ..Default::default()
        };
        let response = list_advocates(&repo, params).unwrap();
        assert_eq!(response.pagination.page_size, 100);
        assert_eq!(response.pagination.total_pages, 3);
    }

    #[test]
    fn zero_page_clamped_to_first() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .withf(|query| query.pagination.as_ref().unwrap().page == 1)
            .returning(|_| Ok((0, vec![])));

        let params = AdvocatesQuery {
            page: Some(0),
            ..Default::default()
        };
        let response = list_advocates(&repo, params).unwrap();
        assert_eq!(response.pagination.page, 1);
        assert_eq!(response.pagination.total_pages, 0);
    }

    #[test]
    fn negative_params_clamped_to_minimums() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .withf(|query| {
                let pagination = query.pagination.as_ref().unwrap();
                pagination.page == 1 && pagination.per_page == 1
            })
            .returning(|_| Ok((2, vec![advocate("Jane")])));

        let params = AdvocatesQuery {
            page: Some(-1),
            page_size: Some(-5),
            ..Default::default()
        };
        let response = list_advocates(&repo, params).unwrap();
        assert_eq!(response.pagination.page, 1);
        assert_eq!(response.pagination.page_size, 1);
        assert_eq!(response.pagination.total_pages, 2);
    }

    #[test]
    fn whitespace_search_means_no_filter() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .withf(|query| query.search.is_none())
            .returning(|_| Ok((3, vec![advocate("A"), advocate("B"), advocate("C")])));

        let params = AdvocatesQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        let response = list_advocates(&repo, params).unwrap();
        assert_eq!(response.pagination.total, 3);
    }

    #[test]
    fn search_term_is_trimmed() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .withf(|query| query.search.as_deref() == Some("Bipolar"))
            .returning(|_| Ok((1, vec![advocate("Jane")])));

        let params = AdvocatesQuery {
            search: Some("  Bipolar ".to_string()),
            ..Default::default()
        };
        let response = list_advocates(&repo, params).unwrap();
        assert_eq!(response.data.len(), 1);
    }

    #[test]
    fn connection_failure_maps_to_unavailable() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .returning(|_| Err(RepositoryError::ConnectionError("pool timed out".into())));

        let err = list_advocates(&repo, AdvocatesQuery::default()).unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable(_)));
    }

    #[test]
    fn query_failure_maps_to_repository_error() {
        let mut repo = MockRepository::new();
        repo.expect_list()
            .returning(|_| Err(RepositoryError::DatabaseError("boom".into())));

        let err = list_advocates(&repo, AdvocatesQuery::default()).unwrap_err();
        assert!(matches!(err, ServiceError::Repository(_)));
    }
}
