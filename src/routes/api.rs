use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::dto::api::{AdvocatesQuery, ErrorResponse};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::api::list_advocates;

/// `GET /api/advocates` — one page of advocates with pagination metadata.
///
/// An empty result set is a normal `200`; only storage failures produce an
/// error status, and the body never carries internal error detail.
#[get("/advocates")]
pub async fn advocates(
    params: web::Query<AdvocatesQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_advocates(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Unavailable(e)) => {
            error!("Advocates storage unavailable: {e}");
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new("Database not available"))
        }
        Err(e) => {
            error!("Failed to fetch advocates: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch advocates"))
        }
    }
}
