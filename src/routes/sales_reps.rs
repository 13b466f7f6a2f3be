use actix_web::{HttpResponse, Responder, get, web};
use log::{error, info};

use crate::dto::api::ApiResponse;
use crate::dto::sales_reps::{PageQuery, SalesRepsQuery};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::sales_reps as sales_rep_service;

#[get("/sales-reps")]
pub async fn list_sales_reps(
    params: web::Query<SalesRepsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match sales_rep_service::list_sales_reps(repo.get_ref(), params.into_inner()) {
        Ok(page) => {
            info!("Fetched sales reps. Count: {}", page.total_data);
            HttpResponse::Ok().json(ApiResponse::success(
                "Successfully fetched sales reps",
                page,
            ))
        }
        Err(e) => {
            error!("Failed to fetch sales reps: {e}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::error("Failed to fetch sales reps", e))
        }
    }
}

#[get("/sales-reps/by-region/{region}")]
pub async fn sales_reps_by_region(
    path: web::Path<String>,
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let region = path.into_inner();

    match sales_rep_service::list_sales_reps_by_region(repo.get_ref(), &region, params.into_inner())
    {
        Ok(page) => {
            info!("Fetched sales reps by region: {region}");
            HttpResponse::Ok().json(ApiResponse::success(
                format!("Successfully fetched sales reps for region: {region}"),
                page,
            ))
        }
        Err(e) => {
            error!("Failed to fetch sales reps by region {region}: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::error(
                format!("Failed to fetch sales reps for region: {region}"),
                e,
            ))
        }
    }
}

#[get("/sales-reps/by-role/{role}")]
pub async fn sales_reps_by_role(
    path: web::Path<String>,
    params: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let role = path.into_inner();

    match sales_rep_service::list_sales_reps_by_role(repo.get_ref(), &role, params.into_inner()) {
        Ok(page) => {
            info!("Fetched sales reps by role: {role}");
            HttpResponse::Ok().json(ApiResponse::success(
                format!("Successfully fetched sales reps with role: {role}"),
                page,
            ))
        }
        Err(e) => {
            error!("Failed to fetch sales reps by role {role}: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::error(
                format!("Failed to fetch sales reps with role: {role}"),
                e,
            ))
        }
    }
}

#[get("/sales-reps/{id}")]
pub async fn sales_rep_by_id(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = path.into_inner();

    match sales_rep_service::get_sales_rep_by_id(repo.get_ref(), id) {
        Ok(rep) => {
            info!("Fetched sales rep by ID: {id}");
            HttpResponse::Ok().json(ApiResponse::success(
                format!("Successfully fetched sales rep with ID: {id}"),
                rep,
            ))
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(ApiResponse::not_found(
            format!("Sales rep with ID {id} not found"),
        )),
        Err(e) => {
            error!("Failed to fetch sales rep by ID {id}: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::error(
                format!("Failed to fetch sales rep with ID: {id}"),
                e,
            ))
        }
    }
}
