use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};
use serde::Deserialize;

use crate::domain::types::CategoryId;
use crate::forms::categories::{
    CreateCategoryForm, CreateCategoryPayload, UpdateCategoryForm, UpdateCategoryPayload,
};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::categories::{
    change_category_status as change_category_status_service,
    create_category as create_category_service, delete_category as delete_category_service,
    get_category as get_category_service, list_categories as list_categories_service,
    update_category as update_category_service,
};

#[derive(Deserialize, Debug)]
struct ListCategoriesQueryParams {
    search: Option<String>,
    page: Option<usize>,
}

#[derive(Deserialize, Debug)]
struct ChangeStatusQueryParams {
    id: i32,
    archived: bool,
}

#[get("")]
pub async fn list_categories(
    params: web::Query<ListCategoriesQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);

    match list_categories_service(params.search.as_deref(), page, repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/{id}")]
pub async fn get_category(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    // Non-positive ids cannot exist in the store.
    let id = match CategoryId::new(id.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::NotFound().finish(),
    };

    match get_category_service(id, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to get category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateCategoryForm>,
) -> impl Responder {
    let payload: CreateCategoryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(e.failures()),
    };

    match create_category_service(payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => {
            log::error!("Failed to create category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/{id}")]
pub async fn update_category(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateCategoryForm>,
) -> impl Responder {
    let id = match CategoryId::new(id.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::NotFound().finish(),
    };

    let payload: UpdateCategoryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(e.failures()),
    };

    match update_category_service(id, payload, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to update category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[patch("")]
pub async fn change_category_status(
    params: web::Query<ChangeStatusQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = match CategoryId::new(params.id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::NotFound().finish(),
    };

    match change_category_status_service(id, params.archived, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to change category status: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/{id}")]
pub async fn delete_category(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = match CategoryId::new(id.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::NotFound().finish(),
    };

    match delete_category_service(id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to delete category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
