use actix_web::web;

pub mod categories;

/// Register the `/api/category` scope on an actix application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/category")
            .service(categories::list_categories)
            .service(categories::get_category)
            .service(categories::create_category)
            .service(categories::update_category)
            .service(categories::change_category_status)
            .service(categories::delete_category),
    );
}
