use std::io;

use actix_web::{App, HttpServer, middleware, web};

use category_service::db::establish_connection_pool;
use category_service::models::config::ServerConfig;
use category_service::repository::DieselRepository;
use category_service::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config: ServerConfig = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .and_then(config::Config::try_deserialize)
        .map_err(io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url).map_err(io::Error::other)?;
    let repo = DieselRepository::new(pool);

    log::info!("Starting category service at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
            .wrap(middleware::Logger::default())
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
