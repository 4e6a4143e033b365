use actix_web::{App, HttpServer, middleware, web};

use safetrip_admin::api::SafeTripClient;
use safetrip_admin::auth::{middleware::route_guard, rate_limit::RateLimiter};
use safetrip_admin::config::AppConfig;
use safetrip_admin::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let api = SafeTripClient::new(&config.api_url, config.api_timeout)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    log::info!("Using SafeTrip API at {}", api.base_url());

    let secret_key = config.cookie_key();
    let cookie_secure = config.cookie_secure;
    let bind_addr = config.bind_addr.clone();

    let config = web::Data::new(config);
    let api = web::Data::new(api);
    let limiter = web::Data::new(RateLimiter::new());

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::from_fn(route_guard))
            .wrap(routes::session_middleware(secret_key.clone(), cookie_secure))
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(api.clone())
            .app_data(limiter.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
