pub mod application;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::{DishService, OrderService};
use infrastructure::memory::{InMemoryDishRepository, InMemoryOrderRepository};

/// The services as wired in production: validation chains over the in-memory
/// repositories.
pub type DishApi = DishService<InMemoryDishRepository>;
pub type OrderApi = OrderService<InMemoryOrderRepository>;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::dishes::list_dishes,
        handlers::dishes::create_dish,
        handlers::dishes::read_dish,
        handlers::dishes::update_dish,
        handlers::orders::list_orders,
        handlers::orders::create_order,
        handlers::orders::read_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
    ),
    components(schemas(
        domain::dish::Dish,
        domain::dish::DishPayload,
        domain::order::Order,
        domain::order::OrderLine,
        domain::order::OrderPayload,
        domain::order::OrderStatus,
    )),
    tags(
        (name = "dishes", description = "Menu management"),
        (name = "orders", description = "Order lifecycle"),
    )
)]
pub struct ApiDoc;

/// Route table. Collection paths take list/create, item paths read/update
/// (plus delete for orders); every other verb on these paths falls through
/// to the shared 405 handler.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dishes")
            .service(
                web::resource("")
                    .route(web::get().to(handlers::dishes::list_dishes))
                    .route(web::post().to(handlers::dishes::create_dish))
                    .default_service(web::route().to(handlers::method_not_allowed)),
            )
            .service(
                web::resource("/{dishId}")
                    .route(web::get().to(handlers::dishes::read_dish))
                    .route(web::put().to(handlers::dishes::update_dish))
                    .default_service(web::route().to(handlers::method_not_allowed)),
            ),
    )
    .service(
        web::scope("/orders")
            .service(
                web::resource("")
                    .route(web::get().to(handlers::orders::list_orders))
                    .route(web::post().to(handlers::orders::create_order))
                    .default_service(web::route().to(handlers::method_not_allowed)),
            )
            .service(
                web::resource("/{orderId}")
                    .route(web::get().to(handlers::orders::read_order))
                    .route(web::put().to(handlers::orders::update_order))
                    .route(web::delete().to(handlers::orders::delete_order))
                    .default_service(web::route().to(handlers::method_not_allowed)),
            ),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server. Both collections are created here and shared across all
/// worker threads.
pub fn build_server(host: &str, port: u16) -> std::io::Result<actix_web::dev::Server> {
    let dishes = web::Data::new(DishApi::new(InMemoryDishRepository::default()));
    let orders = web::Data::new(OrderApi::new(InMemoryOrderRepository::default()));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(dishes.clone())
            .app_data(orders.clone())
            .app_data(handlers::json_config())
            .wrap(Logger::default())
            .configure(routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
