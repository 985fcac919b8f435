pub(crate) mod orders;

use actix_web::web;

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(orders::get_orders)
            .service(orders::post_orders),
    );
}
