use crate::server::model::order::CreateOrderResponse;
use crate::server::state::AppState;
use actix_web::{get, post, web, HttpResponse};
use log::{debug, info};
use serde_json::{Map, Value};

#[get("/orders")]
/// list orders
async fn get_orders(data: web::Data<AppState>) -> HttpResponse {
    let orders = data.get_orders();
    debug!("listing {} orders", orders.len());
    HttpResponse::Ok().json(orders)
}

#[post("/orders")]
/// create an order, the body is echoed back and not stored
async fn post_orders(body: web::Json<Map<String, Value>>) -> HttpResponse {
    let body = body.into_inner();
    info!("order created, fields={:?}", body.keys().collect::<Vec<_>>());
    HttpResponse::Created().json(CreateOrderResponse::created(body))
}
