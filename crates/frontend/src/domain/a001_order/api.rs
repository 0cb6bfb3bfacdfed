use contracts::domain::a001_order::aggregate::{ActiveFlagRequest, Order, OrderDto, OrderId};
use contracts::domain::a001_order::error::OrderError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

fn network_error(e: gloo_net::Error) -> OrderError {
    OrderError::Network(e.to_string())
}

fn ensure_ok(response: Response) -> Result<Response, OrderError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(OrderError::from_status(response.status()))
    }
}

/// GET без кэша: после изменения список всегда читается заново
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, OrderError> {
    let cache_buster = js_sys::Date::now() as i64;
    let url = format!("{}?_ts={}", api_url(path), cache_buster);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response)?
        .json::<T>()
        .await
        .map_err(|e| OrderError::Decode(e.to_string()))
}

/// Рабочий набор заказов (`/api/pedidos`), порядок ответа сервера
pub async fn fetch_working_set() -> Result<Vec<Order>, OrderError> {
    get_json("/api/pedidos").await
}

/// Полная история (`/api/pedidos/todos`)
pub async fn fetch_history() -> Result<Vec<Order>, OrderError> {
    get_json("/api/pedidos/todos").await
}

/// Каталог продуктов для выпадающих списков
pub async fn fetch_products() -> Result<Vec<String>, OrderError> {
    get_json("/api/produtos").await
}

/// Каталог roshs для выпадающих списков
pub async fn fetch_staff() -> Result<Vec<String>, OrderError> {
    get_json("/api/roshs").await
}

/// Create new order. Validation runs before any request is made.
pub async fn create_order(dto: &OrderDto) -> Result<(), OrderError> {
    dto.validate()?;

    let response = Request::post(&api_url("/api/pedido"))
        .json(&dto.trimmed())
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response).map(|_| ())
}

/// Update order
pub async fn update_order(id: OrderId, dto: &OrderDto) -> Result<(), OrderError> {
    dto.validate()?;

    let response = Request::put(&api_url(&format!("/api/pedido/{}", id)))
        .json(&dto.trimmed())
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response).map(|_| ())
}

/// Только флаг `ativo`, остальные поля заказа не отправляются
pub async fn set_active(id: OrderId, active: bool) -> Result<(), OrderError> {
    let response = Request::put(&api_url(&format!("/api/pedido/{}/ativo", id)))
        .json(&ActiveFlagRequest::new(active))
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response).map(|_| ())
}

/// Delete order. Permission is checked by the server against the session cookie.
pub async fn delete_order(id: OrderId) -> Result<(), OrderError> {
    let response = Request::delete(&api_url(&format!("/api/pedido/{}", id)))
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response).map(|_| ())
}

/// Каталоги для выпадающих списков формы
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalogs {
    pub products: Vec<String>,
    pub staff: Vec<String>,
}

pub async fn fetch_catalogs() -> Result<Catalogs, OrderError> {
    let products = fetch_products().await?;
    let staff = fetch_staff().await?;
    Ok(Catalogs { products, staff })
}
