use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use service::product::domain::Product;
use service::user::domain::Claims;

use crate::errors::JsonApiError;
use crate::extract::FormOrJson;
use crate::routes::auth::ServerState;

/// Add/update body. `sku`, `name`, `price` and `unit` are required.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ProductRequest {
    pub sku: String,
    pub name: String,
    pub qty: u32,
    pub price: u64,
    pub unit: String,
    pub status: u8,
}

impl ProductRequest {
    fn into_product(self) -> Result<Product, JsonApiError> {
        let missing = if self.sku.is_empty() {
            Some("sku")
        } else if self.name.is_empty() {
            Some("name")
        } else if self.price == 0 {
            Some("price")
        } else if self.unit.is_empty() {
            Some("unit")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(JsonApiError::bad_request(format!("parse request: {field} is required")));
        }
        Ok(Product {
            sku: self.sku,
            name: self.name,
            quantity: self.qty,
            price: self.price,
            unit: self.unit,
            status: self.status,
        })
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SkuRequest {
    pub sku: String,
}

impl SkuRequest {
    fn into_sku(self) -> Result<String, JsonApiError> {
        if self.sku.is_empty() {
            return Err(JsonApiError::bad_request("parse request: sku is required"));
        }
        Ok(self.sku)
    }
}

/// Email of the authenticated caller, taken from the token audience.
fn caller(claims: &Claims) -> &str {
    claims.aud.first().map(String::as_str).unwrap_or("-")
}

#[derive(Serialize)]
pub struct ItemList {
    pub data: Vec<Product>,
}

#[utoipa::path(get, path = "/api/items", tag = "items", responses((status = 200, description = "All items", body = crate::openapi::ItemListDoc), (status = 401, description = "Unauthorized")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<ItemList>, JsonApiError> {
    let data = state.products.list_product().await?;
    Ok(Json(ItemList { data }))
}

#[utoipa::path(post, path = "/api/item/add", tag = "items", request_body = crate::openapi::ItemDoc, responses((status = 201, description = "Created"), (status = 400, description = "Bad Request or item exist"), (status = 401, description = "Unauthorized")))]
pub async fn add(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    FormOrJson(input): FormOrJson<ProductRequest>,
) -> Result<StatusCode, JsonApiError> {
    let product = input.into_product()?;
    info!(sku = %product.sku, by = caller(&claims), "product add");
    state.products.add_product(product).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(post, path = "/api/item/update", tag = "items", request_body = crate::openapi::ItemDoc, responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"), (status = 401, description = "Unauthorized")))]
pub async fn update(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    FormOrJson(input): FormOrJson<ProductRequest>,
) -> Result<StatusCode, JsonApiError> {
    let product = input.into_product()?;
    info!(sku = %product.sku, by = caller(&claims), "product update");
    state.products.update_product(product).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(post, path = "/api/item/delete", tag = "items", request_body = crate::openapi::SkuDoc, responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"), (status = 401, description = "Unauthorized")))]
pub async fn delete(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    FormOrJson(input): FormOrJson<SkuRequest>,
) -> Result<StatusCode, JsonApiError> {
    let sku = input.into_sku()?;
    info!(%sku, by = caller(&claims), "product delete");
    state.products.delete_product(&sku).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(post, path = "/api/item/search", tag = "items", request_body = crate::openapi::SkuDoc, responses((status = 200, description = "Found", body = crate::openapi::ItemDoc), (status = 404, description = "Not Found"), (status = 401, description = "Unauthorized")))]
pub async fn search(
    State(state): State<ServerState>,
    FormOrJson(input): FormOrJson<SkuRequest>,
) -> Result<Json<Product>, JsonApiError> {
    let sku = input.into_sku()?;
    info!(%sku, "product search");
    let product = state.products.search_product(&sku).await?;
    Ok(Json(product))
}
