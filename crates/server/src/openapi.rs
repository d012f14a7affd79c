use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CredentialsDoc { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginOutputDoc { pub token: String }

#[derive(ToSchema)]
pub struct ItemDoc {
    pub sku: String,
    pub name: String,
    pub qty: u32,
    pub price: u64,
    pub unit: String,
    pub status: u8,
}

#[derive(ToSchema)]
pub struct ItemListDoc { pub data: Vec<ItemDoc> }

#[derive(ToSchema)]
pub struct SkuDoc { pub sku: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::items::list,
        crate::routes::items::add,
        crate::routes::items::update,
        crate::routes::items::delete,
        crate::routes::items::search,
    ),
    components(
        schemas(
            HealthResponse,
            CredentialsDoc,
            LoginOutputDoc,
            ItemDoc,
            ItemListDoc,
            SkuDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "items")
    )
)]
pub struct ApiDoc;
