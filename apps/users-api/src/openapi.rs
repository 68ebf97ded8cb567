use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Users API", description = "CRUD over in-memory user records"),
    paths(crate::api::root, crate::api::ping),
    components(schemas(crate::api::PingResponse)),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc)
    ),
    tags((name = "meta", description = "Greeting and ping"))
)]
pub struct ApiDoc;
