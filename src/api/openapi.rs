use super::handlers::{auth, health};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::accounts::sign_up,
        auth::accounts::sign_in,
        auth::session::verify,
        auth::session::me,
        auth::session::sign_out
    ),
    components(schemas(
        health::Health,
        crate::identity::types::Profile,
        auth::types::SignUpRequest,
        auth::types::SignInRequest,
        auth::types::AccountResponse,
        auth::types::SignInResponse,
        auth::types::VerifyRequest,
        auth::types::SessionResponse
    )),
    tags(
        (name = "auth", description = "Passwordless sign-up, sign-in and session management"),
        (name = "health", description = "Service and identity platform health")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
