//! OpenAPI documentation served through Swagger UI.

use utoipa::OpenApi;

use crate::api::handlers::signup_handler;
use crate::api::{ErrorDescriptor, ErrorKind};
use crate::domain::{Account, Field, RegistrationInput};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Signup Service",
        version = "0.1.0",
        description = "Account registration API backed by MongoDB"
    ),
    servers(
        (url = "http://localhost:5050", description = "Local development server")
    ),
    paths(signup_handler::signup),
    components(schemas(RegistrationInput, Account, ErrorDescriptor, ErrorKind, Field)),
    tags(
        (name = "Signup", description = "Account registration")
    )
)]
pub struct ApiDoc;
