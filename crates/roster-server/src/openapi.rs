use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "In-memory user directory with JWT login and registration."
    ),
    paths(
        crate::routes::login,
        crate::routes::register,
        crate::routes::me,
        crate::routes::list_users,
        crate::routes::get_user,
        crate::routes::create_user,
        crate::routes::update_user,
        crate::routes::delete_user,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::LoginRequest,
        crate::dto::RegisterRequest,
        crate::dto::AuthResponse,
        crate::dto::UserResponse,
        crate::dto::CreateUserRequest,
        crate::dto::UpdateUserRequest,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "auth", description = "Login and registration"),
        (name = "users", description = "User management"),
        (name = "system", description = "Health and system status"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds the Bearer JWT security scheme to the OpenAPI spec.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Token returned by /api/auth/login or /api/auth/register.",
                        ))
                        .build(),
                ),
            );
        }
    }
}
