use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::ErrorCode)
    ),
    info(
        title = "User API",
        version = "0.1.0",
        description = "Create and list users. Ids are assigned by the server; \
                       logins are 1 to 64 characters.",
        terms_of_service = "User API terms of service",
        contact(name = "User API maintainers"),
        license(name = "MIT")
    ),
    nest(
        (path = "/user", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_user_operations() {
        let doc = ApiDoc::openapi();
        let user_path = doc.paths.paths.get("/user").expect("/user is documented");

        assert!(user_path.get.is_some());
        assert!(user_path.post.is_some());

        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("User"));
        assert!(schemas.contains_key("CreateUser"));
        assert!(schemas.contains_key("ErrorResponse"));
    }

    #[test]
    fn test_openapi_info_metadata() {
        let info = ApiDoc::openapi().info;

        assert_eq!(info.title, "User API");
        assert_eq!(info.terms_of_service.as_deref(), Some("User API terms of service"));
        assert_eq!(info.license.expect("license").name, "MIT");
        assert_eq!(
            info.contact.and_then(|c| c.name).as_deref(),
            Some("User API maintainers")
        );
    }
}
