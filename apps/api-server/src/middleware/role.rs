//! Role extraction.
//!
//! Session management is an external collaborator; it hands us the acting
//! role as the `X-Role` header and attribution as `X-User-Id`/`X-User-Name`.
//! Extraction never fails: a missing or unrecognized role is the
//! unrecognized viewer (`None`), not an error.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};
use uuid::Uuid;

use comms_core::domain::Role;

pub const ROLE_HEADER: &str = "x-role";
pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";

/// The acting user's context for a single request.
///
/// Use this in handlers to scope reads and gate mutations:
/// ```ignore
/// async fn list(ctx: RoleContext) -> impl Responder {
///     format!("acting as {:?}", ctx.role)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RoleContext {
    /// `None` means the role string was absent or outside the closed set.
    pub role: Option<Role>,
    pub user_id: Uuid,
    pub user_name: String,
}

impl FromRequest for RoleContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        let raw_role = header(ROLE_HEADER);
        let role = raw_role.and_then(Role::parse);
        if let Some(raw) = raw_role {
            if role.is_none() {
                tracing::debug!(raw, "Unrecognized role header, treating as read-only viewer");
            }
        }

        let user_id = header(USER_ID_HEADER)
            .and_then(|s| Uuid::parse_str(s).ok())
            .unwrap_or(Uuid::nil());
        let user_name = header(USER_NAME_HEADER).unwrap_or("anonymous").to_string();

        ready(Ok(RoleContext {
            role,
            user_id,
            user_name,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    async fn extract(req: TestRequest) -> RoleContext {
        let (req, mut payload) = req.to_http_parts();
        RoleContext::from_request(&req, &mut payload).await.unwrap()
    }

    #[actix_web::test]
    async fn known_role_header_is_parsed() {
        let ctx = extract(TestRequest::default().insert_header(("X-Role", "Admin"))).await;
        assert_eq!(ctx.role, Some(Role::Admin));
    }

    #[actix_web::test]
    async fn missing_or_unknown_role_is_none_not_an_error() {
        let ctx = extract(TestRequest::default()).await;
        assert_eq!(ctx.role, None);

        let ctx = extract(TestRequest::default().insert_header(("X-Role", "superuser"))).await;
        assert_eq!(ctx.role, None);
        assert_eq!(ctx.user_name, "anonymous");
        assert!(ctx.user_id.is_nil());
    }
}
