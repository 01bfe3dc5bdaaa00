//! Communication board handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use comms_shared::ApiResponse;
use comms_shared::dto::{CreateCommunicationRequest, ListQuery};

use comms_core::domain::CommunicationPatch;

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::role::RoleContext;
use crate::state::AppState;

/// GET /api/communications
pub async fn list(
    state: web::Data<AppState>,
    ctx: RoleContext,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let criteria = query.criteria().map_err(AppError::BadRequest)?;
    let page_request = query.page_request(state.default_page_size);

    let page = state.board.list(ctx.role, criteria, page_request).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(page)))
}

/// GET /api/communications/stats
pub async fn stats(state: web::Data<AppState>, ctx: RoleContext) -> AppResult<HttpResponse> {
    let stats = state.board.stats(ctx.role).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(stats)))
}

/// GET /api/communications/{id}
pub async fn get_one(
    state: web::Data<AppState>,
    ctx: RoleContext,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let comm = state.board.get(ctx.role, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comm)))
}

/// POST /api/communications
pub async fn create(
    state: web::Data<AppState>,
    ctx: RoleContext,
    body: web::Json<CreateCommunicationRequest>,
) -> AppResult<HttpResponse> {
    let draft = body
        .into_inner()
        .into_draft(ctx.user_id, ctx.user_name.clone());
    let comm = state.board.create(ctx.role, draft).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(comm)))
}

/// PATCH /api/communications/{id}
pub async fn update(
    state: web::Data<AppState>,
    ctx: RoleContext,
    path: web::Path<Uuid>,
    body: web::Json<CommunicationPatch>,
) -> AppResult<HttpResponse> {
    let comm = state
        .board
        .update(ctx.role, path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comm)))
}

/// DELETE /api/communications/{id}
pub async fn delete(
    state: web::Data<AppState>,
    ctx: RoleContext,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.board.delete(ctx.role, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/communications/{id}/read
pub async fn record_read(
    state: web::Data<AppState>,
    ctx: RoleContext,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let comm = state.board.record_read(ctx.role, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comm)))
}

/// POST /api/communications/{id}/like
pub async fn record_like(
    state: web::Data<AppState>,
    ctx: RoleContext,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let comm = state.board.record_like(ctx.role, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comm)))
}

/// POST /api/communications/{id}/comment
pub async fn record_comment(
    state: web::Data<AppState>,
    ctx: RoleContext,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let comm = state
        .board
        .record_comment(ctx.role, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comm)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use comms_infra::{InMemoryBoard, seed};
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState {
            board: Arc::new(InMemoryBoard::from_pool(seed::demo_pool())),
            default_page_size: 10,
        }
    }

    macro_rules! spawn_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_state()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn volunteer_list_excludes_other_segments_and_drafts() {
        let app = spawn_app!();
        let req = test::TestRequest::get()
            .uri("/api/communications")
            .insert_header(("X-Role", "volunteer"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let items = body["data"]["items"].as_array().unwrap();
        assert!(!items.is_empty());
        for item in items {
            assert!(matches!(
                item["target_audience"].as_str().unwrap(),
                "all" | "volunteers"
            ));
            assert_eq!(item["status"], "published");
        }
    }

    #[actix_web::test]
    async fn admin_sees_more_than_an_anonymous_viewer() {
        let app = spawn_app!();
        let admin_req = test::TestRequest::get()
            .uri("/api/communications/stats")
            .insert_header(("X-Role", "admin"))
            .to_request();
        let admin: Value = test::call_and_read_body_json(&app, admin_req).await;

        let anon_req = test::TestRequest::get()
            .uri("/api/communications/stats")
            .to_request();
        let anon: Value = test::call_and_read_body_json(&app, anon_req).await;

        assert!(admin["data"]["total"].as_u64() > anon["data"]["total"].as_u64());
    }

    #[actix_web::test]
    async fn create_requires_the_create_capability() {
        let app = spawn_app!();
        let body = json!({
            "title": "Hello",
            "content": "World",
            "type": "news",
            "target_audience": "all"
        });

        let denied = test::TestRequest::post()
            .uri("/api/communications")
            .insert_header(("X-Role", "volunteer"))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, denied).await;
        assert_eq!(resp.status(), 403);

        let allowed = test::TestRequest::post()
            .uri("/api/communications")
            .insert_header(("X-Role", "hr"))
            .insert_header(("X-User-Name", "Pat from HR"))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, allowed).await;
        assert_eq!(resp.status(), 201);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["data"]["status"], "draft");
        assert_eq!(created["data"]["author_name"], "Pat from HR");
    }

    #[actix_web::test]
    async fn validation_errors_carry_the_offending_fields() {
        let app = spawn_app!();
        let body = json!({
            "title": "   ",
            "content": "x",
            "type": "announcement",
            "target_audience": "leads"
        });
        let req = test::TestRequest::post()
            .uri("/api/communications")
            .insert_header(("X-Role", "admin"))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);
        let problem: Value = test::read_body_json(resp).await;
        assert_eq!(problem["type"], "validation");
        assert_eq!(problem["fields"], json!(["title"]));
    }

    #[actix_web::test]
    async fn deleting_a_published_item_is_a_conflict() {
        let app = spawn_app!();
        let list_req = test::TestRequest::get()
            .uri("/api/communications?status=published")
            .insert_header(("X-Role", "admin"))
            .to_request();
        let listed: Value = test::call_and_read_body_json(&app, list_req).await;
        let id = listed["data"]["items"][0]["id"].as_str().unwrap().to_string();

        let del_req = test::TestRequest::delete()
            .uri(&format!("/api/communications/{id}"))
            .insert_header(("X-Role", "admin"))
            .to_request();
        let resp = test::call_service(&app, del_req).await;
        assert_eq!(resp.status(), 409);
        let problem: Value = test::read_body_json(resp).await;
        assert_eq!(problem["type"], "invalid-transition");
    }

    #[actix_web::test]
    async fn unknown_type_filter_is_a_bad_request() {
        let app = spawn_app!();
        let req = test::TestRequest::get()
            .uri("/api/communications?type=bulletin")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
