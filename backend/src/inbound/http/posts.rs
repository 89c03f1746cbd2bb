//! News post endpoints.
//!
//! ```text
//! GET    /api/news/all          Public feed, newest first
//! POST   /api/news              Publish a post (multipart form)
//! POST   /api/news/edit/{id}    Edit inside the 2-hour window (multipart form)
//! DELETE /api/news/delete/{id}  Delete at any age
//! ```
//!
//! Create and edit accept `multipart/form-data` so image files travel with
//! the text fields from a plain HTML form. The feed stays unauthenticated;
//! every mutation needs an admin session.

use actix_multipart::form::{MultipartForm, bytes::Bytes, text::Text};
use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::ports::{ImageUpload, PostSubmission};
use crate::domain::{Category, Error, PostId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::posts_dto::{NewsDeleteResponse, NewsItemDto, NewsItemResponse};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Create/edit form payload.
#[derive(MultipartForm)]
pub struct NewsPostForm {
    /// Headline text field.
    pub headline: Option<Text<String>>,
    /// Body text field.
    pub description: Option<Text<String>>,
    /// Category display name.
    pub category: Option<Text<String>>,
    /// Image files, any number.
    #[multipart(rename = "images")]
    pub images: Vec<Bytes>,
}

impl NewsPostForm {
    /// Turn the raw form into a submission, validating the category.
    fn into_submission(self) -> Result<PostSubmission, Error> {
        let category = match self.category.map(Text::into_inner) {
            // An unpicked category arrives as a missing or empty field.
            None => None,
            Some(raw) if raw.is_empty() => None,
            Some(raw) => Some(
                raw.parse::<Category>()
                    .map_err(|_| Error::invalid_request("Invalid category"))?,
            ),
        };
        let images = self
            .images
            .into_iter()
            .map(|file| ImageUpload {
                file_name: file.file_name,
                bytes: file.data.to_vec(),
            })
            .collect();
        Ok(PostSubmission {
            headline: self.headline.map(Text::into_inner).unwrap_or_default(),
            description: self.description.map(Text::into_inner).unwrap_or_default(),
            category,
            images,
        })
    }
}

/// Unknown and malformed ids both answer like a missing post.
fn parse_post_id(raw: &str) -> Result<PostId, Error> {
    raw.parse::<PostId>()
        .map_err(|_| Error::not_found("Post not found"))
}

/// Public news feed, newest first.
#[utoipa::path(
    get,
    path = "/api/news/all",
    security(),
    responses(
        (status = 200, description = "All posts, newest first", body = [NewsItemDto])
    ),
    tags = ["news"],
    operation_id = "listNews"
)]
#[get("/news/all")]
pub async fn list_news(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let items: Vec<NewsItemDto> = posts.into_iter().map(NewsItemDto::from).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// Publish a new post.
#[utoipa::path(
    post,
    path = "/api/news",
    responses(
        (status = 201, description = "Post published", body = NewsItemResponse),
        (status = 400, description = "Empty post or invalid category", body = crate::domain::Error),
        (status = 401, description = "Login required", body = crate::domain::Error)
    ),
    tags = ["news"],
    operation_id = "createNews"
)]
#[post("/news")]
pub async fn create_news(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: MultipartForm<NewsPostForm>,
) -> ApiResult<HttpResponse> {
    let admin = session.require_admin()?;
    let submission = form.into_inner().into_submission()?;
    let post = state.posts.create(submission, &admin.display_name).await?;
    Ok(HttpResponse::Created().json(NewsItemResponse::new(post)))
}

/// Edit an existing post inside its edit window.
#[utoipa::path(
    post,
    path = "/api/news/edit/{id}",
    responses(
        (status = 200, description = "Post updated", body = NewsItemResponse),
        (status = 400, description = "Empty post or invalid category", body = crate::domain::Error),
        (status = 401, description = "Login required", body = crate::domain::Error),
        (status = 403, description = "Edit window expired", body = crate::domain::Error),
        (status = 404, description = "Post not found", body = crate::domain::Error)
    ),
    params(("id" = String, Path, description = "Post identifier")),
    tags = ["news"],
    operation_id = "editNews"
)]
#[post("/news/edit/{id}")]
pub async fn edit_news(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    form: MultipartForm<NewsPostForm>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let id = parse_post_id(&path.into_inner())?;
    let submission = form.into_inner().into_submission()?;
    let post = state.posts.edit(&id, submission).await?;
    Ok(HttpResponse::Ok().json(NewsItemResponse::new(post)))
}

/// Delete a post; never gated by the edit window.
#[utoipa::path(
    delete,
    path = "/api/news/delete/{id}",
    responses(
        (status = 200, description = "Post deleted", body = NewsDeleteResponse),
        (status = 401, description = "Login required", body = crate::domain::Error),
        (status = 404, description = "Post not found", body = crate::domain::Error)
    ),
    params(("id" = String, Path, description = "Post identifier")),
    tags = ["news"],
    operation_id = "deleteNews"
)]
#[delete("/news/delete/{id}")]
pub async fn delete_news(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let id = parse_post_id(&path.into_inner())?;
    state.posts.delete(&id).await?;
    Ok(HttpResponse::Ok().json(NewsDeleteResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        MockAdminAccess, MockEmployeeVerifier, MockLoginService, MockPostService,
    };
    use crate::domain::{AdminAccount, EmployeeId, Post, PostDraft};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse as Response, test as actix_test};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use std::sync::Arc;

    fn sample_post(headline: &str) -> Post {
        let draft = PostDraft::try_new(headline.to_owned(), "Body".to_owned(), None, 0)
            .expect("valid draft");
        Post::publish(
            draft,
            Vec::new(),
            "Ada Lovelace".to_owned(),
            Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
                .single()
                .expect("timestamp"),
        )
    }

    fn test_app(
        posts: MockPostService,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState {
            verifier: Arc::new(MockEmployeeVerifier::new()),
            login: Arc::new(MockLoginService::new()),
            admins: Arc::new(MockAdminAccess::new()),
            posts: Arc::new(posts),
        };
        App::new()
            .app_data(web::Data::new(state))
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .route(
                "/test-login",
                web::get().to(|session: SessionContext| async move {
                    let account = AdminAccount {
                        employee_id: EmployeeId::new("9025857").expect("valid id"),
                        display_name: "Ada Lovelace".to_owned(),
                    };
                    session.persist_admin(&account)?;
                    Ok::<_, Error>(Response::Ok())
                }),
            )
            .service(
                web::scope("/api")
                    .service(list_news)
                    .service(create_news)
                    .service(edit_news)
                    .service(delete_news),
            )
    }

    async fn admin_cookie(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> actix_web::cookie::Cookie<'static> {
        let response = actix_test::call_service(
            app,
            actix_test::TestRequest::get().uri("/test-login").to_request(),
        )
        .await;
        response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    fn multipart_body(fields: &[(&str, &str)]) -> (String, Vec<u8>) {
        let boundary = "test-boundary";
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            );
            body.extend_from_slice(value.as_bytes());
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        (
            format!("multipart/form-data; boundary={boundary}"),
            body,
        )
    }

    #[actix_web::test]
    async fn feed_is_public_and_newest_first() {
        let mut posts = MockPostService::new();
        posts
            .expect_list()
            .returning(|| Ok(vec![sample_post("newer"), sample_post("older")]));
        let app = actix_test::init_service(test_app(posts)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/news/all").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        let items = body.as_array().expect("bare JSON array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["headline"], "newer");
        assert!(items[0].get("image_urls").is_some(), "legacy key is snake_case");
    }

    #[actix_web::test]
    async fn create_without_session_is_unauthorised() {
        let app = actix_test::init_service(test_app(MockPostService::new())).await;
        let (content_type, body) = multipart_body(&[("headline", "New post")]);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/news")
                .insert_header(("content-type", content_type))
                .set_payload(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_publishes_under_the_session_author() {
        let mut posts = MockPostService::new();
        posts
            .expect_create()
            .withf(|submission, author| {
                submission.headline == "Quarterly results"
                    && submission.category == Some(Category::Finance)
                    && author == "Ada Lovelace"
            })
            .returning(|submission, author| {
                let draft = PostDraft::try_new(
                    submission.headline.clone(),
                    submission.description.clone(),
                    submission.category,
                    0,
                )
                .expect("valid draft");
                Ok(Post::publish(
                    draft,
                    Vec::new(),
                    author.to_owned(),
                    Utc::now(),
                ))
            });
        let app = actix_test::init_service(test_app(posts)).await;
        let cookie = admin_cookie(&app).await;

        let (content_type, body) = multipart_body(&[
            ("headline", "Quarterly results"),
            ("description", "Strong quarter."),
            ("category", "Finance"),
        ]);
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/news")
                .cookie(cookie)
                .insert_header(("content-type", content_type))
                .set_payload(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["item"]["headline"], "Quarterly results");
        assert_eq!(body["item"]["author"], "Ada Lovelace");
    }

    #[actix_web::test]
    async fn unknown_category_is_a_bad_request() {
        // Service must not be reached.
        let app = actix_test::init_service(test_app(MockPostService::new())).await;
        let cookie = admin_cookie(&app).await;

        let (content_type, body) =
            multipart_body(&[("headline", "x"), ("category", "Sports")]);
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/news")
                .cookie(cookie)
                .insert_header(("content-type", content_type))
                .set_payload(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "Invalid category");
    }

    #[actix_web::test]
    async fn expired_edit_window_surfaces_as_forbidden() {
        let mut posts = MockPostService::new();
        posts.expect_edit().returning(|_, _| {
            Err(Error::forbidden(
                "Posts can only be edited within 2 hours of creation",
            ))
        });
        let app = actix_test::init_service(test_app(posts)).await;
        let cookie = admin_cookie(&app).await;

        let (content_type, body) = multipart_body(&[("headline", "Updated")]);
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/news/edit/72a2e8f0-0f5e-4f1f-9c55-3f1b4f7a9d10")
                .cookie(cookie)
                .insert_header(("content-type", content_type))
                .set_payload(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body["message"],
            "Posts can only be edited within 2 hours of creation"
        );
    }

    #[actix_web::test]
    async fn malformed_post_id_reads_as_missing() {
        let app = actix_test::init_service(test_app(MockPostService::new())).await;
        let cookie = admin_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/news/delete/not-a-uuid")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "Post not found");
    }

    #[actix_web::test]
    async fn delete_acknowledges_success() {
        let mut posts = MockPostService::new();
        posts.expect_delete().returning(|_| Ok(()));
        let app = actix_test::init_service(test_app(posts)).await;
        let cookie = admin_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/news/delete/72a2e8f0-0f5e-4f1f-9c55-3f1b4f7a9d10")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!({ "success": true }));
    }
}
