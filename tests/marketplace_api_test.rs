use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<JsonValue>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn read_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn build_app(app_state: bara_backend::AppState) -> Router {
    use bara_backend::{middleware, routes};

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route("/api/jobs", get(routes::jobs::list_jobs))
        .route("/api/jobs/:id", get(routes::jobs::get_job))
        .route("/api/courses", get(routes::courses::list_courses))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(100),
            middleware::rate_limit::rps_middleware,
        ));

    let auth_api = Router::new()
        .route(
            "/api/auth/signup/candidate",
            post(routes::account::signup_candidate),
        )
        .route(
            "/api/auth/signup/employer",
            post(routes::account::signup_employer),
        )
        .route("/api/auth/login", post(routes::account::login));

    let profile_api = Router::new()
        .route(
            "/api/me",
            get(routes::account::me).patch(routes::account::update_me),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_bearer_auth,
        ));

    let candidate_api = Router::new()
        .route(
            "/api/jobs/:id/apply",
            post(routes::applications::apply_for_job),
        )
        .route(
            "/api/courses/register",
            post(routes::applications::register_for_course),
        )
        .route(
            "/api/me/applications",
            get(routes::applications::my_applications),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_candidate,
        ));

    let employer_api = Router::new()
        .route(
            "/api/employer/jobs",
            get(routes::jobs::my_jobs).post(routes::jobs::publish_job),
        )
        .route(
            "/api/employer/applications",
            get(routes::applications::employer_applications),
        )
        .route(
            "/api/employer/stats",
            get(routes::applications::employer_stats),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_employer,
        ));

    base_routes
        .merge(public_api)
        .merge(auth_api)
        .merge(profile_api)
        .merge(candidate_api)
        .merge(employer_api)
        .with_state(app_state)
}

#[tokio::test]
async fn marketplace_flow_end_to_end() {
    dotenvy::dotenv().ok();
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var("OPENAI_API_KEY", "sk-test");
    env::set_var("PUBLIC_RPS", "100");
    env::set_var("ACCOUNT_RPS", "100");

    bara_backend::config::init_config().expect("init config");

    let store = bara_backend::store::ListingStore::new();
    bara_backend::store::seed::seed_demo_data(&store).expect("seed");
    let app = build_app(bara_backend::AppState::new(store));

    let resp = app
        .clone()
        .oneshot(request("GET", "/health", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Seeded catalogue, newest first.
    let resp = app
        .clone()
        .oneshot(request("GET", "/api/jobs", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["title"], "Mécanicien Automobile");
    assert_eq!(items[0]["type"], "Temps plein");

    let resp = app
        .clone()
        .oneshot(request("GET", "/api/courses", None, None))
        .await
        .unwrap();
    let body = read_json(resp).await;
    let courses = body["items"].as_array().unwrap();
    assert_eq!(courses.len(), 6);
    assert!(courses[0]["hasCertification"].as_bool().unwrap());

    // Demo employer can log in with the seeded credentials.
    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "contact@ccc.com", "password": "password"})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let employer_token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["user"]["role"], "employer");

    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "contact@ccc.com", "password": "wrong"})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Publish a new offer; it appears first in the public listing.
    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/employer/jobs",
            Some(&employer_token),
            Some(json!({
                "title": "Soudeur Qualifié pour Atelier Naval",
                "category": "Soudure",
                "location": "Conakry, Guinée",
                "type": "Temps plein",
                "description": "Assemblage et soudure de structures métalliques pour chantiers navals."
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let job = read_json(resp).await;
    assert_eq!(job["company"], "Conakry Constructions Co.");
    let job_id = job["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(request("GET", "/api/jobs", None, None))
        .await
        .unwrap();
    let body = read_json(resp).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 7);
    assert_eq!(items[0]["title"], "Soudeur Qualifié pour Atelier Naval");

    let resp = app
        .clone()
        .oneshot(request(
            "GET",
            &format!("/api/jobs/{}", job_id),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["title"], "Soudeur Qualifié pour Atelier Naval");

    let resp = app
        .clone()
        .oneshot(request(
            "GET",
            &format!("/api/jobs/{}", Uuid::new_v4()),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Candidate signup; duplicate email is rejected.
    let signup = json!({
        "first_name": "Ousmane",
        "last_name": "Yattara",
        "email": "ousmane@exemple.com",
        "password": "secret123",
        "specialty": "Soudeur",
        "bio": "Dix ans d'expérience en soudure industrielle."
    });
    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/auth/signup/candidate",
            None,
            Some(signup.clone()),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    let candidate_token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["user"]["role"], "candidate");

    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/auth/signup/candidate",
            None,
            Some(signup),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Role and auth gates on applying.
    let apply_uri = format!("/api/jobs/{}/apply", job_id);
    let cover = json!({"cover_letter": "Je maîtrise la soudure TIG et MIG depuis dix ans."});

    let resp = app
        .clone()
        .oneshot(request("POST", &apply_uri, None, Some(cover.clone())))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            &apply_uri,
            Some(&employer_token),
            Some(cover.clone()),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            &apply_uri,
            Some(&candidate_token),
            Some(json!({"cover_letter": "Court."})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            &apply_uri,
            Some(&candidate_token),
            Some(cover.clone()),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(request("POST", &apply_uri, Some(&candidate_token), Some(cover)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Course registration requires an existing course.
    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/courses/register",
            Some(&candidate_token),
            Some(json!({
                "course_title": "Câblage Électrique Avancé",
                "provider": "Institut Technique de Conakry"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/courses/register",
            Some(&candidate_token),
            Some(json!({
                "course_title": "Formation Inconnue",
                "provider": "Nulle Part"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Candidate sees their own activity.
    let resp = app
        .clone()
        .oneshot(request(
            "GET",
            "/api/me/applications",
            Some(&candidate_token),
            None,
        ))
        .await
        .unwrap();
    let body = read_json(resp).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["items"][0]["job"]["title"],
        "Soudeur Qualifié pour Atelier Naval"
    );
    assert_eq!(body["registrations"].as_array().unwrap().len(), 1);

    // Employer inbox embeds the applicant profile but never the email.
    let resp = app
        .clone()
        .oneshot(request(
            "GET",
            "/api/employer/applications",
            Some(&employer_token),
            None,
        ))
        .await
        .unwrap();
    let body = read_json(resp).await;
    let received = body["items"].as_array().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["applicant"]["first_name"], "Ousmane");
    assert_eq!(received[0]["applicant"]["specialty"], "Soudeur");
    assert!(received[0]["applicant"].get("email").is_none());

    let resp = app
        .clone()
        .oneshot(request(
            "GET",
            "/api/employer/stats",
            Some(&employer_token),
            None,
        ))
        .await
        .unwrap();
    let body = read_json(resp).await;
    let stats = body["items"].as_array().unwrap();
    assert_eq!(stats.len(), 4);
    let soudeur = stats
        .iter()
        .find(|s| s["jobTitle"] == "Soudeur Qualifié pour Atelier Naval")
        .unwrap();
    assert_eq!(soudeur["applications"], 1);

    let resp = app
        .clone()
        .oneshot(request(
            "GET",
            "/api/employer/jobs",
            Some(&employer_token),
            None,
        ))
        .await
        .unwrap();
    let body = read_json(resp).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 4);

    // Profile read and update.
    let resp = app
        .clone()
        .oneshot(request("GET", "/api/me", Some(&candidate_token), None))
        .await
        .unwrap();
    let body = read_json(resp).await;
    assert_eq!(body["profile"]["first_name"], "Ousmane");

    let resp = app
        .clone()
        .oneshot(request(
            "PATCH",
            "/api/me",
            Some(&candidate_token),
            Some(json!({"bio": "Soudeur certifié, disponible pour missions à Conakry."})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(
        body["profile"]["bio"],
        "Soudeur certifié, disponible pour missions à Conakry."
    );
}
