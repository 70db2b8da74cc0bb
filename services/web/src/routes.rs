use crate::infra::{AppState, SiteState};
use apprentice_watch::analytics::{fire_and_forget, AnalyticsEvent};
use apprentice_watch::directory::ResolvedLogo;
use apprentice_watch::error::AppError;
use apprentice_watch::listings::views::LISTINGS_ROUTE;
use apprentice_watch::listings::{ListingCardView, ListingDetailView};
use apprentice_watch::pages::landing::{LandingView, SEARCH_ROUTE};
use apprentice_watch::pages::{landing, listings, sign_in, team};
use apprentice_watch::stats::{StatCell, StatPayload};
use apprentice_watch::team::{organization_json_ld, roster, TeamRoster};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::{debug, info};

pub(crate) fn site_router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route(LISTINGS_ROUTE, get(listings_page))
        .route("/apprenticeships/:listing_id", get(listing_detail_page))
        .route(SEARCH_ROUTE, get(search_redirect).post(search_redirect))
        .route("/signin", get(sign_in_page))
        .route("/team", get(team_page))
        .route(
            "/api/v1/stats/active-vacancies",
            get(active_vacancies_endpoint),
        )
        .route("/api/v1/logo", get(logo_endpoint))
        .with_state(state)
}

pub(crate) fn with_site_routes(state: SiteState) -> Router {
    site_router(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn landing_page(State(state): State<SiteState>) -> Html<String> {
    let mut cell = StatCell::spawn(state.source.clone());
    let active_vacancies = cell.settle(state.stat_deadline).await;
    debug!(stat = active_vacancies.state_name(), "rendering landing page");

    let view = LandingView::build(&state.logos, active_vacancies);
    Html(landing::render(&view))
}

pub(crate) async fn listings_page(
    State(state): State<SiteState>,
) -> Result<Html<String>, AppError> {
    let cards: Vec<ListingCardView> = state
        .source
        .listings()
        .await?
        .iter()
        .map(|listing| ListingCardView::build(listing, &state.logos))
        .collect();

    Ok(Html(listings::render_index(&cards)))
}

pub(crate) async fn listing_detail_page(
    State(state): State<SiteState>,
    Path(listing_id): Path<String>,
) -> Result<Response, AppError> {
    let Some(listing) = state.source.listing(&listing_id).await? else {
        info!(%listing_id, "listing not found");
        let page = listings::render_not_found(&listing_id);
        return Ok((StatusCode::NOT_FOUND, Html(page)).into_response());
    };

    let view = ListingDetailView::build(&listing, &state.logos);
    fire_and_forget(
        state.analytics.clone(),
        AnalyticsEvent::listing_viewed(view.analytics_label()),
    );

    Ok(Html(listings::render_detail(&view)).into_response())
}

/// Search lives on the listings page; submissions just navigate there.
pub(crate) async fn search_redirect() -> Redirect {
    Redirect::to(LISTINGS_ROUTE)
}

pub(crate) async fn sign_in_page() -> Html<String> {
    Html(sign_in::render())
}

pub(crate) async fn team_page(State(state): State<SiteState>) -> Html<String> {
    let members = roster();
    let organization = organization_json_ld(&state.site_url, &members);
    Html(team::render(&TeamRoster::partition(&members), &organization))
}

pub(crate) async fn active_vacancies_endpoint(
    State(state): State<SiteState>,
) -> Json<StatPayload> {
    let mut cell = StatCell::spawn(state.source.clone());
    Json(cell.settle(state.stat_deadline).await.payload())
}

#[derive(Debug, Deserialize)]
pub(crate) struct LogoQuery {
    #[serde(default)]
    pub(crate) employer: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LogoResponse {
    pub(crate) employer: String,
    #[serde(flatten)]
    pub(crate) logo: ResolvedLogo,
}

pub(crate) async fn logo_endpoint(
    State(state): State<SiteState>,
    Query(query): Query<LogoQuery>,
) -> Json<LogoResponse> {
    let logo = state.logos.resolve(&query.employer);
    Json(LogoResponse {
        employer: query.employer,
        logo,
    })
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(Ordering::Acquire) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
