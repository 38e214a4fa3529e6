use actix_web::web::Data;
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::error;

use super::data_service::{AppState, get_data_for_leaderboard};
use crate::view::export::export_scoreboard;
use crate::view::index::render_leaderboard_page;
use crate::view::json::{error_json, feed_json, team_scores_json};

const CORS_HEADER: (&str, &str) = ("Access-Control-Allow-Origin", "*");

pub async fn index(state: Data<AppState>) -> impl Responder {
    match get_data_for_leaderboard(state.get_ref()).await {
        Ok((leaderboard, last_refresh)) => {
            let markup = render_leaderboard_page(&state.title, &leaderboard, &last_refresh);
            HttpResponse::Ok()
                .content_type("text/html")
                .body(markup.into_string())
        }
        Err(e) => {
            error!("Error building leaderboard: {e}");
            HttpResponse::InternalServerError().json(error_json(&e.to_string()))
        }
    }
}

pub async fn team_scores(state: Data<AppState>) -> impl Responder {
    match get_data_for_leaderboard(state.get_ref()).await {
        Ok((leaderboard, last_refresh)) => HttpResponse::Ok()
            .insert_header(CORS_HEADER)
            .json(team_scores_json(&leaderboard, &last_refresh)),
        Err(e) => {
            error!("Error in team_scores: {e}");
            HttpResponse::InternalServerError()
                .insert_header(CORS_HEADER)
                .json(error_json(&e.to_string()))
        }
    }
}

pub async fn scores(state: Data<AppState>) -> impl Responder {
    match crate::score::load_feed(state.feed.as_ref()).await {
        Ok((players, _source)) => HttpResponse::Ok()
            .insert_header(CORS_HEADER)
            .json(feed_json(&players)),
        Err(e) => {
            error!("Error in scores: {e}");
            HttpResponse::InternalServerError()
                .insert_header(CORS_HEADER)
                .json(error_json(&e.to_string()))
        }
    }
}

pub async fn generate_report(state: Data<AppState>) -> impl Responder {
    let leaderboard = match get_data_for_leaderboard(state.get_ref()).await {
        Ok((leaderboard, _)) => leaderboard,
        Err(e) => return HttpResponse::InternalServerError().json(error_json(&e.to_string())),
    };

    let data_dir = state.data_dir.clone();
    let written =
        web::block(move || export_scoreboard(&data_dir, &leaderboard.standings)).await;
    match written {
        Ok(Ok(path)) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Report generated successfully",
            "file_path": path.display().to_string(),
        })),
        Ok(Err(e)) => HttpResponse::InternalServerError().json(error_json(&e.to_string())),
        Err(e) => HttpResponse::InternalServerError().json(error_json(&e.to_string())),
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/api/team-scores", web::get().to(team_scores))
        .route("/api/scores", web::get().to(scores))
        .route("/api/generate-report", web::post().to(generate_report))
        .route("/health", web::get().to(health));
}
