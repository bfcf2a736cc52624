use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, MutexGuard};
use tracing::{debug, error};

use chrono::Utc;
use clickchess_core::layout::BoardLayout;
use clickchess_core::{BoardEvents, BoardView, ColorRole, Square};

use crate::view::Toast;
use crate::{AppState, WebGame};

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub title: String,
    pub rows: Vec<Vec<SquareCell>>,
    pub input_enabled: bool,
    pub last_move: String,
    pub history: Vec<String>,
    pub toasts: Vec<ToastCell>,
    pub choices: Vec<ChoiceCell>,
    pub promotion_color: String,
}

pub struct SquareCell {
    pub name: String,
    pub glyph: String,
    pub color: String,
}

pub struct ToastCell {
    pub message: String,
    pub color: String,
    pub seconds: f32,
}

pub struct ChoiceCell {
    pub letter: char,
    pub glyph: char,
}

#[derive(Serialize)]
pub struct StateResponse {
    pub board: BoardView,
    pub toasts: Vec<Toast>,
    pub awaiting_promotion: bool,
    pub fen: String,
}

#[derive(Deserialize)]
pub struct ResizeForm {
    pub width: f32,
    pub height: f32,
}

fn lock_game(state: &AppState) -> Result<MutexGuard<'_, WebGame>, StatusCode> {
    state.game.lock().map_err(|_| {
        error!("game state lock poisoned");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    let mut game = lock_game(&state)?;
    let now = Utc::now();
    game.view_mut().prune(now);

    let palette = &state.config.palette;
    let board = game.view().board();

    let rows = (0..8u8)
        .rev()
        .map(|rank| {
            (0..8u8)
                .filter_map(|file| Square::new(file, rank))
                .map(|square| SquareCell {
                    name: square.name(),
                    glyph: board.glyph(square).map(String::from).unwrap_or_default(),
                    color: palette.color(board.color(square)).to_string(),
                })
                .collect()
        })
        .collect();

    let toasts = game
        .view()
        .live_toasts(now)
        .into_iter()
        .map(|toast| ToastCell {
            color: palette.color(toast.notification.color).to_string(),
            message: toast.notification.message,
            seconds: toast.notification.duration_seconds,
        })
        .collect();

    let choices = board
        .promotion_choices()
        .iter()
        .map(|choice| ChoiceCell {
            letter: choice.letter,
            glyph: choice.glyph,
        })
        .collect();

    let template = BoardTemplate {
        title: "Click Chess".to_string(),
        rows,
        input_enabled: board.is_input_enabled(),
        last_move: board.last_move_text().to_string(),
        history: board.history().to_vec(),
        toasts,
        choices,
        promotion_color: palette.color(ColorRole::Promotion).to_string(),
    };

    template.render().map(Html).map_err(|e| {
        error!(error = %e, "template render failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub async fn state(State(state): State<Arc<AppState>>) -> Result<Json<StateResponse>, StatusCode> {
    let mut game = lock_game(&state)?;
    let now = Utc::now();
    game.view_mut().prune(now);
    Ok(Json(StateResponse {
        board: game.view().board().clone(),
        toasts: game.view().live_toasts(now),
        awaiting_promotion: game.is_awaiting_promotion(),
        fen: game.engine().fen(),
    }))
}

pub async fn click(
    State(state): State<Arc<AppState>>,
    Path(square): Path<String>,
) -> Result<Redirect, StatusCode> {
    let mut game = lock_game(&state)?;
    let outcome = game.on_square_clicked(&square);
    debug!(%square, ?outcome, "click");
    Ok(Redirect::to("/"))
}

pub async fn promote(
    State(state): State<Arc<AppState>>,
    Path(letter): Path<String>,
) -> Result<Redirect, StatusCode> {
    let mut game = lock_game(&state)?;
    let outcome = game.on_promotion_choice_clicked(&letter);
    debug!(%letter, ?outcome, "promotion choice");
    Ok(Redirect::to("/"))
}

pub async fn undo(State(state): State<Arc<AppState>>) -> Result<Redirect, StatusCode> {
    let mut game = lock_game(&state)?;
    let undone = game.on_undo_requested();
    debug!(undone, "undo");
    Ok(Redirect::to("/"))
}

pub async fn resize(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ResizeForm>,
) -> Result<Json<Option<BoardLayout>>, StatusCode> {
    let mut game = lock_game(&state)?;
    game.on_resize(form.width, form.height);
    Ok(Json(game.layout().cloned()))
}

pub async fn health() -> impl IntoResponse {
    "OK"
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use clickchess_core::InterfaceConfig;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::{app, AppState};

    fn router(fen: Option<&str>) -> Router {
        router_with(InterfaceConfig {
            start_fen: fen.map(String::from),
            ..InterfaceConfig::default()
        })
    }

    fn router_with(config: InterfaceConfig) -> Router {
        app(Arc::new(AppState::new(config).unwrap()))
    }

    async fn post(router: &Router, uri: &str) -> StatusCode {
        let response = router
            .clone()
            .oneshot(Request::post(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    async fn get_json(router: &Router, uri: &str) -> serde_json::Value {
        let response = router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn get_text(router: &Router, uri: &str) -> String {
        let response = router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(get_text(&router(None), "/health").await, "OK");
    }

    #[tokio::test]
    async fn test_board_page_renders() {
        let page = get_text(&router(None), "/").await;
        assert!(page.contains("/click/e2"));
        assert!(page.contains("♚"));
        assert!(page.contains("No moves yet"));
    }

    #[tokio::test]
    async fn test_click_pair_moves_piece() {
        let router = router(None);
        assert_eq!(post(&router, "/click/e2").await, StatusCode::SEE_OTHER);
        assert_eq!(post(&router, "/click/e4").await, StatusCode::SEE_OTHER);

        let state = get_json(&router, "/state").await;
        assert_eq!(state["board"]["last_move_text"], "e2e4");
        assert_eq!(state["board"]["history"][0], "⏹   e4");
        assert_eq!(state["awaiting_promotion"], false);
    }

    #[tokio::test]
    async fn test_illegal_move_toast_is_live() {
        let router = router(None);
        post(&router, "/click/e2").await;
        post(&router, "/click/e5").await;

        let state = get_json(&router, "/state").await;
        assert_eq!(state["toasts"][0]["notification"]["message"], "Illegal Move!");

        let page = get_text(&router, "/").await;
        assert!(page.contains("Illegal Move!"));
    }

    #[tokio::test]
    async fn test_expired_notifications_are_dropped() {
        let router = router_with(InterfaceConfig {
            notification_seconds: 0.001,
            ..InterfaceConfig::default()
        });

        for _ in 0..50 {
            post(&router, "/click/e2").await;
            post(&router, "/click/e5").await;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        let state = get_json(&router, "/state").await;
        assert!(state["board"]["notifications"].as_array().unwrap().is_empty());
        assert!(state["toasts"].as_array().unwrap().is_empty());

        post(&router, "/click/e2").await;
        post(&router, "/click/e5").await;
        let state = get_json(&router, "/state").await;
        assert!(state["board"]["notifications"].as_array().unwrap().is_empty());
        assert!(state["toasts"].as_array().unwrap().len() <= 1);
    }

    #[tokio::test]
    async fn test_promotion_over_http() {
        let router = router(Some("7k/4P3/8/8/8/8/8/4K3 w - - 0 1"));
        post(&router, "/click/e7").await;
        post(&router, "/click/e8").await;

        let state = get_json(&router, "/state").await;
        assert_eq!(state["awaiting_promotion"], true);
        assert_eq!(state["board"]["promotion_choices"].as_array().unwrap().len(), 4);

        post(&router, "/promote/r").await;
        let state = get_json(&router, "/state").await;
        assert_eq!(state["awaiting_promotion"], false);
        assert_eq!(state["board"]["last_move_text"], "e7e8r");
        assert!(state["fen"].as_str().unwrap().starts_with("4R2k"));
    }

    #[tokio::test]
    async fn test_undo_over_http() {
        let router = router(None);
        post(&router, "/click/g1").await;
        post(&router, "/click/f3").await;
        assert_eq!(post(&router, "/undo").await, StatusCode::SEE_OTHER);

        let state = get_json(&router, "/state").await;
        assert_eq!(state["board"]["history"][0], "No moves yet");
    }

    #[tokio::test]
    async fn test_resize_returns_layout() {
        let router = router(None);
        let response = router
            .clone()
            .oneshot(
                Request::post("/resize")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("width=400&height=800"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let layout: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(layout["tile_len"], 0.0625);
        assert_eq!(layout["promotion_slots"].as_array().unwrap().len(), 4);
    }
}
