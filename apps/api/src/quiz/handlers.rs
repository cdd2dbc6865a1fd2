//! Axum route handlers for the quiz.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;

use crate::content::Persona;
use crate::errors::AppError;
use crate::lead::guide_url;
use crate::quiz::{classify, questions, QuizAnswers, QuizQuestion};

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [QuizQuestion],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultResponse {
    pub result: Persona,
    pub title: &'static str,
    pub description: &'static str,
    pub techniques: &'static [&'static str],
    pub guide_url: String,
}

/// GET /api/quiz
pub async fn handle_get_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: questions(),
    })
}

/// POST /api/quiz/result
pub async fn handle_quiz_result(
    payload: Result<Json<QuizAnswers>, JsonRejection>,
) -> Result<Json<QuizResultResponse>, AppError> {
    let Json(answers) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let persona = classify(&answers);
    let profile = persona.profile();
    tracing::info!(result = persona.key(), "Quiz classified");

    Ok(Json(QuizResultResponse {
        result: persona,
        title: profile.title,
        description: profile.result_description,
        techniques: profile.techniques,
        guide_url: guide_url(persona),
    }))
}
