use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use careerpath_core::{aggregate, dominant, AnswerCategory, CareerRecommender, Error};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};
use crate::content::ContentStore;

#[derive(Deserialize)]
struct SubmitQuizRequest {
    answers: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
struct RecommendRequest {
    scores: Option<ScoresRequest>,
}

#[derive(Deserialize)]
struct ScoresRequest {
    science: Option<i64>,
    arts: Option<i64>,
    commerce: Option<i64>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    index: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        recommender: Arc<CareerRecommender>,
        content: Arc<ContentStore>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(recommender.clone()))
                .app_data(web::Data::new(content.clone()))
                .configure(Self::configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Route table; expects `Arc<CareerRecommender>` and `Arc<ContentStore>` app data
    pub fn configure(cfg: &mut web::ServiceConfig) {
        // body parse failures get the same {"error": ...} shape as handler errors
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            debug!("Rejected request body: {}", err);
            let resp = HttpResponse::BadRequest().json(error_json(&err));
            InternalError::from_response(err, resp).into()
        });

        cfg.app_data(json_config)
            .route("/health", web::get().to(health))
            .route("/quiz", web::get().to(quiz))
            .route("/submit_quiz", web::post().to(submit_quiz))
            .route("/recommend", web::post().to(recommend))
            .route("/colleges", web::get().to(colleges))
            .route("/career/{stream}", web::get().to(career_path));
    }
}

fn error_json(message: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": message.to_string() })
}

fn error_response(e: &Error) -> HttpResponse {
    match e {
        Error::WrongAnswerCount { .. }
        | Error::InvalidAnswerToken(_)
        | Error::MalformedScoreVector(_) => HttpResponse::BadRequest().json(error_json(e)),
        Error::IndexNotReady => HttpResponse::ServiceUnavailable().json(error_json(e)),
        _ => {
            error!("Recommendation error: {}", e);
            HttpResponse::InternalServerError().json(error_json(e))
        }
    }
}

async fn health(recommender: web::Data<Arc<CareerRecommender>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        index: format!("{:?}", recommender.state()),
    }))
}

async fn quiz(content: web::Data<Arc<ContentStore>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "questions": content.questions()
    })))
}

async fn submit_quiz(
    recommender: web::Data<Arc<CareerRecommender>>,
    content: web::Data<Arc<ContentStore>>,
    req: web::Json<SubmitQuizRequest>,
) -> ActixResult<HttpResponse> {
    let answers: Vec<String> = match &req.answers {
        Some(values) => values
            .iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        None => {
            return Ok(HttpResponse::BadRequest()
                .json(error_json("Invalid or missing 'answers' in request")));
        }
    };

    let scores = match aggregate(&answers) {
        Ok(scores) => scores,
        Err(e) => return Ok(error_response(&e)),
    };
    let top_stream = dominant(&scores);

    let suggestion = match content.suggestion(top_stream) {
        Some(s) => s,
        None => {
            return Ok(HttpResponse::InternalServerError().json(error_json(format!(
                "Stream '{}' not found in suggestions",
                top_stream
            ))));
        }
    };

    let careers = match recommender.recommend(&scores) {
        Ok(careers) => careers,
        Err(e) => return Ok(error_response(&e)),
    };
    debug!("Quiz scored {} -> {} {:?}", scores, top_stream, careers);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "suggestion": suggestion,
        "scores": scores,
        "dominant": top_stream,
        "ai_careers": careers,
    })))
}

async fn recommend(
    recommender: web::Data<Arc<CareerRecommender>>,
    req: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    let scores = match &req.scores {
        Some(s) => s,
        None => {
            return Ok(error_response(&Error::MalformedScoreVector(
                "missing scores".to_string(),
            )));
        }
    };

    let mut components = Vec::with_capacity(3);
    for (category, value) in AnswerCategory::ALL
        .into_iter()
        .zip([scores.science, scores.arts, scores.commerce])
    {
        match value {
            Some(v) => components.push(v),
            None => {
                return Ok(error_response(&Error::MalformedScoreVector(format!(
                    "missing {} score",
                    category
                ))));
            }
        }
    }

    match recommender.recommend_raw(&components) {
        Ok(careers) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "ai_careers": careers
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn colleges(content: web::Data<Arc<ContentStore>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(content.colleges()))
}

async fn career_path(
    content: web::Data<Arc<ContentStore>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let stream = path.into_inner();

    match AnswerCategory::from_stream_slug(&stream).and_then(|c| content.suggestion(c)) {
        Some(stream_data) => Ok(HttpResponse::Ok().json(stream_data)),
        None => Ok(HttpResponse::NotFound().json(error_json(format!(
            "Stream '{}' not found",
            stream
        )))),
    }
}
