use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::http::header::ContentType;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use lorem_gen_core::{GenerationConfig, LoremGenerator, LoremError, parse_count, preset_texts};

mod config;

use config::ServerConfig;

/// Query parameters of the `/v1/generate` endpoint.
///
/// Everything is optional; missing values fall back to
/// `GenerationConfig::default()`. `count` is kept raw so that sloppy input
/// ("", "2.5", "abc") is clamped rather than rejected.
#[derive(Deserialize)]
struct GenerateParams {
	mode: Option<String>,
	count: Option<String>,
	language: Option<String>,
	start_with_lorem: Option<bool>,
}

impl GenerateParams {
	/// Builds the generation config, capping `count` at `max_count`.
	fn to_config(&self, max_count: i64) -> Result<GenerationConfig, LoremError> {
		let mut config = GenerationConfig::default();
		if let Some(mode) = &self.mode {
			config.mode = mode.parse()?;
		}
		if let Some(language) = &self.language {
			config.language = language.parse()?;
		}
		if let Some(count) = &self.count {
			config.count = parse_count(count);
		}
		if let Some(start_with_lorem) = self.start_with_lorem {
			config.start_with_lorem = start_with_lorem;
		}
		config.count = config.count.min(max_count);
		Ok(config)
	}
}

struct SharedData {
	max_count: i64,
	/// Only set when the server runs with `--seed`.
	seeded_rng: Option<Mutex<StdRng>>,
}

impl SharedData {
	fn new(config: &ServerConfig) -> Self {
		Self {
			max_count: config.max_count,
			seeded_rng: config.seed.map(|seed| Mutex::new(StdRng::seed_from_u64(seed))),
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Returns the generated text as a plain-text body, or 400 when `mode` or
/// `language` is unknown.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let config = match query.to_config(data.max_count) {
		Ok(c) => c,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	let text = match &data.seeded_rng {
		Some(rng) => match rng.lock() {
			Ok(mut rng) => LoremGenerator::with_rng(&mut *rng).generate(&config),
			Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
		},
		None => lorem_gen_core::generate(&config),
	};

	HttpResponse::Ok().content_type(ContentType::plaintext()).body(text)
}

/// HTTP GET endpoint `/v1/presets`, the whole preset table as JSON.
#[get("/v1/presets")]
async fn get_presets() -> impl Responder {
	HttpResponse::Ok().json(preset_texts())
}

/// HTTP GET endpoint `/v1/presets/{key}` where key is e.g. `typography-ru`.
#[get("/v1/presets/{key}")]
async fn get_preset(key: web::Path<String>) -> impl Responder {
	match preset_texts().get_by_key(&key) {
		Ok(text) => HttpResponse::Ok().content_type(ContentType::plaintext()).body(text),
		Err(e) => HttpResponse::NotFound().body(e.to_string()),
	}
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_presets)
		.service(get_preset);
}

/// Main entry point for the server.
///
/// Reads the configuration from flags and environment, then serves the
/// generator behind CORS (the browser UI lives on another origin) and
/// request logging.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let config = ServerConfig::parse();
	let shared_data = web::Data::new(SharedData::new(&config));
	if config.seed.is_some() {
		info!("using seeded random source");
	}
	info!("listening on {}:{}", config.host, config.port);

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]).max_age(3600))
			.app_data(shared_data.clone())
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	fn shared(max_count: i64, seed: Option<u64>) -> web::Data<SharedData> {
		web::Data::new(SharedData {
			max_count,
			seeded_rng: seed.map(|s| Mutex::new(StdRng::seed_from_u64(s))),
		})
	}

	async fn body_of(data: web::Data<SharedData>, uri: &str) -> (StatusCode, String) {
		let app = test::init_service(App::new().app_data(data).configure(routes)).await;
		let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
		let status = resp.status();
		let body = test::read_body(resp).await;
		(status, String::from_utf8(body.to_vec()).unwrap())
	}

	#[actix_web::test]
	async fn generates_words_with_lead() {
		let (status, body) = body_of(
			shared(100, None),
			"/v1/generate?mode=words&count=4&language=latin&start_with_lorem=true",
		)
		.await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.starts_with("Lorem ipsum "));
		assert_eq!(body.split(' ').count(), 4);
	}

	#[actix_web::test]
	async fn defaults_to_three_latin_sentences() {
		let (status, body) = body_of(shared(100, None), "/v1/generate").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body.matches('.').count(), 3);
	}

	#[actix_web::test]
	async fn sloppy_count_is_clamped() {
		for count in ["0", "-3", "abc", ""] {
			let uri = format!("/v1/generate?mode=words&count={count}&start_with_lorem=false");
			let (status, body) = body_of(shared(100, None), &uri).await;
			assert_eq!(status, StatusCode::OK);
			assert_eq!(body.split(' ').count(), 1, "count={count}");
		}
	}

	#[actix_web::test]
	async fn count_is_capped_by_max_count() {
		let (_, body) = body_of(shared(5, None), "/v1/generate?mode=words&count=50&start_with_lorem=false").await;
		assert_eq!(body.split(' ').count(), 5);
	}

	#[actix_web::test]
	async fn unknown_mode_is_bad_request() {
		let (status, body) = body_of(shared(100, None), "/v1/generate?mode=haiku").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, "invalid mode: 'haiku'");

		let (status, _) = body_of(shared(100, None), "/v1/generate?language=klingon").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn seeded_server_replays() {
		let uri = "/v1/generate?mode=paragraphs&count=2&language=mixed";
		let (_, first) = body_of(shared(100, Some(7)), uri).await;
		let (_, second) = body_of(shared(100, Some(7)), uri).await;
		assert_eq!(first, second);
	}

	#[actix_web::test]
	async fn presets_as_json() {
		let (status, body) = body_of(shared(100, None), "/v1/presets").await;
		assert_eq!(status, StatusCode::OK);
		let json: serde_json::Value = serde_json::from_str(&body).unwrap();
		assert_eq!(json["typography"]["en"], preset_texts().typography.en);
		assert_eq!(json["sample"]["mixed"], preset_texts().sample.mixed);
	}

	#[actix_web::test]
	async fn single_preset_by_key() {
		let (status, body) = body_of(shared(100, None), "/v1/presets/typography-ru").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, preset_texts().typography.ru);

		let (status, _) = body_of(shared(100, None), "/v1/presets/poster-en").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
	}
}
