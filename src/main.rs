use actix_web::{App, HttpServer, cookie::Key, middleware, web};
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;

use healthdash::config::AppConfig;
use healthdash::models::dataset::{Dataset, GeneratorConfig};
use healthdash::models::directory;
use healthdash::state::AppState;
use healthdash::{handlers, session_middleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    if let Err(missing) = directory::validate() {
        for facility in missing {
            log::warn!("No manager on record for facility {facility}");
        }
    }

    let generator = config.generator(GeneratorConfig::new(Local::now().date_naive()));
    let mut rng = match config.demo_seed {
        Some(seed) => {
            log::info!("Generating demo data with seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let dataset = Dataset::generate(&generator, &mut rng);
    log::info!(
        "Generated {} employees, {} daily reports, {} weekly reports",
        dataset.employees.len(),
        dataset.daily_reports.len(),
        dataset.weekly_reports.len()
    );

    // Session encryption key; a random key means sessions are lost on restart
    let secret_key = match &config.session_key {
        Some(bytes) => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(bytes.as_slice())
        }
        None => Key::generate(),
    };

    let state = web::Data::new(AppState::new(dataset, config.app_name.clone()));

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
