use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Result;

use morefans::database::init_store;
use morefans::{AppState, Config, SeedService, routes};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    println!("🚀 Starting More Fans API server...");

    // Load configuration
    let config = Config::from_env()?;
    println!(
        "📋 Configuration loaded (environment: {}, storage: {})",
        config.environment, config.storage
    );

    let store = init_store(&config).await?;
    println!("✅ Document store ready ({})", store.backend_name());

    // Seed demo data before taking traffic
    let report = SeedService::new(store.clone())
        .initialize_sample_data(&config.fan_user_id, &config.sponsor_user_id)
        .await?;
    if !report.skipped {
        println!("🌱 Sample data checked");
    }

    let server_address = config.server_address();
    let app_state = web::Data::new(AppState::new(store, config));

    println!("🌐 Server starting on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::new(r#"%a "%r" %s %b "%{User-Agent}i" %T"#))
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
