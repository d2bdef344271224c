use advocates_directory::models::config::ServerConfig;
use advocates_directory::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .set_default("address", "127.0.0.1")
        .map_err(|e| std::io::Error::other(format!("Failed to set config default: {e}")))?
        .set_default("port", 3000i64)
        .map_err(|e| std::io::Error::other(format!("Failed to set config default: {e}")))?
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    run(server_config).await
}
