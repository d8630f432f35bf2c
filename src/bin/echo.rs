use event_functions::logging::init_logging;
use event_functions::{functions, start_runtime, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();
    start_runtime(functions::echo, ServerConfig::from_env()).await
}
