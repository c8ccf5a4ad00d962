use dragon_bartender::app::App;
use dragon_bartender::config::Config;
use dragon_bartender::constants::LOOP_TIME;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// The main entry point of the application.
///
/// This function installs the tracing subscriber, parses the command line,
/// initializes SDL and the window, and then enters the main game loop.
pub fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).expect("Could not set global default");

    let config = Config::parse();
    let mut app = App::new(&config).expect("Could not create app");

    info!(loop_time = ?LOOP_TIME, "Starting game loop");

    loop {
        if !app.run() {
            break;
        }
    }
}
