mod app;
mod color;
mod config;
mod driver;
mod fish;
mod render;
mod sim;
mod sizing;
mod stats;

fn main() {
    env_logger::init();
    log::info!("swimming-fish starting up");

    if let Err(e) = app::run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
