use contact_manager::prelude::run_app;
use env_logger::Env;
use std::process::exit;

fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run_app() {
        eprintln!("{e}");
        exit(1);
    }
}
