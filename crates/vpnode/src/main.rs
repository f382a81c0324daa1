use vpnode_core::{events, init_logging};

mod app;
mod commands;
mod home;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    let verbose = matches.get_flag("verbose");
    let quiet = !verbose;
    init_logging(quiet);

    if let Err(e) = commands::run_command(&matches) {
        events::log_app_error(e.as_ref());
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
