use log::info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(alpha_site::config::log_level()).is_err() {
        gloo_console::warn!("logger was already initialized");
    }

    info!("Starting {} site behaviors", alpha_site::config::SITE_NAME);
    alpha_site::mount();
}
