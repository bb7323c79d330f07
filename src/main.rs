use ecowaste_directory::config::CONFIG;
use ecowaste_directory::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 EcoWaste directory arrancando ({})", CONFIG.environment);
    if !CONFIG.is_production() {
        log::debug!("🛠️ Build de desarrollo, logging detallado activado");
    }
    log::debug!("🌐 Base de la API: {}", CONFIG.api_url);

    yew::Renderer::<App>::new().render();
}
