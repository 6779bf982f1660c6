fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting BharatScan landing page");
    yew::Renderer::<bharatscan::App>::new().render();
}
