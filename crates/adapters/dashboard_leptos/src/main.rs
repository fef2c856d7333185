use catalyst_dashboard_leptos::App;

fn main() {
    // Panics show up in the browser console instead of as `unreachable`.
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("failed to initialise console logging: {err}");
    }

    log::info!("catalyst dashboard starting");
    leptos::mount::mount_to_body(App);
}
