use shapeboard::app::App;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    console_log::init_with_level(level).expect("logger already installed");

    leptos::mount::mount_to_body(App);
}
