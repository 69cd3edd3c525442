//! Browser entry point: install the panic hook, wire up console logging,
//! and mount the root component to `<body>`.

#[cfg(target_arch = "wasm32")]
fn main() {
    use portfolio::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The UI only runs in the browser; native builds exist for `cargo test`.
}
