// Manz landing page — Leptos 0.8 CSR bundle
// Built with trunk: `trunk serve` / `trunk build --release`

use leptos::prelude::*;
use manz_page::components::App;
use manz_page::styles::PAGE_CSS;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| {
        view! {
            <style>{PAGE_CSS}</style>
            <App />
        }
    });
}
