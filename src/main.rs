#[cfg(target_arch = "wasm32")]
pub fn main() {
    use leptos::prelude::mount_to_body;
    use taskman_web::app::App;

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
