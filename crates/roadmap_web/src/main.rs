// Trunk builds this binary for wasm32; `wasm_start` mounts the roadmap page.
// On native targets the binary has nothing to show.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    roadmap_web::start();
}
