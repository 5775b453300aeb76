// Binary Trunk loads into the page. The wasm start hook below is the whole
// program; on a host target there is nothing to run.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    survey_checker_web::start();
}
