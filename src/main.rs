#[cfg(any(test, target_arch = "wasm32"))]
mod content;
#[cfg(any(test, target_arch = "wasm32"))]
mod motion;
#[cfg(any(test, target_arch = "wasm32"))]
mod scroll_nav;
#[cfg(any(test, target_arch = "wasm32"))]
mod theme;
#[cfg(any(test, target_arch = "wasm32"))]
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
const FRONTEND_ONLY_NOTICE: &str =
    "This project is frontend-only. Run `trunk serve` or `trunk build --release`.";

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("{FRONTEND_ONLY_NOTICE}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
