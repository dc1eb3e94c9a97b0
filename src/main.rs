#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod form;
mod notification;
mod scheduler;
mod scroll;
mod sections;
mod skills;
mod stylesheet;
mod telemetry;
mod throttle;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
