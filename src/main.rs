#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod viewer;

use app::run;

fn main() {
    env_logger::init();
    run();
}
