mod app;
mod error;
mod model;
mod storage;
mod store;
mod validate;

use clap::Parser;

use app::App;
use store::TaskStore;

/// 命令行入口（无子命令，仅 --help / --version）
#[derive(Parser)]
#[command(name = "twig")]
#[command(version)]
#[command(about = "Tiny interactive to-do list, persisted as JSON")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // 启动时加载一次；之后每次变更都整体落盘
    let store = match TaskStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to load tasks: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(store);
    if let Err(e) = app.run() {
        eprintln!("I/O error: {}", e);
        std::process::exit(1);
    }
}
