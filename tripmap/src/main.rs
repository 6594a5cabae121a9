use clap::Parser;
use tripmap::app::map::MapApp;
use tripmap::model::trip::TripTableCache;

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = MapApp::parse();
    let cache = TripTableCache::new();
    match args.run(&cache) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
