mod cli;
mod model;
mod store;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run()
}
