mod app;
mod ui;

fn main() -> eframe::Result<()> {
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
    {
        eprintln!("failed to initialize logging: {err}");
    }
    ui::app_shell::run()
}
