use fractal_grapher::{CliRenderController, DEFAULT_HEIGHT, DEFAULT_WIDTH, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut controller = CliRenderController::new(PpmFilePresenter::new(), DEFAULT_WIDTH, DEFAULT_HEIGHT)?;

    controller.generate()?;
    controller.write("output")?;

    Ok(())
}
