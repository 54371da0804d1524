use log::{error, info};
use reflection_plot::{
    config::{Command, PlotConfig, PLOT_USAGE},
    mpl, plot, Result,
};

fn run(c: PlotConfig) -> Result<()> {
    if c.output.is_some() {
        mpl::use_backend("Agg")?;
    }
    let d = reflection_plot::Dataset::from_file(&c.input)?;
    let mut scene = plot::Scene::from_dataset(&d);
    if let Some(t) = c.title {
        scene = scene.title(t);
    }
    let (fig, _ax) = scene.draw()?;
    match c.output {
        Some(path) => {
            let mut save = fig.save();
            if let Some(dpi) = c.dpi {
                save.dpi(dpi);
            }
            save.to_file(&path)?;
            info!("figure saved to {}", path.display());
            fig.close()
        }
        None => mpl::show(),
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error + Sync + Send>>
{
    reflection_plot::logging::setup()?;
    let c = match PlotConfig::from_args(std::env::args().skip(1)) {
        Ok(Command::Run(c)) => c,
        Ok(Command::Help) => {
            println!("{}", PLOT_USAGE);
            return Ok(())
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", PLOT_USAGE);
            std::process::exit(2);
        }
    };
    if let Err(e) = run(c) {
        error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}
