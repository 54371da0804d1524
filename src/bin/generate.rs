use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use reflection_plot::{
    config::{Command, GenerateConfig, GENERATE_USAGE},
    reflection::Generator,
    Result,
};

fn run(c: GenerateConfig) -> Result<()> {
    let g = Generator::new().count(c.count).spread(c.spread)?;
    let mut rng = match c.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let d = g.generate(&mut rng)?;
    let (x, y) = d.direction;
    info!("ideal reflection ({:.3}, {:.3})", x, y);
    d.to_file(&c.output)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error + Sync + Send>>
{
    reflection_plot::logging::setup()?;
    let c = match GenerateConfig::from_args(std::env::args().skip(1)) {
        Ok(Command::Run(c)) => c,
        Ok(Command::Help) => {
            println!("{}", GENERATE_USAGE);
            return Ok(())
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", GENERATE_USAGE);
            std::process::exit(2);
        }
    };
    if let Err(e) = run(c) {
        error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}
