//! Command line configuration of the `reflection_plot` and `generate`
//! programs.

use std::{path::PathBuf, str::FromStr};
use crate::error::{Error, Result};

/// File read by the plotter and written by the generator.
pub const DEFAULT_DATA_FILE: &str = "data.txt";

pub const PLOT_USAGE: &str = "\
Usage: reflection_plot [INPUT] [--output PATH] [--dpi N] [--title TEXT]

Plot the rays stored in INPUT (default: data.txt): a segment from the
origin to the direction on the first line and a scatter of the points
on the following lines, both axes fixed to [-1.2, 1.2].

Options:
  --output PATH  save the figure to PATH instead of showing it
  --dpi N        resolution of the saved figure
  --title TEXT   title of the axes
  -h, --help     print this help";

pub const GENERATE_USAGE: &str = "\
Usage: generate [OUTPUT] [--count N] [--spread S] [--seed N]

Write the ideal reflection of a ray on a horizontal surface followed
by N diffused rays to OUTPUT (default: data.txt).

Options:
  --count N    number of diffused rays (default: 10)
  --spread S   standard deviation of the deviation, in radians
               (default: 1)
  --seed N     seed of the random generator
  -h, --help   print this help";

/// Outcome of parsing the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<T> {
    Run(T),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub input: PathBuf,
    /// Save here instead of opening a window.
    pub output: Option<PathBuf>,
    pub dpi: Option<f64>,
    pub title: Option<String>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig { input: DEFAULT_DATA_FILE.into(), output: None,
                     dpi: None, title: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    pub output: PathBuf,
    pub count: usize,
    pub spread: f64,
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig { output: DEFAULT_DATA_FILE.into(), count: 10,
                         spread: 1., seed: None }
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str)
         -> Result<String> {
    args.next().ok_or_else(|| Error::Usage(
        format!("missing value for {}", flag)))
}

fn number<T: FromStr>(flag: &str, s: &str) -> Result<T> {
    s.parse().map_err(|_| Error::Usage(
        format!("invalid value {:?} for {}", s, flag)))
}

/// Positional argument, rejecting unknown flags and extra arguments.
fn positional(slot: &mut Option<PathBuf>, arg: String) -> Result<()> {
    if arg.starts_with('-') && arg.len() > 1 {
        return Err(Error::Usage(format!("unknown option {}", arg)))
    }
    if slot.is_some() {
        return Err(Error::Usage(format!("unexpected argument {}", arg)))
    }
    *slot = Some(arg.into());
    Ok(())
}

impl PlotConfig {
    /// Parse the arguments following the program name.
    pub fn from_args<I>(args: I) -> Result<Command<PlotConfig>>
    where I: IntoIterator<Item = String> {
        let mut c = PlotConfig::default();
        let mut input = None;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--output" => c.output = Some(value(&mut args, &arg)?.into()),
                "--dpi" => {
                    let v = value(&mut args, &arg)?;
                    let dpi: f64 = number(&arg, &v)?;
                    if !(dpi.is_finite() && dpi > 0.) {
                        return Err(Error::Usage(format!(
                            "{} must be positive, got {}", arg, v)))
                    }
                    c.dpi = Some(dpi);
                }
                "--title" => c.title = Some(value(&mut args, &arg)?),
                _ => positional(&mut input, arg)?,
            }
        }
        if let Some(i) = input {
            c.input = i;
        }
        Ok(Command::Run(c))
    }
}

impl GenerateConfig {
    /// Parse the arguments following the program name.
    pub fn from_args<I>(args: I) -> Result<Command<GenerateConfig>>
    where I: IntoIterator<Item = String> {
        let mut c = GenerateConfig::default();
        let mut output = None;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--count" => {
                    let v = value(&mut args, &arg)?;
                    c.count = number(&arg, &v)?;
                }
                "--spread" => {
                    let v = value(&mut args, &arg)?;
                    c.spread = number(&arg, &v)?;
                }
                "--seed" => {
                    let v = value(&mut args, &arg)?;
                    c.seed = Some(number(&arg, &v)?);
                }
                _ => positional(&mut output, arg)?,
            }
        }
        if let Some(o) = output {
            c.output = o;
        }
        Ok(Command::Run(c))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn plot_defaults() -> Result<()> {
        assert_eq!(PlotConfig::from_args(args(""))?,
                   Command::Run(PlotConfig::default()));
        assert_eq!(PlotConfig::default().input, PathBuf::from("data.txt"));
        Ok(())
    }

    #[test]
    fn plot_options() -> Result<()> {
        let c = PlotConfig::from_args(
            args("rays.txt --dpi 150 --output target/rays.png --title T"))?;
        assert_eq!(c, Command::Run(PlotConfig {
            input: "rays.txt".into(),
            output: Some("target/rays.png".into()),
            dpi: Some(150.),
            title: Some("T".into()),
        }));
        Ok(())
    }

    #[test]
    fn help() -> Result<()> {
        assert_eq!(PlotConfig::from_args(args("x --help"))?, Command::Help);
        assert_eq!(GenerateConfig::from_args(args("-h"))?, Command::Help);
        Ok(())
    }

    #[test]
    fn plot_errors() {
        for a in ["--dpi", "--dpi abc", "--verbose", "-v", "a.txt b.txt",
                  "--dpi 0", "--dpi -5", "--dpi nan", "--dpi inf"] {
            assert!(matches!(PlotConfig::from_args(args(a)),
                             Err(Error::Usage(_))), "{}", a);
        }
    }

    #[test]
    fn generate_options() -> Result<()> {
        let c = GenerateConfig::from_args(
            args("--count 25 out.txt --spread 0.5 --seed 9"))?;
        assert_eq!(c, Command::Run(GenerateConfig {
            output: "out.txt".into(), count: 25, spread: 0.5, seed: Some(9),
        }));
        Ok(())
    }

    #[test]
    fn generate_errors() {
        for a in ["--count -3", "--seed", "--spread x", "--bogus 1"] {
            assert!(matches!(GenerateConfig::from_args(args(a)),
                             Err(Error::Usage(_))), "{}", a);
        }
    }
}
