//! Command-line parsing and query execution.

use std::io::Write;
use std::str::FromStr;

use anyhow::{bail, Context};
use rust_decimal_macros::dec;

use devicestore_catalog::Catalog;
use devicestore_core::{Decimal, Device, Variant};

pub const USAGE: &str = "\
DeviceStore: query a small catalog of electronics

Usage: devicestore [command]

Commands:
  (none) | demo            Run the sample queries
  price <min> <max>        Devices priced within [min, max]
  model <pattern>          Devices whose model matches a regex (case-insensitive)
  year <year>              Devices released in a year
  type <type>              Devices of a type (laptop, phone, tablet, charger, case, headphone)
  get <model>              First device with exactly this model (case-insensitive)
  first <min> <max>        First device priced within [min, max]
  help                     Show this help message

Environment:
  DEVICESTORE_SEED         JSON file with devices to load instead of the sample
  DEVICESTORE_LOG          Log filter used when RUST_LOG is unset (default: warn)
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Demo,
    Price { min: Decimal, max: Decimal },
    Model { pattern: String },
    Year { year: i32 },
    Type { variant: Variant },
    Get { model: String },
    First { min: Decimal, max: Decimal },
    Help,
}

impl Command {
    /// Parse arguments (without the program name).
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let Some(name) = args.first() else {
            return Ok(Command::Demo);
        };
        let rest = &args[1..];

        let command = match name.as_str() {
            "demo" => {
                expect_args(name, rest, 0)?;
                Command::Demo
            }
            "price" => {
                expect_args(name, rest, 2)?;
                Command::Price {
                    min: parse_value(&rest[0], "min price")?,
                    max: parse_value(&rest[1], "max price")?,
                }
            }
            "model" => {
                expect_args(name, rest, 1)?;
                Command::Model {
                    pattern: rest[0].clone(),
                }
            }
            "year" => {
                expect_args(name, rest, 1)?;
                Command::Year {
                    year: parse_value(&rest[0], "year")?,
                }
            }
            "type" => {
                expect_args(name, rest, 1)?;
                Command::Type {
                    variant: rest[0].parse()?,
                }
            }
            "get" => {
                expect_args(name, rest, 1)?;
                Command::Get {
                    model: rest[0].clone(),
                }
            }
            "first" => {
                expect_args(name, rest, 2)?;
                Command::First {
                    min: parse_value(&rest[0], "min price")?,
                    max: parse_value(&rest[1], "max price")?,
                }
            }
            "--help" | "-h" | "help" => Command::Help,
            other => bail!("Unknown command: {}", other),
        };
        Ok(command)
    }

    /// Execute against `catalog`, writing matches to `out`, one per line.
    pub fn run(&self, catalog: &Catalog, out: &mut impl Write) -> anyhow::Result<()> {
        match self {
            Command::Demo => run_demo(catalog, out)?,
            Command::Price { min, max } => {
                write_all(out, &catalog.find_by_price_range(*min, *max))?
            }
            Command::Model { pattern } => write_all(out, &catalog.find_by_model(pattern)?)?,
            Command::Year { year } => write_all(out, &catalog.find_by_year(*year))?,
            Command::Type { variant } => write_all(out, &catalog.find_by_type(*variant))?,
            Command::Get { model } => write_one(out, catalog.get_by_model(model))?,
            Command::First { min, max } => {
                write_one(out, catalog.first_in_price_range(*min, *max))?
            }
            Command::Help => write!(out, "{}", USAGE)?,
        }
        Ok(())
    }
}

/// The six labeled sample queries.
fn run_demo(catalog: &Catalog, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Devices priced from 25 to 100:")?;
    write_all(out, &catalog.find_by_price_range(dec!(25), dec!(100)))?;

    writeln!(out, "\nDevices with model matching 'Samsung':")?;
    write_all(out, &catalog.find_by_model("Samsung")?)?;

    writeln!(out, "\nDevices released in 2022:")?;
    write_all(out, &catalog.find_by_year(2022))?;

    writeln!(out, "\nAll laptops:")?;
    write_all(out, &catalog.find_by_type(Variant::Laptop))?;

    writeln!(out, "\nDevice with model '10th':")?;
    write_one(out, catalog.get_by_model("10th"))?;

    writeln!(out, "\nDevice in price range 700-800:")?;
    write_one(out, catalog.first_in_price_range(dec!(700), dec!(800)))?;

    Ok(())
}

fn write_all(out: &mut impl Write, devices: &[&Device]) -> std::io::Result<()> {
    for device in devices {
        writeln!(out, "{}", device)?;
    }
    Ok(())
}

fn write_one(out: &mut impl Write, device: Option<&Device>) -> std::io::Result<()> {
    if let Some(device) = device {
        writeln!(out, "{}", device)?;
    }
    Ok(())
}

fn expect_args(command: &str, rest: &[String], count: usize) -> anyhow::Result<()> {
    if rest.len() != count {
        bail!(
            "'{}' takes {} argument(s), got {}",
            command,
            count,
            rest.len()
        );
    }
    Ok(())
}

fn parse_value<T>(raw: &str, what: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid {}: {}", what, raw))
}
