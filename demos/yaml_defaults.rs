// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading default tables from YAML.
//!
//! Reads the global defaults from a YAML file given on the command line, or
//! from `defaults.yaml` in the OS configuration directory, and prints the
//! resolved bar options.
//!
//! To run this example:
//! ```bash
//! cargo run --example yaml_defaults -- path/to/defaults.yaml
//! ```

use chartcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let registry = match std::env::args().nth(1) {
        Some(path) => {
            let loader = YamlDefaultsLoader::from_file(&path)?;
            println!("Loaded defaults from {}", loader.file_path().display());
            DefaultsRegistry::with_global(loader.table().clone())
        }
        None => DefaultsRegistry::with_defaults("chartcfg", "org.chartcfg"),
    };

    let options = ChartOptions::from_registry(&registry, "bar");
    let bar = options.bar();

    println!("color:          {}", options.get_color());
    println!("font size:      {}", options.font().get_size());
    println!("border radius:  {:?}", bar.get_border_radius());
    println!("border skipped: {:?}", bar.get_border_skipped());
    println!("background:     {}", bar.get_background_color_as_string());

    Ok(())
}
