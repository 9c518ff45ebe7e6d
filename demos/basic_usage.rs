// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the chartcfg crate.
//!
//! This example demonstrates:
//! - Registering global and per-chart-type defaults
//! - Reading options that fall back to those defaults
//! - Lazy attachment: only written nodes show up in the output
//! - Polymorphic properties (colors, border radius, point style)
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use chartcfg::domain::{ExternalHandle, HandleKind, NodePath};
use chartcfg::options::{bar_keys, chart_keys, element_keys};
use chartcfg::prelude::*;
use chartcfg::resolvers::{ColorValue, Corners, PointStyle, PointStyleValue};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== chartcfg: Basic Usage ===\n");

    let mut registry = DefaultsRegistry::with_global(NativeObject::from_entries([(
        "color",
        NativeValue::from("#666"),
    )]));
    let bar_path = NodePath::root()
        .child(&chart_keys::ELEMENTS)
        .child(&element_keys::BAR);
    registry
        .global()
        .set(&bar_path, &bar_keys::BORDER_WIDTH, NativeValue::from(1))?;
    let bar_defaults = registry.register_category("bar", NativeObject::new());
    bar_defaults.set(&bar_path, &bar_keys::BORDER_RADIUS, NativeValue::from(4))?;

    let options = ChartOptions::from_registry(&registry, "bar");

    println!("--- Example 1: Defaults ---");
    println!("color:        {}", options.get_color());
    println!("responsive:   {}", options.is_responsive());
    println!("border width: {}", options.bar().get_border_width());
    println!("border radius: {}", options.bar().get_border_radius_as_number());
    println!("serialized:   {}\n", options.to_json()?);

    println!("--- Example 2: Writes attach lazily ---");
    options.layout().padding().set_top(10.0)?;
    println!("after padding.top = 10: {}\n", options.to_json()?);

    println!("--- Example 3: Polymorphic values ---");
    let bar = options.bar();
    bar.set_border_radius_corners(&Corners {
        top_left: 8.0,
        top_right: 8.0,
        ..Corners::default()
    })?;
    println!("radius as number: {}", bar.get_border_radius_as_number());

    let gradient = ExternalHandle::new(HandleKind::Gradient);
    bar.set_background_color(&[ColorValue::from("red"), ColorValue::Gradient(gradient)])?;
    println!("background colors: {:?}", bar.get_background_color());
    println!("background as string: {}", bar.get_background_color_as_string());

    options
        .point()
        .set_point_style(PointStyleValue::Style(PointStyle::Triangle))?;
    println!("point style: {:?}", options.point().get_point_style());

    println!("\nfinal options:\n{}", options.node().to_json_pretty()?);

    Ok(())
}
