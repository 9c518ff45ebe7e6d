// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chart option nodes.
//!
//! Thin schema wrappers composing the resolvers into the option tree of a
//! chart: the root options, the layout, and the bar and point elements.

use crate::domain::{NativeObject, Result};
use crate::resolvers::{
    BorderRadius, BorderRadiusResolver, BorderSkip, BorderSkippedResolver, ColorResolver,
    ColorValue, Corners, Edge, Font, FontResolver, Padding, PaddingResolver, PointStyle,
    PointStyleResolver, PointStyleValue,
};
use crate::service::{ConfigNode, DefaultProviderChain, DefaultsRegistry};
use std::rc::Rc;

crate::property_keys! {
    /// Keys of the root options node.
    pub mod chart_keys {
        /// Resize with the container
        RESPONSIVE => "responsive",
        /// Keep the canvas aspect ratio when resizing
        MAINTAIN_ASPECT_RATIO => "maintainAspectRatio",
        /// Default text color
        COLOR => "color",
        /// Default font
        FONT => "font",
        /// Layout node
        LAYOUT => "layout",
        /// Element defaults node
        ELEMENTS => "elements",
    }
}

crate::property_keys! {
    /// Keys of the layout node.
    pub mod layout_keys {
        /// Padding around the chart area
        PADDING => "padding",
        /// Apply automatic padding for visible elements
        AUTO_PADDING => "autoPadding",
    }
}

crate::property_keys! {
    /// Keys of the elements node.
    pub mod element_keys {
        /// Bar element options
        BAR => "bar",
        /// Point element options
        POINT => "point",
    }
}

crate::property_keys! {
    /// Keys of a bar element node.
    pub mod bar_keys {
        /// Fill color
        BACKGROUND_COLOR => "backgroundColor",
        /// Stroke color
        BORDER_COLOR => "borderColor",
        /// Stroke width
        BORDER_WIDTH => "borderWidth",
        /// Corner radius
        BORDER_RADIUS => "borderRadius",
        /// Edge left without a stroke
        BORDER_SKIPPED => "borderSkipped",
    }
}

crate::property_keys! {
    /// Keys of a point element node.
    pub mod point_keys {
        /// Fill color
        BACKGROUND_COLOR => "backgroundColor",
        /// Stroke width
        BORDER_WIDTH => "borderWidth",
        /// Point radius
        RADIUS => "radius",
        /// Point radius when hovered
        HOVER_RADIUS => "hoverRadius",
        /// Point shape
        POINT_STYLE => "pointStyle",
    }
}

/// Default color of elements and text.
pub const DEFAULT_COLOR: &str = "rgba(0,0,0,0.1)";

const CHART_COLOR: ColorResolver = ColorResolver::new(chart_keys::COLOR, "#666");
const CHART_FONT: FontResolver = FontResolver::new(chart_keys::FONT);
const LAYOUT_PADDING: PaddingResolver = PaddingResolver::new(layout_keys::PADDING, 0.0);

const BAR_BACKGROUND_COLOR: ColorResolver =
    ColorResolver::new(bar_keys::BACKGROUND_COLOR, DEFAULT_COLOR);
const BAR_BORDER_COLOR: ColorResolver = ColorResolver::new(bar_keys::BORDER_COLOR, DEFAULT_COLOR);
const BAR_BORDER_RADIUS: BorderRadiusResolver =
    BorderRadiusResolver::new(bar_keys::BORDER_RADIUS, 0.0);
const BAR_BORDER_SKIPPED: BorderSkippedResolver =
    BorderSkippedResolver::new(bar_keys::BORDER_SKIPPED, Edge::Start);

const POINT_BACKGROUND_COLOR: ColorResolver =
    ColorResolver::new(point_keys::BACKGROUND_COLOR, DEFAULT_COLOR);
const POINT_STYLE: PointStyleResolver =
    PointStyleResolver::new(point_keys::POINT_STYLE, PointStyle::Circle);

/// Root options of one chart.
///
/// # Examples
///
/// ```rust
/// use chartcfg::domain::NativeObject;
/// use chartcfg::options::ChartOptions;
/// use chartcfg::service::DefaultsRegistry;
///
/// let mut registry = DefaultsRegistry::new();
/// let bar_defaults = NativeObject::new();
/// bar_defaults.set("responsive", false.into());
/// registry.register_category("bar", bar_defaults);
///
/// let options = ChartOptions::from_registry(&registry, "bar");
/// assert!(!options.is_responsive());
///
/// options.layout().padding().set_top(5.0).unwrap();
/// assert_eq!(options.to_json().unwrap(), r#"{"layout":{"padding":{"top":5}}}"#);
/// ```
#[derive(Clone, Debug)]
pub struct ChartOptions {
    node: ConfigNode,
}

impl ChartOptions {
    /// Creates empty options resolving defaults through `chain`.
    pub fn new(chain: Rc<DefaultProviderChain>) -> Self {
        ChartOptions {
            node: ConfigNode::new(chain),
        }
    }

    /// Wraps existing host options.
    pub fn with_object(object: NativeObject, chain: Rc<DefaultProviderChain>) -> Self {
        ChartOptions {
            node: ConfigNode::with_object(object, chain),
        }
    }

    /// Creates empty options for a chart type, with the registry's defaults.
    pub fn from_registry(registry: &DefaultsRegistry, chart_type: &str) -> Self {
        Self::new(registry.chain(Some(chart_type)))
    }

    /// Returns the root node.
    pub fn node(&self) -> &ConfigNode {
        &self.node
    }

    /// Returns `true` if the chart resizes with its container.
    pub fn is_responsive(&self) -> bool {
        self.node.get_value(&chart_keys::RESPONSIVE, true)
    }

    /// Sets whether the chart resizes with its container.
    pub fn set_responsive(&self, responsive: bool) -> Result<()> {
        self.node.set_value(&chart_keys::RESPONSIVE, responsive)
    }

    /// Returns `true` if the aspect ratio is kept when resizing.
    pub fn is_maintain_aspect_ratio(&self) -> bool {
        self.node.get_value(&chart_keys::MAINTAIN_ASPECT_RATIO, true)
    }

    /// Sets whether the aspect ratio is kept when resizing.
    pub fn set_maintain_aspect_ratio(&self, maintain: bool) -> Result<()> {
        self.node
            .set_value(&chart_keys::MAINTAIN_ASPECT_RATIO, maintain)
    }

    /// Returns the default text color.
    pub fn get_color(&self) -> String {
        CHART_COLOR.get_as_string(&self.node)
    }

    /// Sets the default text color.
    pub fn set_color(&self, color: &str) -> Result<()> {
        CHART_COLOR.set_color(&self.node, color)
    }

    /// Returns the default font.
    pub fn font(&self) -> Font {
        CHART_FONT.font(&self.node)
    }

    /// Returns the layout options.
    pub fn layout(&self) -> Layout {
        Layout {
            node: self.node.child(&chart_keys::LAYOUT),
        }
    }

    /// Returns the bar element options.
    pub fn bar(&self) -> BarElement {
        BarElement {
            node: self
                .node
                .child(&chart_keys::ELEMENTS)
                .child(&element_keys::BAR),
        }
    }

    /// Returns the point element options.
    pub fn point(&self) -> PointElement {
        PointElement {
            node: self
                .node
                .child(&chart_keys::ELEMENTS)
                .child(&element_keys::POINT),
        }
    }

    /// Serializes the options to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        self.node.to_json()
    }
}

/// Layout options.
#[derive(Clone, Debug)]
pub struct Layout {
    node: ConfigNode,
}

impl Layout {
    /// Returns the layout node.
    pub fn node(&self) -> &ConfigNode {
        &self.node
    }

    /// Returns the padding around the chart area.
    pub fn padding(&self) -> Padding {
        LAYOUT_PADDING.padding(&self.node)
    }

    /// Returns `true` if padding is added automatically for visible elements.
    pub fn is_auto_padding(&self) -> bool {
        self.node.get_value(&layout_keys::AUTO_PADDING, true)
    }

    /// Sets whether padding is added automatically.
    pub fn set_auto_padding(&self, auto_padding: bool) -> Result<()> {
        self.node.set_value(&layout_keys::AUTO_PADDING, auto_padding)
    }
}

/// Bar element options.
#[derive(Clone, Debug)]
pub struct BarElement {
    node: ConfigNode,
}

impl BarElement {
    /// Returns the bar node.
    pub fn node(&self) -> &ConfigNode {
        &self.node
    }

    /// Returns the fill colors.
    pub fn get_background_color(&self) -> Vec<ColorValue> {
        BAR_BACKGROUND_COLOR.get_colors(&self.node)
    }

    /// Returns the first fill color as a string.
    pub fn get_background_color_as_string(&self) -> String {
        BAR_BACKGROUND_COLOR.get_as_string(&self.node)
    }

    /// Sets the fill colors, one per bar or a single one.
    pub fn set_background_color(&self, colors: &[ColorValue]) -> Result<()> {
        BAR_BACKGROUND_COLOR.set_colors(&self.node, colors)
    }

    /// Returns `true` when the fill colors are stored per bar.
    pub fn is_background_color_as_array(&self) -> bool {
        BAR_BACKGROUND_COLOR.is_as_array(&self.node)
    }

    /// Returns the stroke color as a string.
    pub fn get_border_color(&self) -> String {
        BAR_BORDER_COLOR.get_as_string(&self.node)
    }

    /// Sets the stroke color.
    pub fn set_border_color(&self, color: &str) -> Result<()> {
        BAR_BORDER_COLOR.set_color(&self.node, color)
    }

    /// Returns the stroke width.
    pub fn get_border_width(&self) -> f64 {
        self.node.get_value(&bar_keys::BORDER_WIDTH, 0.0)
    }

    /// Sets the stroke width.
    pub fn set_border_width(&self, width: f64) -> Result<()> {
        self.node.set_non_negative(&bar_keys::BORDER_WIDTH, width)
    }

    /// Returns the corner radius.
    pub fn get_border_radius(&self) -> BorderRadius {
        BAR_BORDER_RADIUS.get(&self.node)
    }

    /// Returns the corner radius as one number.
    pub fn get_border_radius_as_number(&self) -> f64 {
        BAR_BORDER_RADIUS.get_border_radius(&self.node)
    }

    /// Returns the radius of each corner.
    pub fn get_border_radius_as_corners(&self) -> Option<Corners> {
        BAR_BORDER_RADIUS.get_as_corners(&self.node)
    }

    /// Sets one radius for every corner.
    pub fn set_border_radius(&self, radius: f64) -> Result<()> {
        BAR_BORDER_RADIUS.set(&self.node, radius)
    }

    /// Sets one radius per corner.
    pub fn set_border_radius_corners(&self, corners: &Corners) -> Result<()> {
        BAR_BORDER_RADIUS.set_corners(&self.node, corners)
    }

    /// Returns `true` when a per-corner radius is stored.
    pub fn is_border_radius_as_corners(&self) -> bool {
        BAR_BORDER_RADIUS.is_as_corners(&self.node)
    }

    /// Returns the edge left without a stroke.
    pub fn get_border_skipped(&self) -> BorderSkip {
        BAR_BORDER_SKIPPED.get(&self.node)
    }

    /// Sets the edge left without a stroke.
    pub fn set_border_skipped(&self, value: BorderSkip) -> Result<()> {
        BAR_BORDER_SKIPPED.set(&self.node, value)
    }

    /// Returns `true` when every edge is stroked.
    pub fn is_border_skipped_disabled(&self) -> bool {
        BAR_BORDER_SKIPPED.is_disabled(&self.node)
    }
}

/// Point element options.
#[derive(Clone, Debug)]
pub struct PointElement {
    node: ConfigNode,
}

impl PointElement {
    /// Returns the point node.
    pub fn node(&self) -> &ConfigNode {
        &self.node
    }

    /// Returns the fill color as a string.
    pub fn get_background_color(&self) -> String {
        POINT_BACKGROUND_COLOR.get_as_string(&self.node)
    }

    /// Sets the fill color.
    pub fn set_background_color(&self, color: &str) -> Result<()> {
        POINT_BACKGROUND_COLOR.set_color(&self.node, color)
    }

    /// Returns the stroke width.
    pub fn get_border_width(&self) -> f64 {
        self.node.get_value(&point_keys::BORDER_WIDTH, 1.0)
    }

    /// Sets the stroke width.
    pub fn set_border_width(&self, width: f64) -> Result<()> {
        self.node.set_non_negative(&point_keys::BORDER_WIDTH, width)
    }

    /// Returns the radius.
    pub fn get_radius(&self) -> f64 {
        self.node.get_value(&point_keys::RADIUS, 3.0)
    }

    /// Sets the radius.
    pub fn set_radius(&self, radius: f64) -> Result<()> {
        self.node.set_non_negative(&point_keys::RADIUS, radius)
    }

    /// Returns the radius when hovered.
    pub fn get_hover_radius(&self) -> f64 {
        self.node.get_value(&point_keys::HOVER_RADIUS, 4.0)
    }

    /// Sets the radius when hovered.
    pub fn set_hover_radius(&self, radius: f64) -> Result<()> {
        self.node.set_non_negative(&point_keys::HOVER_RADIUS, radius)
    }

    /// Returns the point style.
    pub fn get_point_style(&self) -> PointStyleValue {
        POINT_STYLE.get(&self.node)
    }

    /// Returns the point style name; other variants read as the default.
    pub fn get_point_style_as_style(&self) -> PointStyle {
        POINT_STYLE.get_as_style(&self.node)
    }

    /// Sets the point style.
    pub fn set_point_style(&self, value: PointStyleValue) -> Result<()> {
        POINT_STYLE.set(&self.node, value)
    }

    /// Returns `true` when points are explicitly hidden.
    pub fn is_point_style_disabled(&self) -> bool {
        POINT_STYLE.is_disabled(&self.node)
    }
}
