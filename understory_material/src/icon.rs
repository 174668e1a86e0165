// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG icons: a fixed vector path in a 24×24 view box plus pass-through visual props.
//!
//! ## Overview
//!
//! An [`SvgIcon`] parses its path data once into a [`BezPath`], so toolkits can
//! either render the geometry directly (see [`SvgIcon::scaled_path`]) or emit
//! markup (see [`SvgIcon::to_svg`], or format the icon with `{}`).
//!
//! ```
//! use understory_material::icon::{self, IconProps};
//!
//! let icon = icon::airplay(IconProps::new().size(48.0).label("Cast")).unwrap();
//! let svg = icon.to_svg();
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(r#"aria-label="Cast""#));
//! ```

use alloc::string::{String, ToString};

use kurbo::{Affine, BezPath, Rect, Shape};

/// View box shared by Material icons.
pub const VIEW_BOX: Rect = Rect::new(0.0, 0.0, 24.0, 24.0);

/// Default rendered edge length, in CSS pixels.
pub const DEFAULT_SIZE: f64 = 24.0;

/// Path data of the `airplay` icon.
pub const AIRPLAY_PATH: &str = "M6 22h12l-6-6zM21 3H3c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h4v-2H3V5h18v12h-4v2h4c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2z";

/// Errors from building an icon.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The path data could not be parsed.
    #[error("invalid icon path data: {0}")]
    InvalidPath(#[from] kurbo::SvgParseError),
    /// The path data parsed but contains no segments.
    #[error("icon path data is empty")]
    EmptyPath,
    /// The rendered size is zero, negative, or not finite.
    #[error("icon size must be finite and positive, got {0}")]
    InvalidSize(f64),
}

/// Visual props passed through to the rendered icon.
#[derive(Clone, Debug, PartialEq)]
pub struct IconProps {
    /// Rendered edge length, in CSS pixels.
    pub size: f64,
    /// Fill color; `None` inherits `currentColor`.
    pub color: Option<String>,
    /// Extra class names appended after the icon's own.
    pub class_name: Option<String>,
    /// Accessible label. When absent the icon is hidden from assistive technology.
    pub label: Option<String>,
}

impl Default for IconProps {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            color: None,
            class_name: None,
            label: None,
        }
    }
}

impl IconProps {
    /// Default props: 24px, inherited color, decorative.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendered edge length.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the fill color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set extra class names.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the accessible label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether the icon is hidden from assistive technology.
    pub fn aria_hidden(&self) -> bool {
        self.label.is_none()
    }
}

/// An icon: a parsed vector path in [`VIEW_BOX`] and its visual props.
#[derive(Clone, Debug)]
pub struct SvgIcon {
    path: BezPath,
    props: IconProps,
}

impl SvgIcon {
    /// Parse `path_data` (SVG path syntax, in [`VIEW_BOX`] coordinates).
    ///
    /// `props.size` must be finite and greater than zero.
    pub fn new(path_data: &str, props: IconProps) -> Result<Self, IconError> {
        if !props.size.is_finite() || props.size <= 0.0 {
            return Err(IconError::InvalidSize(props.size));
        }
        let path = BezPath::from_svg(path_data)?;
        if path.elements().is_empty() {
            return Err(IconError::EmptyPath);
        }
        Ok(Self { path, props })
    }

    /// The path in view box coordinates.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// The visual props.
    pub fn props(&self) -> &IconProps {
        &self.props
    }

    /// Tight bounds of the path in view box coordinates.
    pub fn bounds(&self) -> Rect {
        self.path.bounding_box()
    }

    /// Transform from view box coordinates to rendered pixels.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.props.size / VIEW_BOX.width())
            * Affine::translate(-VIEW_BOX.origin().to_vec2())
    }

    /// The path scaled to the rendered size.
    pub fn scaled_path(&self) -> BezPath {
        self.transform() * self.path.clone()
    }

    /// Render as SVG markup.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for SvgIcon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let size = self.props.size;
        let color = self.props.color.as_deref().unwrap_or("currentColor");
        f.write_str("<svg class=\"rmd-icon rmd-icon--svg")?;
        if let Some(extra) = &self.props.class_name {
            write!(f, " {}", escape_attr(extra))?;
        }
        write!(
            f,
            r#"" viewBox="{} {} {} {}""#,
            VIEW_BOX.x0,
            VIEW_BOX.y0,
            VIEW_BOX.width(),
            VIEW_BOX.height()
        )?;
        write!(f, r#" width="{size}" height="{size}""#)?;
        write!(f, r#" fill="{}" focusable="false""#, escape_attr(color))?;
        match &self.props.label {
            Some(label) => write!(f, r#" role="img" aria-label="{}""#, escape_attr(label))?,
            None => f.write_str(r#" aria-hidden="true""#)?,
        }
        write!(f, r#"><path d="{}"/></svg>"#, self.path.to_svg())
    }
}

/// Build the `airplay` icon.
pub fn airplay(props: IconProps) -> Result<SvgIcon, IconError> {
    SvgIcon::new(AIRPLAY_PATH, props)
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
