//! Layout plan parser.
//!
//! One directive per line; `#` and `%%` start comments; keywords are
//! case-insensitive.
//!
//! ```text
//! root 0,0          optional, default 0,0, before any rect
//! canvas 20x10      optional
//! rect 20x10        anchored at the root
//! rect 4x4 at 3,0   anchored at the vertex at (3, 0)
//! ```

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::grid::Point;

static ROOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^root\s+(-?\d+)\s*,\s*(-?\d+)$").expect("valid regex"));

static CANVAS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^canvas\s+(\d+)\s*x\s*(\d+)$").expect("valid regex"));

static RECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rect\s+(\d+)\s*x\s*(\d+)(?:\s+at\s+(-?\d+)\s*,\s*(-?\d+))?$")
        .expect("valid regex")
});

/// Largest accepted room or canvas side, and largest coordinate magnitude.
pub const MAX_EXTENT: i64 = 1024;

/// One rectangle to attach, in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectStep {
    pub width: i64,
    pub height: i64,
    /// Point of the existing vertex to anchor at; `None` means the root.
    pub anchor: Option<Point>,
    /// 1-based source line, for error reporting.
    pub line: usize,
}

/// A parsed layout plan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    pub root: Point,
    /// Declared canvas size (width, height) in grid cells.
    pub canvas: Option<(usize, usize)>,
    pub rects: Vec<RectStep>,
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find('#'), line.find("%%")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    line[..end].trim()
}

fn number<T: FromStr>(line: usize, text: &str) -> Result<T> {
    text.parse()
        .map_err(|_| Error::parse(line, format!("number out of range: {text}")))
}

fn bounded<T>(line: usize, what: &str, text: &str, range: RangeInclusive<T>) -> Result<T>
where
    T: FromStr + PartialOrd + Display,
{
    let value: T = number(line, text)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(Error::parse(
            line,
            format!("{what} out of range: {value} (expected {}..={})", range.start(), range.end()),
        ))
    }
}

fn coordinate(line: usize, text: &str) -> Result<i64> {
    bounded(line, "coordinate", text, -MAX_EXTENT..=MAX_EXTENT)
}

fn size(line: usize, text: &str) -> Result<i64> {
    bounded(line, "size", text, 0..=MAX_EXTENT)
}

/// Parse plan source text.
pub fn parse(src: &str) -> Result<Plan> {
    let mut plan = Plan::default();
    let mut seen_root = false;

    for (index, raw) in src.lines().enumerate() {
        let line = index + 1;
        let text = strip_comment(raw);
        if text.is_empty() {
            continue;
        }

        if let Some(caps) = ROOT_RE.captures(text) {
            if seen_root {
                return Err(Error::DuplicateDirective { line, directive: "root" });
            }
            if !plan.rects.is_empty() {
                return Err(Error::RootAfterRect { line });
            }
            seen_root = true;
            plan.root = Point::new(coordinate(line, &caps[1])?, coordinate(line, &caps[2])?);
        } else if let Some(caps) = CANVAS_RE.captures(text) {
            if plan.canvas.is_some() {
                return Err(Error::DuplicateDirective { line, directive: "canvas" });
            }
            let limit = MAX_EXTENT as usize;
            plan.canvas = Some((
                bounded(line, "canvas size", &caps[1], 0..=limit)?,
                bounded(line, "canvas size", &caps[2], 0..=limit)?,
            ));
        } else if let Some(caps) = RECT_RE.captures(text) {
            let anchor = match (caps.get(3), caps.get(4)) {
                (Some(x), Some(y)) => Some(Point::new(coordinate(line, x.as_str())?, coordinate(line, y.as_str())?)),
                _ => None,
            };
            plan.rects.push(RectStep {
                width: size(line, &caps[1])?,
                height: size(line, &caps[2])?,
                anchor,
                line,
            });
        } else {
            let keyword = text.split_whitespace().next().unwrap_or(text);
            return Err(Error::parse(line, format!("unrecognised directive `{keyword}`")));
        }
    }

    Ok(plan)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
