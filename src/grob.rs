//! Opaque drawable handles produced by the drawing backend.
//!
//! This engine arranges drawables; it never draws. Backends hand in
//! [`Drawable`]s (rendered axes, strip labels, geometry layers) and the
//! engine reads nothing from them beyond their measured natural size.
//!
//! # Architecture
//!
//! - `DrawableTrait`: behavior a backend drawable implements
//! - `Drawable`: cloneable wrapper holding an `Arc<dyn DrawableTrait>`
//! - `Stack`: ordered overlay used when panel layers are combined
//! - `TextRenderer`: backend callback that turns strip label text into a
//!   measured drawable

use std::fmt;
use std::sync::Arc;

use crate::table::GridTable;
use crate::theme::Theme;

/// Measured extent of a drawable, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// The empty extent.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Behavior required of backend drawables.
pub trait DrawableTrait: fmt::Debug + Send + Sync {
    /// Natural (content-driven) size, used to size strip and axis bands.
    fn natural_size(&self) -> Size;

    /// Downcast to a composite table when this drawable is one.
    ///
    /// The layout driver walks the returned tree through this hook; backend
    /// drawables keep the default.
    fn as_table(&self) -> Option<&GridTable> {
        None
    }
}

/// Cloneable handle to an opaque drawable.
#[derive(Debug, Clone)]
pub struct Drawable {
    inner: Arc<dyn DrawableTrait>,
}

impl Drawable {
    pub fn new(inner: impl DrawableTrait + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Zero-sized placeholder for empty grid cells and absent bands.
    pub fn null() -> Self {
        Self::new(NullDrawable)
    }

    /// Measured natural size.
    pub fn natural_size(&self) -> Size {
        self.inner.natural_size()
    }

    /// The nested composite table, when this drawable is one.
    pub fn as_table(&self) -> Option<&GridTable> {
        self.inner.as_table()
    }
}

/// Zero-size placeholder drawable.
#[derive(Debug, Clone, Copy)]
struct NullDrawable;

impl DrawableTrait for NullDrawable {
    fn natural_size(&self) -> Size {
        Size::ZERO
    }
}

/// Ordered overlay of drawables.
///
/// The first child is drawn first (background), the last on top
/// (foreground). Panel assembly stacks background, content layers and
/// foreground this way.
#[derive(Debug, Clone)]
pub struct Stack {
    children: Vec<Drawable>,
}

impl Stack {
    pub fn new(children: Vec<Drawable>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Drawable] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl DrawableTrait for Stack {
    /// The overlay is as large as its largest child.
    fn natural_size(&self) -> Size {
        self.children.iter().map(Drawable::natural_size).fold(
            Size::ZERO,
            |acc, size| Size {
                width: acc.width.max(size.width),
                height: acc.height.max(size.height),
            },
        )
    }
}

/// Backend text rendering for strip labels.
///
/// Text metrics belong to the backend; the engine only reads the measured
/// size of what comes back.
pub trait TextRenderer {
    fn render(&self, text: &str, theme: &Theme) -> Drawable;
}
