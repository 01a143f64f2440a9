use std::cell::OnceCell;
use std::fmt;

/// Trait that encapsulates turning a validated snapshot into SVG markup.
///
/// Implementors do their validation up front in their constructors, so
/// rendering itself can't fail.
pub trait RenderSvg {
    /// Builds the markup from scratch.
    fn render(&self) -> String;

    /// Wraps the renderer in an [Svg], which renders on first access and
    /// hands out the cached markup afterwards.
    fn into_svg(self) -> Svg<Self>
    where
        Self: Sized,
    {
        Svg::new(self)
    }
}

/// A renderer paired with its memoized markup.
///
/// # Example
/// ```rust
/// use screeps_svg::common::{RenderOptions, RenderSvg};
/// use screeps_svg::snapshot::{ObjectSnapshot, SourceSnapshot};
/// use screeps_svg::objects::SourceSvg;
///
/// let snapshot = ObjectSnapshot::Source(SourceSnapshot { energy: 1500, energy_capacity: 3000 });
/// let svg = SourceSvg::new(&snapshot, &RenderOptions::default()).unwrap().into_svg();
///
/// let first = svg.markup().as_ptr();
/// assert_eq!(svg.markup().as_ptr(), first);
/// assert!(svg.to_string().starts_with("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct Svg<R> {
    renderer: R,
    markup: OnceCell<String>,
}

impl<R: RenderSvg> Svg<R> {
    /// Wraps a renderer without rendering it yet.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            markup: OnceCell::new(),
        }
    }

    /// Returns the markup, rendering and caching it if it's not already cached.
    pub fn markup(&self) -> &str {
        self.markup.get_or_init(|| self.renderer.render())
    }

    /// Returns whether the markup has been rendered yet.
    pub fn is_rendered(&self) -> bool {
        self.markup.get().is_some()
    }

    /// The wrapped renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consumes the wrapper, returning the markup.
    pub fn into_markup(self) -> String {
        let Self { renderer, markup } = self;
        markup.into_inner().unwrap_or_else(|| renderer.render())
    }
}

impl<R: RenderSvg> fmt::Display for Svg<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.markup())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting<'a> {
        calls: &'a Cell<u32>,
    }

    impl RenderSvg for Counting<'_> {
        fn render(&self) -> String {
            self.calls.set(self.calls.get() + 1);
            "<svg></svg>".to_string()
        }
    }

    #[test]
    fn markup_is_rendered_once() {
        let calls = Cell::new(0);
        let svg = Counting { calls: &calls }.into_svg();
        assert!(!svg.is_rendered());

        assert_eq!(svg.markup(), "<svg></svg>");
        assert_eq!(svg.markup(), "<svg></svg>");
        assert_eq!(svg.to_string(), "<svg></svg>");
        assert!(svg.is_rendered());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn into_markup_renders_when_not_cached() {
        let calls = Cell::new(0);
        let svg = Counting { calls: &calls }.into_svg();
        assert_eq!(svg.into_markup(), "<svg></svg>");
        assert_eq!(calls.get(), 1);
    }
}
