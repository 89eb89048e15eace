//! Responsive grid layout
//!
//! Mobile-first responsive values and the grid templates the footer uses.
//! A [`Responsive`] value holds a base plus optional overrides per
//! breakpoint; the override of the largest active breakpoint wins. The same
//! model drives both the generated CSS media queries and the logical column
//! count reported for the current viewport, so the two cannot disagree.

use crate::theme::{Breakpoint, Breakpoints};

/// Ordered `fr` tracks of a CSS grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTemplate {
    tracks: Vec<u8>,
}

impl GridTemplate {
    /// `count` equal-width columns
    pub fn equal(count: usize) -> Self {
        Self {
            tracks: vec![1; count.max(1)],
        }
    }

    /// Columns with the given relative widths; an empty list means one column
    pub fn fractions(tracks: &[u8]) -> Self {
        if tracks.is_empty() {
            return Self::equal(1);
        }
        Self {
            tracks: tracks.to_vec(),
        }
    }

    /// Logical column count
    pub fn columns(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[u8] {
        &self.tracks
    }

    /// `grid-template-columns` value, e.g. `2fr 1fr 1fr`
    pub fn to_css(&self) -> String {
        self.tracks
            .iter()
            .map(|fraction| format!("minmax(0, {fraction}fr)"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A mobile-first value with optional per-breakpoint overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responsive<T> {
    pub base: T,
    pub sm: Option<T>,
    pub md: Option<T>,
    pub lg: Option<T>,
    pub xl: Option<T>,
}

impl<T> Responsive<T> {
    /// Same value at every width
    pub const fn fixed(base: T) -> Self {
        Self {
            base,
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }

    /// Overrides the value from `breakpoint` upward
    #[must_use]
    pub fn at(mut self, breakpoint: Breakpoint, value: T) -> Self {
        match breakpoint {
            Breakpoint::Sm => self.sm = Some(value),
            Breakpoint::Md => self.md = Some(value),
            Breakpoint::Lg => self.lg = Some(value),
            Breakpoint::Xl => self.xl = Some(value),
        }
        self
    }

    pub const fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match breakpoint {
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
            Breakpoint::Xl => self.xl.as_ref(),
        }
    }

    /// Breakpoint overrides in ascending order
    pub fn overrides(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::ALL
            .into_iter()
            .filter_map(|breakpoint| self.get(breakpoint).map(|value| (breakpoint, value)))
    }

    /// Value in effect for a viewport `width_px` wide
    pub fn resolve(&self, width_px: f64, breakpoints: &Breakpoints) -> &T {
        self.overrides()
            .filter(|(breakpoint, _)| breakpoints.is_active(*breakpoint, width_px))
            .last()
            .map_or(&self.base, |(_, value)| value)
    }
}

/// A CSS grid whose template changes with the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveGrid {
    pub template: Responsive<GridTemplate>,
    /// Gap between cells in rem
    pub gap_rem: f32,
}

impl ResponsiveGrid {
    pub const fn new(template: Responsive<GridTemplate>, gap_rem: f32) -> Self {
        Self { template, gap_rem }
    }

    /// Logical column count at `width_px`
    pub fn columns_at(&self, width_px: f64, breakpoints: &Breakpoints) -> usize {
        self.template.resolve(width_px, breakpoints).columns()
    }

    /// Mobile-first stylesheet for `selector`: a base rule plus one
    /// `min-width` media query per breakpoint override
    pub fn to_css(&self, selector: &str, breakpoints: &Breakpoints) -> String {
        let base = format!(
            "{selector}{{display:grid;gap:{}rem;grid-template-columns:{};}}",
            self.gap_rem,
            self.template.base.to_css()
        );
        let media: String = self
            .template
            .overrides()
            .map(|(breakpoint, template)| {
                format!(
                    "@media screen and (min-width:{}em){{{selector}{{grid-template-columns:{};}}}}",
                    breakpoints.min_width_em(breakpoint),
                    template.to_css()
                )
            })
            .collect();
        base + &media
    }
}

/// Footer link grid: one column, then two, then a wide brand column plus four
pub fn footer_link_grid() -> ResponsiveGrid {
    ResponsiveGrid::new(
        Responsive::fixed(GridTemplate::equal(1))
            .at(Breakpoint::Sm, GridTemplate::equal(2))
            .at(Breakpoint::Md, GridTemplate::fractions(&[2, 1, 1, 1, 1])),
        2.0,
    )
}

/// Payment badge row: two per row, four from `md`
pub fn payment_badge_grid() -> ResponsiveGrid {
    ResponsiveGrid::new(
        Responsive::fixed(GridTemplate::equal(2)).at(Breakpoint::Md, GridTemplate::equal(4)),
        1.0,
    )
}

/// Trust badge row: two per row, three from `md`
pub fn trust_badge_grid() -> ResponsiveGrid {
    ResponsiveGrid::new(
        Responsive::fixed(GridTemplate::equal(2)).at(Breakpoint::Md, GridTemplate::equal(3)),
        1.0,
    )
}
