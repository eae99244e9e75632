use std::fmt;

use thiserror::Error;

use crate::config::{HEADER_ALLOWANCE, SCROLLED_THRESHOLD};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("No section with id '{0}' on the page")]
    MissingSection(SectionId),
}

/// Scrollable page regions, in navbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Experience,
    Projects,
    Stack,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Stack,
        SectionId::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Stack => "stack",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The scrolling surface the page lives in.
pub trait Viewport {
    /// Top of the section element relative to the document, if it is rendered.
    fn section_top(&self, section: SectionId) -> Option<f64>;
    /// Smoothly scroll the document to `top`.
    fn scroll_to(&mut self, top: f64);
}

pub fn scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_ALLOWANCE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Scrolls to `section` leaving room for the fixed header, closing the
    /// mobile menu on the way. Returns the scroll target.
    pub fn navigate_to<V: Viewport + ?Sized>(
        &mut self,
        viewport: &mut V,
        section: SectionId,
    ) -> Result<f64, NavError> {
        let top = viewport
            .section_top(section)
            .ok_or(NavError::MissingSection(section))?;
        let target = scroll_target(top);
        viewport.scroll_to(target);
        self.menu_open = false;
        Ok(target)
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Records the window's vertical scroll position. Returns whether the
    /// scrolled flag changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLLED_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Width of the top progress bar. Binary: empty at the top, full once scrolled.
    pub fn progress_width(&self) -> &'static str {
        if self.scrolled {
            "100%"
        } else {
            "0%"
        }
    }
}
