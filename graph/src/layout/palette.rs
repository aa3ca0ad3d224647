use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use tracing::{debug, warn};

/// Lane color, opaque to the layout engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Leases colors to open lanes and takes them back as lanes close.
///
/// Colors are handed out in FIFO order. A returned color only becomes
/// available again once every lane holding it has given it back.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    colors: Vec<Color>,
    queue: VecDeque<Color>,
    leases: HashMap<Color, usize>,
}

impl ColorPalette {
    pub fn new(colors: Vec<Color>) -> Self {
        let queue = colors.iter().cloned().collect();
        let leases = colors.iter().map(|c| (c.clone(), 0)).collect();
        Self {
            colors,
            queue,
            leases,
        }
    }

    /// Lease the next available color.
    ///
    /// Once the queue runs dry it is refilled with the whole configured list,
    /// including colors still leased to open lanes. Returns `None` only when
    /// the palette has no colors at all.
    pub fn pop(&mut self) -> Option<Color> {
        if self.queue.is_empty() {
            debug!(
                leased = self.leased_count(),
                "palette exhausted, reissuing full color list"
            );
            self.queue.extend(self.colors.iter().cloned());
        }
        let color = self.queue.pop_front()?;
        *self.leases.entry(color.clone()).or_insert(0) += 1;
        Some(color)
    }

    /// Give back one lease of `color`
    pub fn push(&mut self, color: Color) {
        match self.leases.get_mut(&color) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.queue.push_back(color);
                }
            }
            _ => warn!(%color, "returned a color that was not leased"),
        }
    }

    /// Live leases of `color`
    pub fn leases(&self, color: &Color) -> usize {
        self.leases.get(color).copied().unwrap_or(0)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Colors currently waiting in the queue, front first
    pub fn available(&self) -> impl Iterator<Item = &Color> {
        self.queue.iter()
    }

    fn leased_count(&self) -> usize {
        self.leases.values().filter(|&&n| n > 0).count()
    }
}
