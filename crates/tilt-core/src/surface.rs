//! Write-only view of a styled element.
//!
//! The controller never owns or queries a surface; it only pushes the two
//! style values it computes. The web front end implements this over a DOM
//! element, tests and the native replay use [`MemorySurface`].

pub trait Surface {
    fn set_transform(&mut self, value: &str);
    fn set_background_position(&mut self, value: &str);
}

/// Surface that keeps the last written values in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub transform: Option<String>,
    pub background_position: Option<String>,
    pub writes: usize,
}

impl Surface for MemorySurface {
    fn set_transform(&mut self, value: &str) {
        self.transform = Some(value.to_owned());
        self.writes += 1;
    }

    fn set_background_position(&mut self, value: &str) {
        self.background_position = Some(value.to_owned());
        self.writes += 1;
    }
}
