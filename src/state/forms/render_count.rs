//! Per-component render counting and the shade scale used to display it

/// Counter private to one component instance.
///
/// `commit` is the hook invoked once per completed render. The value a render
/// displays is the count before that render's commit, so the badge always
/// trails the committed count by one.
#[derive(Debug, Clone, Default)]
pub struct RenderCounter {
    committed: u32,
    displayed: u32,
}

impl RenderCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed renders
    pub fn count(&self) -> u32 {
        self.committed
    }

    /// Count read by the most recent render
    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    /// Record one completed render
    pub fn commit(&mut self) {
        self.displayed = self.committed;
        self.committed = self.committed.saturating_add(1);
    }
}

/// Intensity steps of the render badge, lightest to darkest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    None,
    Red50,
    Red100,
    Red200,
    Red300,
    Red400,
    Red500,
    Red600,
    Red700,
    Red800,
    Red900,
}

impl Shade {
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => Self::None,
            1..=2 => Self::Red50,
            3..=4 => Self::Red100,
            5..=6 => Self::Red200,
            7..=8 => Self::Red300,
            9..=10 => Self::Red400,
            11..=12 => Self::Red500,
            13..=14 => Self::Red600,
            15..=16 => Self::Red700,
            17..=18 => Self::Red800,
            _ => Self::Red900,
        }
    }

    /// RGB of the matching palette step, `None` for no fill
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Self::None => None,
            Self::Red50 => Some((254, 242, 242)),
            Self::Red100 => Some((254, 226, 226)),
            Self::Red200 => Some((254, 202, 202)),
            Self::Red300 => Some((252, 165, 165)),
            Self::Red400 => Some((248, 113, 113)),
            Self::Red500 => Some((239, 68, 68)),
            Self::Red600 => Some((220, 38, 38)),
            Self::Red700 => Some((185, 28, 28)),
            Self::Red800 => Some((153, 27, 27)),
            Self::Red900 => Some((127, 29, 29)),
        }
    }
}

/// Badge text switches to a light color once the shade gets dark
pub fn uses_light_text(count: u32) -> bool {
    count >= 11
}
