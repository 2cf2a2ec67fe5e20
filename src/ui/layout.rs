pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyArrangement {
    /// Snapshot on the left, summary and calendar stacked on the right.
    SideBySide,
    /// Summary above calendar, snapshot hidden.
    Stacked,
}

#[must_use]
pub fn body_arrangement(width: u16) -> BodyArrangement {
    if width >= 90 {
        BodyArrangement::SideBySide
    } else {
        BodyArrangement::Stacked
    }
}

/// Width of one calendar day cell for the given inner panel width.
#[must_use]
pub fn calendar_cell_width(inner_width: u16) -> usize {
    match inner_width {
        35..=u16::MAX => 5,
        28..=34 => 4,
        _ => 3,
    }
}

#[must_use]
pub fn fits(width: u16, height: u16) -> bool {
    width >= MIN_WIDTH && height >= MIN_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrangement_switches_at_ninety_columns() {
        assert_eq!(body_arrangement(120), BodyArrangement::SideBySide);
        assert_eq!(body_arrangement(90), BodyArrangement::SideBySide);
        assert_eq!(body_arrangement(89), BodyArrangement::Stacked);
    }

    #[test]
    fn calendar_cells_shrink_with_panel() {
        assert_eq!(calendar_cell_width(60), 5);
        assert_eq!(calendar_cell_width(35), 5);
        assert_eq!(calendar_cell_width(34), 4);
        assert_eq!(calendar_cell_width(28), 4);
        assert_eq!(calendar_cell_width(27), 3);
    }

    #[test]
    fn minimum_size_is_inclusive() {
        assert!(fits(60, 20));
        assert!(!fits(59, 20));
        assert!(!fits(60, 19));
    }
}
