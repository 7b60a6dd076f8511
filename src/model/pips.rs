//! Pip layout templates for number cards
//!
//! Coordinates are percentages inside the card's center area (0-100),
//! shared by every suit of the same rank.

/// Normalized pip position inside the center area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipPosition {
    pub x: f32,
    pub y: f32,
}

const fn pip(x: f32, y: f32) -> PipPosition {
    PipPosition { x, y }
}

const TWO: [PipPosition; 2] = [pip(50.0, 20.0), pip(50.0, 80.0)];

const THREE: [PipPosition; 3] = [pip(50.0, 20.0), pip(50.0, 50.0), pip(50.0, 80.0)];

const FOUR: [PipPosition; 4] = [
    pip(30.0, 20.0),
    pip(70.0, 20.0),
    pip(30.0, 80.0),
    pip(70.0, 80.0),
];

const FIVE: [PipPosition; 5] = [
    pip(30.0, 20.0),
    pip(70.0, 20.0),
    pip(50.0, 50.0),
    pip(30.0, 80.0),
    pip(70.0, 80.0),
];

const SIX: [PipPosition; 6] = [
    pip(30.0, 20.0),
    pip(70.0, 20.0),
    pip(30.0, 50.0),
    pip(70.0, 50.0),
    pip(30.0, 80.0),
    pip(70.0, 80.0),
];

const SEVEN: [PipPosition; 7] = [
    pip(50.0, 10.0),
    pip(30.0, 25.0),
    pip(70.0, 25.0),
    pip(30.0, 50.0),
    pip(70.0, 50.0),
    pip(30.0, 75.0),
    pip(70.0, 75.0),
];

const EIGHT: [PipPosition; 8] = [
    pip(30.0, 15.0),
    pip(70.0, 15.0),
    pip(30.0, 35.0),
    pip(70.0, 35.0),
    pip(30.0, 65.0),
    pip(70.0, 65.0),
    pip(30.0, 85.0),
    pip(70.0, 85.0),
];

const NINE: [PipPosition; 9] = [
    pip(30.0, 15.0),
    pip(70.0, 15.0),
    pip(30.0, 35.0),
    pip(70.0, 35.0),
    pip(50.0, 50.0),
    pip(30.0, 65.0),
    pip(70.0, 65.0),
    pip(30.0, 85.0),
    pip(70.0, 85.0),
];

const TEN: [PipPosition; 10] = [
    pip(30.0, 15.0),
    pip(70.0, 15.0),
    pip(30.0, 30.0),
    pip(70.0, 30.0),
    pip(30.0, 50.0),
    pip(70.0, 50.0),
    pip(30.0, 70.0),
    pip(70.0, 70.0),
    pip(30.0, 85.0),
    pip(70.0, 85.0),
];

/// Template for a numeric rank, None outside 2..=10
pub fn pip_layout(rank: u8) -> Option<&'static [PipPosition]> {
    let layout: &'static [PipPosition] = match rank {
        2 => &TWO,
        3 => &THREE,
        4 => &FOUR,
        5 => &FIVE,
        6 => &SIX,
        7 => &SEVEN,
        8 => &EIGHT,
        9 => &NINE,
        10 => &TEN,
        _ => return None,
    };
    Some(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pip_count_matches_rank() {
        for rank in 2..=10u8 {
            let layout = pip_layout(rank).unwrap();
            assert_eq!(layout.len(), rank as usize, "rank {}", rank);
        }
    }

    #[test]
    fn test_positions_inside_center_area() {
        for rank in 2..=10u8 {
            for pos in pip_layout(rank).unwrap() {
                assert!((0.0..=100.0).contains(&pos.x));
                assert!((0.0..=100.0).contains(&pos.y));
            }
        }
    }

    #[test]
    fn test_no_template_outside_number_ranks() {
        assert!(pip_layout(0).is_none());
        assert!(pip_layout(1).is_none());
        assert!(pip_layout(11).is_none());
    }
}
