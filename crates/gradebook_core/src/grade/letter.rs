//! Letter bands and grade points.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Letter grade band on the fixed A-F scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// All bands, best first.
    pub const ALL: [LetterGrade; 5] = [Self::A, Self::B, Self::C, Self::D, Self::F];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Grade points on the 4.0 scale.
    pub fn grade_points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a percentage to its band. Lower bounds are inclusive and no
/// rounding is applied before comparison.
pub fn letter_for_percentage(percentage: f64) -> LetterGrade {
    if percentage >= 90.0 {
        LetterGrade::A
    } else if percentage >= 80.0 {
        LetterGrade::B
    } else if percentage >= 70.0 {
        LetterGrade::C
    } else if percentage >= 60.0 {
        LetterGrade::D
    } else {
        LetterGrade::F
    }
}

pub fn grade_points_for_letter(letter: LetterGrade) -> f64 {
    letter.grade_points()
}

#[cfg(test)]
mod tests {
    use super::{grade_points_for_letter, letter_for_percentage, LetterGrade};

    #[test]
    fn band_lower_bounds_are_inclusive() {
        assert_eq!(letter_for_percentage(90.0), LetterGrade::A);
        assert_eq!(letter_for_percentage(80.0), LetterGrade::B);
        assert_eq!(letter_for_percentage(70.0), LetterGrade::C);
        assert_eq!(letter_for_percentage(60.0), LetterGrade::D);
        assert_eq!(letter_for_percentage(59.999), LetterGrade::F);
        assert_eq!(letter_for_percentage(89.9999), LetterGrade::B);
    }

    #[test]
    fn grade_points_follow_the_four_point_scale() {
        let points: Vec<f64> = LetterGrade::ALL
            .into_iter()
            .map(grade_points_for_letter)
            .collect();
        assert_eq!(points, vec![4.0, 3.0, 2.0, 1.0, 0.0]);
    }
}
