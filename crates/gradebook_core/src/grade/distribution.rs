//! Letter distribution across graded courses.

use crate::grade::engine::{course_grade, has_graded_courses};
use crate::grade::letter::LetterGrade;
use crate::model::course::Course;
use serde::{Deserialize, Serialize};

/// Count of graded courses per letter band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeDistribution {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
    pub f: usize,
}

impl GradeDistribution {
    pub fn count(&self, letter: LetterGrade) -> usize {
        match letter {
            LetterGrade::A => self.a,
            LetterGrade::B => self.b,
            LetterGrade::C => self.c,
            LetterGrade::D => self.d,
            LetterGrade::F => self.f,
        }
    }

    pub fn total(&self) -> usize {
        self.a + self.b + self.c + self.d + self.f
    }

    fn record(&mut self, letter: LetterGrade) {
        match letter {
            LetterGrade::A => self.a += 1,
            LetterGrade::B => self.b += 1,
            LetterGrade::C => self.c += 1,
            LetterGrade::D => self.d += 1,
            LetterGrade::F => self.f += 1,
        }
    }
}

/// Counts graded courses by letter.
///
/// Returns `None` when no course has an assignment; ungraded courses are
/// skipped rather than counted as F.
pub fn grade_distribution(courses: &[Course]) -> Option<GradeDistribution> {
    if !has_graded_courses(courses) {
        return None;
    }

    let mut distribution = GradeDistribution::default();
    for grade in courses.iter().filter_map(course_grade) {
        distribution.record(grade.letter);
    }
    Some(distribution)
}
