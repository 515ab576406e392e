use gradebook_core::{grade_distribution, Assignment, Course, GradeDistribution, LetterGrade};

fn course(id: u32, scores: &[(f64, f64)]) -> Course {
    let mut course = Course::new(id, format!("C{id}"), 3.0).unwrap();
    for (earned, max) in scores {
        course
            .assignments
            .push(Assignment::new("Work", *earned, *max).unwrap());
    }
    course
}

#[test]
fn counts_each_band_and_skips_ungraded() {
    let courses = vec![
        course(1, &[(95.0, 100.0)]),
        course(2, &[(91.0, 100.0), (89.0, 100.0)]),
        course(3, &[(75.0, 100.0)]),
        course(4, &[]),
        course(5, &[(10.0, 100.0)]),
    ];

    let distribution = grade_distribution(&courses).unwrap();
    assert_eq!(
        distribution,
        GradeDistribution {
            a: 2,
            b: 0,
            c: 1,
            d: 0,
            f: 1,
        }
    );
    assert_eq!(distribution.total(), 4);
    assert_eq!(distribution.count(LetterGrade::A), 2);
}

#[test]
fn no_graded_courses_is_distinct_from_empty_bands() {
    assert_eq!(grade_distribution(&[]), None);
    assert_eq!(grade_distribution(&[course(1, &[]), course(2, &[])]), None);
}
