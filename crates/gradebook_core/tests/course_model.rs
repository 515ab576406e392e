use gradebook_core::{
    Assignment, Course, CourseGrade, CourseValidationError, LetterGrade, WhatIfOutcome,
};

#[test]
fn new_course_starts_without_assignments() {
    let course = Course::new(3, "COSC 2436", 3.0).unwrap();
    assert_eq!(course.id, 3);
    assert_eq!(course.name, "COSC 2436");
    assert!(course.assignments.is_empty());
    assert!(!course.is_graded());
}

#[test]
fn assignment_constructor_enforces_score_invariants() {
    assert_eq!(
        Assignment::new("Exam", 1.0, 0.0).unwrap_err(),
        CourseValidationError::NonPositiveMaxPoints(0.0)
    );
    assert_eq!(
        Assignment::new("Exam", -1.0, 10.0).unwrap_err(),
        CourseValidationError::NegativeEarnedPoints(-1.0)
    );
    assert_eq!(
        Assignment::new("Exam", f64::NAN, 10.0).unwrap_err(),
        CourseValidationError::NonFiniteValue("earned points")
    );
    let exam = Assignment::new("Exam", 42.0, 50.0).unwrap();
    assert!((exam.percentage() - 84.0).abs() < 1e-9);
}

#[test]
fn course_serialization_uses_expected_wire_fields() {
    let mut course = Course::new(1, "MATH 2413", 4.0).unwrap();
    course
        .assignments
        .push(Assignment::new("Quiz", 9.0, 10.0).unwrap());

    let json = serde_json::to_value(&course).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "MATH 2413");
    assert_eq!(json["credit_hours"], 4.0);
    assert_eq!(json["assignments"][0]["earned"], 9.0);
    assert_eq!(json["assignments"][0]["max"], 10.0);

    let decoded: Course = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, course);
}

#[test]
fn what_if_outcome_serializes_letters_as_symbols() {
    let outcome = WhatIfOutcome {
        course_id: 2,
        before: None,
        after: CourseGrade {
            percentage: 91.5,
            letter: LetterGrade::A,
        },
        gpa_before: 0.0,
        gpa_after: 4.0,
    };

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["before"], serde_json::Value::Null);
    assert_eq!(json["after"]["letter"], "A");
    assert_eq!(json["gpa_after"], 4.0);
}
