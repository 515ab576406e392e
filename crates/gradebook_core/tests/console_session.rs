use gradebook_core::{new_session, ConsoleError, ConsoleResult, Course};
use std::io::Cursor;

/// Runs a scripted session, one input line per entry. Each step groups
/// the lines of one menu action; every action other than exit ends with
/// an empty line for the "Press Enter" pause.
fn run_script(steps: &[&[&str]]) -> (ConsoleResult<()>, String, Vec<Course>) {
    let mut script = steps.concat().join("\n");
    script.push('\n');
    let mut session = new_session(Cursor::new(script.into_bytes()), Vec::new());
    let result = session.run();
    let (service, console) = session.into_parts();
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output, service.courses().to_vec())
}

#[test]
fn add_courses_and_assignments_then_show_gpa() {
    let (result, output, courses) = run_script(&[
        &["1", "MATH 2413", "4", ""],
        &["1", "HIST 1301", "3", ""],
        &["3", "1", "Exam 1", "100", "95", ""],
        &["3", "2", "Essay", "100", "65", ""],
        &["5", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("Course added with id 1."));
    assert!(output.contains("Course added with id 2."));
    assert!(output.contains("Assignment added to course 'HIST 1301'."));
    // (A x 4 + D x 3) / 7
    assert!(output.contains("Overall GPA (4.0 scale): 2.71"));
    assert!(output.ends_with("Exiting GPA & Grade Calculator. Goodbye!\n\n"));
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[1].assignments[0].earned, 65.0);
}

#[test]
fn invalid_menu_input_reprompts() {
    let (result, output, _) = run_script(&[&["abc", "12", "0"]]);
    assert!(result.is_ok());
    assert!(output.contains("Invalid input. Please enter a whole number."));
    assert!(output.contains("Please enter a number between 0 and 8."));
}

#[test]
fn input_ending_before_exit_is_an_error() {
    let (result, _, courses) = run_script(&[&["1", "MATH 2413", "4", ""]]);
    assert!(matches!(result, Err(ConsoleError::InputClosed)));
    assert_eq!(courses.len(), 1);
}

#[test]
fn empty_store_preconditions_short_circuit() {
    let (result, output, courses) = run_script(&[
        &["3", ""],
        &["4", ""],
        &["5", ""],
        &["6", ""],
        &["7", ""],
        &["8", ""],
        &["2", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("There are no courses yet. Add a course first."));
    assert!(output.contains("No courses available.\n"));
    assert!(output.contains("No courses available yet.\n"));
    assert!(output.contains("No courses available yet. Add a course first."));
    assert!(output.contains("No courses have been added yet."));
    assert!(courses.is_empty());
}

#[test]
fn unknown_course_id_aborts_without_side_effects() {
    let (result, output, courses) = run_script(&[
        &["1", "CHEM 1411", "4", ""],
        &["3", "9", ""],
        &["2", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("No course found with that ID."));
    assert!(output.contains("| Grade: N/A (no assignments yet)"));
    assert!(courses[0].assignments.is_empty());
}

#[test]
fn credit_hours_out_of_range_reprompts() {
    let (result, output, courses) = run_script(&[
        &["1", "Seminar", "0.25", "8", "0.5", ""],
        &["4", "1", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    let warnings = output.matches("Please enter a value between 0.5 and 6.").count();
    assert_eq!(warnings, 2);
    assert!(output.contains("Credit hours: 0.5\nNo assignments have been added"));
    assert_eq!(courses[0].credit_hours, 0.5);
}

#[test]
fn earned_points_are_bounded_by_max() {
    let (result, output, courses) = run_script(&[
        &["1", "ENGL 1301", "3", ""],
        &["3", "1", "Draft", "20", "25", "18", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("Please enter a value between 0 and 20."));
    assert_eq!(courses[0].assignments[0].earned, 18.0);
    assert_eq!(courses[0].assignments[0].max, 20.0);
}

#[test]
fn course_details_list_assignments_and_average() {
    let (result, output, _) = run_script(&[
        &["1", "BIOL 1406", "4", ""],
        &["3", "1", "Lab 1", "50", "40", ""],
        &["3", "1", "Lab 2", "10", "10", ""],
        &["4", "1", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("Course details for: BIOL 1406 (ID 1)"));
    assert!(output.contains("Lab 1                    40             50             80.00"));
    assert!(output.contains("Course average: 90.00% (A)"));
}

#[test]
fn what_if_reports_projection_without_saving() {
    let (result, output, courses) = run_script(&[
        &["1", "COSC 2436", "3", ""],
        &["3", "1", "Project 1", "100", "80", ""],
        &["6", "1", "Final", "100", "100", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("Current course average: 80.00% (B)"));
    assert!(output.contains("Old course average: 80.00% (B)"));
    assert!(output.contains("New course average WITH hypothetical assignment: 90.00% (A)"));
    assert!(output.contains("Old overall GPA: 3.00"));
    assert!(output.contains("New overall GPA WITH hypothetical assignment: 4.00"));
    assert!(output.contains("Remember: This change was NOT saved."));
    assert_eq!(courses[0].assignments.len(), 1);
}

#[test]
fn what_if_on_ungraded_course_shows_not_available() {
    let (result, output, _) = run_script(&[
        &["1", "ARTS 1301", "3", ""],
        &["6", "1", "Portfolio", "50", "30", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("This course currently has NO assignments."));
    assert!(output.contains("Old course average: N/A (no assignments before what-if)"));
    assert!(output.contains("New course average WITH hypothetical assignment: 60.00% (D)"));
}

#[test]
fn manage_rename_and_confirmed_delete() {
    let (result, output, courses) = run_script(&[
        &["1", "PSYC 2301", "3", ""],
        &["7"],
        &["1", "1", "", ""],
        &["1", "1", "PSYC 2302", ""],
        &["5", "1", "0", ""],
        &["5", "1", "1", ""],
        &["0", ""],
        &["2", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("Name not changed (empty name entered)."));
    assert!(output.contains("Course name updated."));
    assert!(output.contains(
        "Are you sure you want to delete the entire course 'PSYC 2302' and all its assignments?"
    ));
    assert!(output.contains("Course deletion cancelled."));
    assert!(output.contains("Course deleted."));
    assert!(output.contains("No courses have been added yet."));
    assert!(courses.is_empty());
}

#[test]
fn manage_ops_after_deleting_last_course_skip_prompts() {
    let (result, output, courses) = run_script(&[
        &["1", "PSYC 2301", "3", ""],
        &["7"],
        &["5", "1", "1", ""],
        &["1", ""],
        &["2", ""],
        &["3", ""],
        &["4", ""],
        &["5", ""],
        &["0", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("Course deleted."));
    assert_eq!(output.matches("No courses available.\n").count(), 5);
    assert_eq!(output.matches("Enter the ID of the course").count(), 1);
    assert!(courses.is_empty());
}

#[test]
fn manage_edit_and_delete_assignment() {
    let (result, output, courses) = run_script(&[
        &["1", "MATH 2414", "4", ""],
        &["3", "1", "Quiz 1", "10", "5", ""],
        &["3", "1", "Quiz 2", "10", "6", ""],
        &["7"],
        &["2", "1", "4.5", ""],
        &["3", "1", "1", "", "20", "19", ""],
        &["4", "1", "2", "yes", ""],
        &["4", "1", "2", "1", ""],
        &["0", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("Current credit hours for MATH 2414: 4"));
    assert!(output.contains("Credit hours updated."));
    assert!(output.contains("1. Quiz 1 (earned 5 / 10)"));
    assert!(output.contains("Assignment updated."));
    assert!(output.contains("Deletion cancelled."));
    assert!(output.contains("Assignment deleted."));

    let course = &courses[0];
    assert_eq!(course.credit_hours, 4.5);
    assert_eq!(course.assignments.len(), 1);
    assert_eq!(course.assignments[0].name, "Quiz 1");
    assert_eq!(course.assignments[0].earned, 19.0);
    assert_eq!(course.assignments[0].max, 20.0);
}

#[test]
fn edit_on_course_without_assignments_is_rejected() {
    let (result, output, _) = run_script(&[
        &["1", "GOVT 2305", "3", ""],
        &["7"],
        &["3", "1", ""],
        &["0", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("This course has no assignments to edit."));
}

#[test]
fn grade_distribution_excludes_ungraded_courses() {
    let (result, output, _) = run_script(&[
        &["1", "A course", "3", ""],
        &["1", "C course", "3", ""],
        &["1", "Empty", "3", ""],
        &["8", ""],
        &["3", "1", "Test", "100", "93", ""],
        &["3", "2", "Test", "100", "71", ""],
        &["8", ""],
        &["0"],
    ]);

    assert!(result.is_ok());
    assert!(output.contains("No graded courses yet. Add assignments first."));
    assert!(output.contains("Total graded courses: 2\nA: 1\nB: 0\nC: 1\nD: 0\nF: 0\n"));
}
