//! Menu-driven gradebook session.
//!
//! # Responsibility
//! - Loop over the main menu until Exit is chosen.
//! - Scope mutating edit/delete operations inside the manage sub-menu.
//!
//! # Invariants
//! - An unknown course id aborts the current operation with a message
//!   and no side effects.
//! - Destructive operations require an explicit `1` confirmation.
//! - Empty-collection preconditions are checked before any prompt that
//!   depends on them.

use crate::console::input::Console;
use crate::console::menu::{write_main_menu, write_manage_menu, MainMenuChoice, ManageMenuChoice};
use crate::console::render::{
    write_assignment_list, write_course_details, write_course_summary, write_distribution,
    write_overall_gpa, write_what_if_result,
};
use crate::console::{
    ConsoleResult, COURSE_ID_RANGE, MAIN_MENU_RANGE, MANAGE_MENU_RANGE, MAX_POINTS_RANGE,
};
use crate::model::course::{CourseId, MAX_CREDIT_HOURS, MIN_CREDIT_HOURS};
use crate::repo::course_repo::{AssignmentEdit, CourseRepository, RenameOutcome};
use crate::service::gradebook_service::GradebookService;
use log::{debug, info};
use std::io::{BufRead, Write};

const RULE: &str = "==========================================";
const WHAT_IF_INTRO: [&str; 3] = [
    "This feature lets you test a hypothetical assignment.",
    "The program will NOT save it. It only shows what would",
    "happen if that assignment existed.",
];

/// Interactive session binding a service to a console.
pub struct Session<R: CourseRepository, I, O> {
    service: GradebookService<R>,
    console: Console<I, O>,
}

impl<R: CourseRepository, I: BufRead, O: Write> Session<R, I, O> {
    pub fn new(service: GradebookService<R>, console: Console<I, O>) -> Self {
        Self { service, console }
    }

    pub fn into_parts(self) -> (GradebookService<R>, Console<I, O>) {
        (self.service, self.console)
    }

    /// Runs the main menu loop. Returns `Ok(())` only after Exit.
    ///
    /// # Errors
    /// - `ConsoleError::InputClosed` when input ends before Exit.
    /// - `ConsoleError::Io` when reading or writing fails.
    pub fn run(&mut self) -> ConsoleResult<()> {
        info!("event=session_start module=console status=ok");
        loop {
            write_main_menu(self.console.out())?;
            let number = self.console.read_int_in_range(
                "Enter your choice: ",
                MAIN_MENU_RANGE.0,
                MAIN_MENU_RANGE.1,
            )?;
            writeln!(self.console.out())?;

            match MainMenuChoice::from_number(number) {
                Some(MainMenuChoice::Exit) => {
                    writeln!(
                        self.console.out(),
                        "Exiting GPA & Grade Calculator. Goodbye!"
                    )?;
                    writeln!(self.console.out())?;
                    info!(
                        "event=session_exit module=console status=ok courses={}",
                        self.service.courses().len()
                    );
                    return Ok(());
                }
                Some(choice) => {
                    debug!("event=menu_choice module=console menu=main choice={number}");
                    self.dispatch(choice)?;
                }
                None => writeln!(self.console.out(), "Unknown menu choice.")?,
            }

            self.console.pause()?;
            writeln!(self.console.out())?;
        }
    }

    fn dispatch(&mut self, choice: MainMenuChoice) -> ConsoleResult<()> {
        match choice {
            MainMenuChoice::Exit => Ok(()),
            MainMenuChoice::AddCourse => self.add_course(),
            MainMenuChoice::ListCourses => {
                write_course_summary(self.console.out(), self.service.courses())?;
                Ok(())
            }
            MainMenuChoice::AddAssignment => self.add_assignment(),
            MainMenuChoice::ShowCourseDetails => self.show_course_details(),
            MainMenuChoice::ShowOverallGpa => self.show_overall_gpa(),
            MainMenuChoice::WhatIf => self.what_if(),
            MainMenuChoice::Manage => self.manage(),
            MainMenuChoice::GradeDistribution => self.show_distribution(),
        }
    }

    fn manage(&mut self) -> ConsoleResult<()> {
        if !self.require_courses("No courses available yet.")? {
            return Ok(());
        }

        loop {
            write_manage_menu(self.console.out())?;
            let number = self.console.read_int_in_range(
                "Enter your choice: ",
                MANAGE_MENU_RANGE.0,
                MANAGE_MENU_RANGE.1,
            )?;
            writeln!(self.console.out())?;
            debug!("event=menu_choice module=console menu=manage choice={number}");

            match ManageMenuChoice::from_number(number) {
                Some(ManageMenuChoice::Return) => return Ok(()),
                Some(ManageMenuChoice::RenameCourse) => self.rename_course()?,
                Some(ManageMenuChoice::ChangeCreditHours) => self.change_credit_hours()?,
                Some(ManageMenuChoice::EditAssignment) => self.edit_assignment()?,
                Some(ManageMenuChoice::DeleteAssignment) => self.delete_assignment()?,
                Some(ManageMenuChoice::DeleteCourse) => self.delete_course()?,
                None => writeln!(self.console.out(), "Unknown choice.")?,
            }

            self.console.pause()?;
            writeln!(self.console.out())?;
        }
    }

    /// Prints `message` and returns `false` when the store has no courses.
    fn require_courses(&mut self, message: &str) -> ConsoleResult<bool> {
        if self.service.courses().is_empty() {
            writeln!(self.console.out(), "{message}")?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Lists courses, reads an id and resolves it.
    ///
    /// Returns `None` without prompting when the store is empty, and after
    /// the not-found message for unknown ids.
    fn select_course(&mut self, prompt: &str) -> ConsoleResult<Option<CourseId>> {
        if !self.require_courses("No courses available.")? {
            return Ok(None);
        }
        write_course_summary(self.console.out(), self.service.courses())?;
        let typed = self
            .console
            .read_int_in_range(prompt, COURSE_ID_RANGE.0, COURSE_ID_RANGE.1)?;

        let found = CourseId::try_from(typed)
            .ok()
            .filter(|id| self.service.get_course(*id).is_some());
        if found.is_none() {
            writeln!(self.console.out(), "No course found with that ID.")?;
        }
        Ok(found)
    }

    /// Lists a course's assignments and reads a 1-based position.
    ///
    /// Returns the 0-based index, or `None` after printing `empty_message`
    /// when the course has no assignments.
    fn select_assignment(
        &mut self,
        course_id: CourseId,
        prompt: &str,
        empty_message: &str,
    ) -> ConsoleResult<Option<usize>> {
        let Some(course) = self.service.get_course(course_id) else {
            return Ok(None);
        };
        if course.assignments.is_empty() {
            writeln!(self.console.out(), "{empty_message}")?;
            return Ok(None);
        }

        let count = course.assignments.len() as i64;
        write_assignment_list(self.console.out(), course)?;
        let position = self.console.read_int_in_range(prompt, 1, count)?;
        Ok(usize::try_from(position - 1).ok())
    }

    fn read_max_points(&mut self, prompt: &str) -> ConsoleResult<f64> {
        self.console
            .read_decimal_in_range(prompt, MAX_POINTS_RANGE.0, MAX_POINTS_RANGE.1)
    }

    fn add_course(&mut self) -> ConsoleResult<()> {
        let name = self
            .console
            .read_line("Enter course name (for example, COSC 3345): ")?;
        let credits = self.console.read_decimal_in_range(
            "Enter credit hours (e.g., 3 or 4): ",
            MIN_CREDIT_HOURS,
            MAX_CREDIT_HOURS,
        )?;

        match self.service.add_course(&name, credits) {
            Ok(id) => writeln!(self.console.out(), "Course added with id {id}.")?,
            Err(err) => writeln!(self.console.out(), "Course not added: {err}")?,
        }
        Ok(())
    }

    fn add_assignment(&mut self) -> ConsoleResult<()> {
        if !self.require_courses("There are no courses yet. Add a course first.")? {
            return Ok(());
        }
        let Some(course_id) =
            self.select_course("Enter the ID of the course to add an assignment to: ")?
        else {
            return Ok(());
        };

        let name = self
            .console
            .read_line("Enter assignment name (for example, Exam 1): ")?;
        let max = self.read_max_points("Enter maximum points for this assignment: ")?;
        let earned = self
            .console
            .read_decimal_in_range("Enter points earned on this assignment: ", 0.0, max)?;

        match self.service.add_assignment(course_id, &name, earned, max) {
            Ok(()) => {
                let course_name = self
                    .service
                    .get_course(course_id)
                    .map(|course| course.name.clone())
                    .unwrap_or_default();
                writeln!(
                    self.console.out(),
                    "Assignment added to course '{course_name}'."
                )?;
            }
            Err(err) => writeln!(self.console.out(), "Assignment not added: {err}")?,
        }
        Ok(())
    }

    fn show_course_details(&mut self) -> ConsoleResult<()> {
        let Some(course_id) = self.select_course("Enter the ID of the course to view details: ")?
        else {
            return Ok(());
        };
        if let Some(course) = self.service.get_course(course_id) {
            write_course_details(self.console.out(), course)?;
        }
        Ok(())
    }

    fn show_overall_gpa(&mut self) -> ConsoleResult<()> {
        if !self.require_courses("No courses available yet.")? {
            return Ok(());
        }
        if !self.service.has_graded_courses() {
            writeln!(
                self.console.out(),
                "No graded courses yet. Add assignments first."
            )?;
            return Ok(());
        }
        write_overall_gpa(self.console.out(), self.service.overall_gpa())?;
        Ok(())
    }

    fn what_if(&mut self) -> ConsoleResult<()> {
        if !self.require_courses("No courses available yet. Add a course first.")? {
            return Ok(());
        }

        let out = self.console.out();
        writeln!(out, "{RULE}")?;
        writeln!(out, "         WHAT-IF GRADE SCENARIO")?;
        writeln!(out, "{RULE}")?;
        for line in WHAT_IF_INTRO {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;

        let Some(course_id) =
            self.select_course("Enter the ID of the course for the what-if scenario: ")?
        else {
            return Ok(());
        };
        let Some(course) = self.service.get_course(course_id) else {
            return Ok(());
        };

        let out = self.console.out();
        writeln!(out)?;
        writeln!(out, "You selected course: {} (ID {course_id})", course.name)?;
        writeln!(out, "Credit hours: {}", course.credit_hours)?;
        writeln!(out)?;
        match self.service.course_grade(course_id) {
            Some(grade) => writeln!(out, "Current course average: {grade}")?,
            None => {
                writeln!(out, "This course currently has NO assignments.")?;
                writeln!(out, "So its course average is N/A for now.")?;
            }
        }
        let gpa = self.service.overall_gpa();
        writeln!(out, "Current overall GPA: {gpa:.2} (on a 4.0 scale)")?;
        writeln!(out)?;
        writeln!(out, "Enter a name for the hypothetical assignment")?;

        let name = self
            .console
            .read_line("(for example, \"Final Exam\" or \"Big Project\"):\n")?;
        let prompt = "Enter MAXIMUM possible points on this hypothetical assignment: ";
        let max = self.read_max_points(prompt)?;
        let earned = self
            .console
            .read_decimal_in_range("Enter the points you THINK you might earn: ", 0.0, max)?;

        match self.service.what_if(course_id, &name, earned, max) {
            Ok(outcome) => {
                if let Some(course) = self.service.get_course(course_id) {
                    write_what_if_result(self.console.out(), course, &outcome)?;
                }
            }
            Err(err) => writeln!(self.console.out(), "What-if scenario failed: {err}")?,
        }
        Ok(())
    }

    fn show_distribution(&mut self) -> ConsoleResult<()> {
        if !self.require_courses("No courses available.")? {
            return Ok(());
        }
        let Some(distribution) = self.service.grade_distribution() else {
            writeln!(
                self.console.out(),
                "No graded courses yet. Add assignments first."
            )?;
            return Ok(());
        };
        write_distribution(self.console.out(), &distribution)?;
        Ok(())
    }

    fn rename_course(&mut self) -> ConsoleResult<()> {
        let Some(course_id) = self.select_course("Enter the ID of the course you want to rename: ")?
        else {
            return Ok(());
        };
        if let Some(course) = self.service.get_course(course_id) {
            writeln!(self.console.out(), "Current name: {}", course.name)?;
        }
        let new_name = self.console.read_line("Enter new course name: ")?;

        let message = match self.service.rename_course(course_id, &new_name) {
            Ok(RenameOutcome::Renamed) => "Course name updated.".to_string(),
            Ok(RenameOutcome::Unchanged) => "Name not changed (empty name entered).".to_string(),
            Err(err) => format!("Course not renamed: {err}"),
        };
        writeln!(self.console.out(), "{message}")?;
        Ok(())
    }

    fn change_credit_hours(&mut self) -> ConsoleResult<()> {
        let prompt = "Enter the ID of the course whose credit hours you want to change: ";
        let Some(course_id) = self.select_course(prompt)? else {
            return Ok(());
        };
        if let Some(course) = self.service.get_course(course_id) {
            let out = self.console.out();
            write!(out, "Current credit hours for {}: ", course.name)?;
            writeln!(out, "{}", course.credit_hours)?;
        }
        let credits = self.console.read_decimal_in_range(
            "Enter new credit hours (0.5 to 6.0): ",
            MIN_CREDIT_HOURS,
            MAX_CREDIT_HOURS,
        )?;

        match self.service.set_credit_hours(course_id, credits) {
            Ok(()) => writeln!(self.console.out(), "Credit hours updated.")?,
            Err(err) => writeln!(self.console.out(), "Credit hours not updated: {err}")?,
        }
        Ok(())
    }

    fn edit_assignment(&mut self) -> ConsoleResult<()> {
        let Some(course_id) =
            self.select_course("Enter the ID of the course containing the assignment: ")?
        else {
            return Ok(());
        };
        let prompt = "Enter the number of the assignment to edit: ";
        let empty = "This course has no assignments to edit.";
        let Some(index) = self.select_assignment(course_id, prompt, empty)? else {
            return Ok(());
        };

        if let Some(assignment) = self
            .service
            .get_course(course_id)
            .and_then(|course| course.assignments.get(index))
        {
            let out = self.console.out();
            writeln!(out, "Editing assignment: {}", assignment.name)?;
            writeln!(out, "Current name: {}", assignment.name)?;
        }
        let name = self
            .console
            .read_line("Enter a new name, or just press Enter to keep it: ")?;
        let max = self.read_max_points("Enter NEW maximum points: ")?;
        let earned = self
            .console
            .read_decimal_in_range("Enter NEW points earned: ", 0.0, max)?;

        let edit = AssignmentEdit {
            name: Some(name),
            earned,
            max,
        };
        match self.service.edit_assignment(course_id, index, edit) {
            Ok(()) => writeln!(self.console.out(), "Assignment updated.")?,
            Err(err) => writeln!(self.console.out(), "Assignment not updated: {err}")?,
        }
        Ok(())
    }

    fn delete_assignment(&mut self) -> ConsoleResult<()> {
        let prompt = "Enter the ID of the course containing the assignment to delete: ";
        let Some(course_id) = self.select_course(prompt)? else {
            return Ok(());
        };
        let prompt = "Enter the number of the assignment to DELETE: ";
        let empty = "This course has no assignments to delete.";
        let Some(index) = self.select_assignment(course_id, prompt, empty)? else {
            return Ok(());
        };

        let assignment_name = self
            .service
            .get_course(course_id)
            .and_then(|course| course.assignments.get(index))
            .map(|assignment| assignment.name.clone())
            .unwrap_or_default();
        let prompt = format!(
            "Are you sure you want to delete assignment '{assignment_name}'? (1 = Yes, 0 = No): "
        );
        let confirmed = self.console.confirm(&prompt)?;
        if !confirmed {
            writeln!(self.console.out(), "Deletion cancelled.")?;
            return Ok(());
        }

        match self.service.delete_assignment(course_id, index) {
            Ok(_) => writeln!(self.console.out(), "Assignment deleted.")?,
            Err(err) => writeln!(self.console.out(), "Assignment not deleted: {err}")?,
        }
        Ok(())
    }

    fn delete_course(&mut self) -> ConsoleResult<()> {
        let Some(course_id) = self.select_course("Enter the ID of the course to DELETE: ")? else {
            return Ok(());
        };

        let course_name = self
            .service
            .get_course(course_id)
            .map(|course| course.name.clone())
            .unwrap_or_default();
        let prompt = format!(
            "Are you sure you want to delete the entire course '{course_name}' \
             and all its assignments? (1 = Yes, 0 = No): "
        );
        let confirmed = self.console.confirm(&prompt)?;
        if !confirmed {
            writeln!(self.console.out(), "Course deletion cancelled.")?;
            return Ok(());
        }

        match self.service.delete_course(course_id) {
            Ok(_) => writeln!(self.console.out(), "Course deleted.")?,
            Err(err) => writeln!(self.console.out(), "Course not deleted: {err}")?,
        }
        Ok(())
    }
}
