//! Menu choices and their display text.

use std::io::{self, Write};

const RULE: &str = "==========================================";

/// Primary menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Exit,
    AddCourse,
    ListCourses,
    AddAssignment,
    ShowCourseDetails,
    ShowOverallGpa,
    WhatIf,
    Manage,
    GradeDistribution,
}

impl MainMenuChoice {
    /// Menu entries in display order, paired with their typed number.
    const ENTRIES: [(i64, MainMenuChoice); 9] = [
        (1, Self::AddCourse),
        (2, Self::ListCourses),
        (3, Self::AddAssignment),
        (4, Self::ShowCourseDetails),
        (5, Self::ShowOverallGpa),
        (6, Self::WhatIf),
        (7, Self::Manage),
        (8, Self::GradeDistribution),
        (0, Self::Exit),
    ];

    pub fn from_number(value: i64) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(number, _)| *number == value)
            .map(|(_, choice)| *choice)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddCourse => "Add a new course",
            Self::ListCourses => "List all courses (summary)",
            Self::AddAssignment => "Add an assignment to a course",
            Self::ShowCourseDetails => "Show details for one course",
            Self::ShowOverallGpa => "Show overall GPA",
            Self::WhatIf => "What-if grade scenario",
            Self::Manage => "Manage courses & assignments (edit/delete)",
            Self::GradeDistribution => "Grade distribution report",
            Self::Exit => "Exit",
        }
    }
}

/// Manage sub-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageMenuChoice {
    Return,
    RenameCourse,
    ChangeCreditHours,
    EditAssignment,
    DeleteAssignment,
    DeleteCourse,
}

impl ManageMenuChoice {
    const ENTRIES: [(i64, ManageMenuChoice); 6] = [
        (1, Self::RenameCourse),
        (2, Self::ChangeCreditHours),
        (3, Self::EditAssignment),
        (4, Self::DeleteAssignment),
        (5, Self::DeleteCourse),
        (0, Self::Return),
    ];

    pub fn from_number(value: i64) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(number, _)| *number == value)
            .map(|(_, choice)| *choice)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RenameCourse => "Rename a course",
            Self::ChangeCreditHours => "Change course credit hours",
            Self::EditAssignment => "Edit an assignment's scores",
            Self::DeleteAssignment => "Delete an assignment from a course",
            Self::DeleteCourse => "Delete a course",
            Self::Return => "Return to main menu",
        }
    }
}

pub fn write_main_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "         GPA & Grade Calculator")?;
    writeln!(out, "{RULE}")?;
    for (number, choice) in MainMenuChoice::ENTRIES {
        writeln!(out, "{number}. {}", choice.label())?;
    }
    Ok(())
}

pub fn write_manage_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "   Manage Courses & Assignments")?;
    writeln!(out, "{RULE}")?;
    for (number, choice) in ManageMenuChoice::ENTRIES {
        writeln!(out, "{number}. {}", choice.label())?;
    }
    Ok(())
}
