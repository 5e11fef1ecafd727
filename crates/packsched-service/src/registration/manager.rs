//! Catalog, student directory, and the enroll/drop workflow.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use packsched_core::config::AppConfig;
use packsched_core::error::{AppError, ErrorKind};
use packsched_core::result::AppResult;
use packsched_core::types::{InstructorId, StudentId};
use packsched_entity::course::{Course, CourseKey, CourseRow, NewCourse};
use packsched_entity::user::{Faculty, NewFaculty, NewStudent, Student};

use super::promotion::SeatPromotion;
use crate::context::RequestContext;
use crate::roll::CourseRoll;
use crate::schedule::{FacultySchedule, Schedule};

/// A catalog section and its roll.
#[derive(Debug, Clone)]
struct Section {
    course: Course,
    roll: CourseRoll<StudentId>,
}

/// A registered student and their schedule.
#[derive(Debug, Clone)]
pub(super) struct Enrollee {
    pub student: Student,
    pub schedule: Schedule,
}

/// A faculty member and the sections they teach.
#[derive(Debug, Clone)]
struct Instructor {
    faculty: Faculty,
    schedule: FacultySchedule,
}

/// Owns every section roll, student schedule and faculty schedule, and keeps
/// them in step.
///
/// A student holding a seat or a waitlist spot in a section always has that
/// section on their schedule, and a section on a faculty member's schedule
/// names that faculty member as its instructor in the catalog.
#[derive(Debug, Clone)]
pub struct RegistrationManager {
    config: AppConfig,
    sections: BTreeMap<CourseKey, Section>,
    students: BTreeMap<StudentId, Enrollee>,
    faculty: BTreeMap<InstructorId, Instructor>,
}

impl RegistrationManager {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            sections: BTreeMap::new(),
            students: BTreeMap::new(),
            faculty: BTreeMap::new(),
        }
    }

    /// Configuration the manager was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Add a section to the catalog with an empty roll.
    pub fn add_course(&mut self, input: NewCourse) -> AppResult<CourseKey> {
        let course = Course::new(input)?;
        let key = course.key().clone();
        if self.sections.contains_key(&key) {
            return Err(AppError::duplicate_value(format!(
                "Course {key} is already in the catalog"
            )));
        }
        let roll = CourseRoll::new(course.enrollment_cap(), &self.config.roster)?;
        info!(course = %key, capacity = roll.enrollment_cap(), "Course added to catalog");
        self.sections.insert(key.clone(), Section { course, roll });
        Ok(key)
    }

    /// Register a student with an empty schedule.
    pub fn add_student(&mut self, input: NewStudent) -> AppResult<StudentId> {
        let student = Student::new(input, &self.config.schedule)?;
        let id = student.id().clone();
        if self.students.contains_key(&id) {
            return Err(AppError::duplicate_value(format!(
                "Student {id} is already registered"
            )));
        }
        let schedule = Schedule::new(&self.config.schedule);
        info!(student = %id, "Student registered");
        self.students.insert(id.clone(), Enrollee { student, schedule });
        Ok(id)
    }

    /// Register a faculty member with an empty teaching schedule.
    pub fn add_faculty(&mut self, input: NewFaculty) -> AppResult<InstructorId> {
        let faculty = Faculty::new(input)?;
        let id = faculty.id().clone();
        if self.faculty.contains_key(&id) {
            return Err(AppError::duplicate_value(format!(
                "Faculty {id} is already registered"
            )));
        }
        let schedule = FacultySchedule::new(id.clone(), &self.config.schedule);
        info!(faculty = %id, max_courses = faculty.max_courses(), "Faculty registered");
        self.faculty.insert(id.clone(), Instructor { faculty, schedule });
        Ok(id)
    }

    /// Catalog entry for `key`.
    pub fn course(&self, key: &CourseKey) -> Option<&Course> {
        self.sections.get(key).map(|section| &section.course)
    }

    /// Seats and waitlist for `key`.
    pub fn roll(&self, key: &CourseKey) -> Option<&CourseRoll<StudentId>> {
        self.sections.get(key).map(|section| &section.roll)
    }

    pub fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.get(id).map(|enrollee| &enrollee.student)
    }

    pub fn schedule(&self, id: &StudentId) -> Option<&Schedule> {
        self.students.get(id).map(|enrollee| &enrollee.schedule)
    }

    pub fn faculty(&self, id: &InstructorId) -> Option<&Faculty> {
        self.faculty.get(id).map(|instructor| &instructor.faculty)
    }

    /// Sections assigned to faculty member `id`.
    pub fn faculty_schedule(&self, id: &InstructorId) -> Option<&FacultySchedule> {
        self.faculty.get(id).map(|instructor| &instructor.schedule)
    }

    /// Whether faculty member `id` teaches more sections than their load.
    pub fn is_faculty_overloaded(&self, id: &InstructorId) -> AppResult<bool> {
        let instructor = self.faculty.get(id).ok_or_else(|| faculty_not_found(id))?;
        Ok(instructor.faculty.is_overloaded(instructor.schedule.len()))
    }

    /// Open seats in a section; unknown sections report zero.
    pub fn open_seats(&self, key: &CourseKey) -> usize {
        self.sections
            .get(key)
            .map_or(0, |section| section.roll.open_seats())
    }

    /// Every catalog section in key order with its open seats.
    pub fn catalog(&self) -> Vec<CourseRow> {
        self.sections
            .values()
            .map(|section| section.course.short_display(section.roll.open_seats()))
            .collect()
    }

    /// Enroll the acting student in `key`, seated or waitlisted.
    ///
    /// Returns `Ok(false)` when the section would duplicate or conflict with
    /// the schedule, exceed the student's credit ceiling, or the roll has no
    /// room for them. Both the roll and the schedule are left unchanged in
    /// that case.
    pub fn enroll_student_in_course(
        &mut self,
        ctx: &RequestContext,
        key: &CourseKey,
    ) -> AppResult<bool> {
        let student_id = acting_student(ctx)?;
        let section = self
            .sections
            .get_mut(key)
            .ok_or_else(|| course_not_found(key))?;
        let enrollee = self
            .students
            .get_mut(&student_id)
            .ok_or_else(|| student_not_found(&student_id))?;

        let max_credits = enrollee.student.max_credits();
        if !enrollee
            .schedule
            .can_add_within_credits(&section.course, max_credits)
            || !section.roll.can_enroll(&student_id)
        {
            info!(student = %student_id, course = %key, "Enrollment refused");
            return Ok(false);
        }

        enrollee.schedule.add_course(section.course.clone())?;
        match section.roll.enroll(student_id.clone()) {
            Ok(status) => {
                info!(student = %student_id, course = %key, status = ?status, "Student enrolled");
                Ok(true)
            }
            Err(err) if err.is(ErrorKind::RosterFull) || err.is(ErrorKind::DuplicateValue) => {
                enrollee.schedule.remove_course(key);
                info!(student = %student_id, course = %key, reason = %err, "Enrollment refused");
                Ok(false)
            }
            Err(err) => {
                enrollee.schedule.remove_course(key);
                Err(err)
            }
        }
    }

    /// Drop the acting student from `key`.
    ///
    /// A freed seat goes to the longest-waiting student, whose schedule is
    /// updated to match. Returns whether the section was on the acting
    /// student's schedule.
    pub fn drop_student_from_course(
        &mut self,
        ctx: &RequestContext,
        key: &CourseKey,
    ) -> AppResult<bool> {
        let student_id = acting_student(ctx)?;
        if !self.students.contains_key(&student_id) {
            return Err(student_not_found(&student_id));
        }
        let section = self
            .sections
            .get_mut(key)
            .ok_or_else(|| course_not_found(key))?;

        let mut hook = SeatPromotion {
            course: &section.course,
            students: &mut self.students,
        };
        let outcome = section.roll.drop(&student_id, &mut hook)?;

        let removed = self
            .students
            .get_mut(&student_id)
            .is_some_and(|enrollee| enrollee.schedule.remove_course(key));
        info!(
            student = %student_id,
            course = %key,
            removed = ?outcome.removed,
            promoted = outcome.promoted.as_ref().map(StudentId::as_str),
            "Student dropped"
        );
        Ok(removed)
    }

    /// Drop the acting student from every section and clear their schedule.
    pub fn reset_schedule(&mut self, ctx: &RequestContext) -> AppResult<()> {
        let student_id = acting_student(ctx)?;
        let keys: Vec<CourseKey> = self
            .students
            .get(&student_id)
            .ok_or_else(|| student_not_found(&student_id))?
            .schedule
            .courses()
            .map(|course| course.key().clone())
            .collect();

        for key in &keys {
            let Some(section) = self.sections.get_mut(key) else {
                warn!(
                    student = %student_id,
                    course = %key,
                    "Scheduled section missing from catalog"
                );
                continue;
            };
            let mut hook = SeatPromotion {
                course: &section.course,
                students: &mut self.students,
            };
            section.roll.drop(&student_id, &mut hook)?;
        }

        if let Some(enrollee) = self.students.get_mut(&student_id) {
            enrollee.schedule.reset();
        }
        info!(student = %student_id, dropped = keys.len(), "Schedule reset");
        Ok(())
    }

    /// Display rows for the acting student's schedule.
    pub fn schedule_rows(&self, ctx: &RequestContext) -> AppResult<Vec<CourseRow>> {
        let student_id = acting_student(ctx)?;
        let enrollee = self
            .students
            .get(&student_id)
            .ok_or_else(|| student_not_found(&student_id))?;
        Ok(enrollee
            .schedule
            .list_courses(|key| self.open_seats(key))
            .collect())
    }

    /// The acting student's schedule rows as pretty-printed JSON.
    pub fn export_schedule(&self, ctx: &RequestContext) -> AppResult<String> {
        let rows = self.schedule_rows(ctx)?;
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    /// Rename the acting student's schedule.
    pub fn set_schedule_title(&mut self, ctx: &RequestContext, title: &str) -> AppResult<()> {
        let student_id = acting_student(ctx)?;
        self.students
            .get_mut(&student_id)
            .ok_or_else(|| student_not_found(&student_id))?
            .schedule
            .set_title(title)
    }

    /// Change a section's enrollment capacity. Registrar only.
    pub fn set_enrollment_cap(
        &mut self,
        ctx: &RequestContext,
        key: &CourseKey,
        capacity: usize,
    ) -> AppResult<()> {
        require_registrar(ctx)?;
        self.sections
            .get_mut(key)
            .ok_or_else(|| course_not_found(key))?
            .roll
            .set_enrollment_cap(capacity)
    }

    /// Assign faculty member `faculty_id` to teach `key`. Registrar only.
    ///
    /// Fails with `DuplicateValue` when another instructor already teaches
    /// the section, and with `DuplicateCourse` or `TimeConflict` when it
    /// does not fit the faculty member's schedule. Assignments beyond the
    /// teaching load are allowed and show up as overload.
    pub fn add_faculty_to_course(
        &mut self,
        ctx: &RequestContext,
        key: &CourseKey,
        faculty_id: &InstructorId,
    ) -> AppResult<bool> {
        require_registrar(ctx)?;
        let section = self
            .sections
            .get_mut(key)
            .ok_or_else(|| course_not_found(key))?;
        let instructor = self
            .faculty
            .get_mut(faculty_id)
            .ok_or_else(|| faculty_not_found(faculty_id))?;

        if let Some(current) = section.course.instructor_id() {
            if current != faculty_id {
                return Err(AppError::duplicate_value(format!(
                    "Course {key} is already taught by {current}"
                )));
            }
        }
        instructor.schedule.add_course(&mut section.course)?;
        info!(
            faculty = %faculty_id,
            course = %key,
            assigned = instructor.schedule.len(),
            overloaded = instructor.faculty.is_overloaded(instructor.schedule.len()),
            "Faculty assigned to course"
        );
        Ok(true)
    }

    /// Take `key` off faculty member `faculty_id`'s schedule and clear the
    /// section's instructor. Registrar only.
    ///
    /// Returns whether the section was on the faculty member's schedule.
    pub fn remove_faculty_from_course(
        &mut self,
        ctx: &RequestContext,
        key: &CourseKey,
        faculty_id: &InstructorId,
    ) -> AppResult<bool> {
        require_registrar(ctx)?;
        let instructor = self
            .faculty
            .get_mut(faculty_id)
            .ok_or_else(|| faculty_not_found(faculty_id))?;
        let removed = instructor.schedule.remove_course(key);
        if removed {
            unassign(&mut self.sections, key, faculty_id);
        }
        info!(faculty = %faculty_id, course = %key, removed, "Faculty removed from course");
        Ok(removed)
    }

    /// Clear every assignment of faculty member `faculty_id`. Registrar only.
    pub fn reset_faculty_schedule(
        &mut self,
        ctx: &RequestContext,
        faculty_id: &InstructorId,
    ) -> AppResult<()> {
        require_registrar(ctx)?;
        let instructor = self
            .faculty
            .get_mut(faculty_id)
            .ok_or_else(|| faculty_not_found(faculty_id))?;
        let keys: Vec<CourseKey> = instructor
            .schedule
            .courses()
            .map(|course| course.key().clone())
            .collect();
        instructor.schedule.reset();
        for key in &keys {
            unassign(&mut self.sections, key, faculty_id);
        }
        info!(faculty = %faculty_id, cleared = keys.len(), "Faculty schedule reset");
        Ok(())
    }
}

/// The acting student's id, or `Authorization` when the actor is not a
/// student.
fn acting_student(ctx: &RequestContext) -> AppResult<StudentId> {
    if !ctx.is_student() {
        warn!(
            user = %ctx.user_id,
            role = %ctx.role,
            request_time = %ctx.request_time,
            "Registration action refused"
        );
        return Err(AppError::authorization("Illegal Action"));
    }
    debug!(user = %ctx.user_id, request_time = %ctx.request_time, "Student action");
    StudentId::new(ctx.user_id.as_str())
}

/// `Authorization` unless the actor is the registrar.
fn require_registrar(ctx: &RequestContext) -> AppResult<()> {
    if !ctx.is_registrar() {
        warn!(
            user = %ctx.user_id,
            role = %ctx.role,
            request_time = %ctx.request_time,
            "Registrar action refused"
        );
        return Err(AppError::authorization("Illegal Action"));
    }
    debug!(user = %ctx.user_id, request_time = %ctx.request_time, "Registrar action");
    Ok(())
}

/// Clear the instructor of `key` if it is still `faculty_id`.
fn unassign(
    sections: &mut BTreeMap<CourseKey, Section>,
    key: &CourseKey,
    faculty_id: &InstructorId,
) {
    let Some(section) = sections.get_mut(key) else {
        warn!(faculty = %faculty_id, course = %key, "Assigned section missing from catalog");
        return;
    };
    if section.course.instructor_id() == Some(faculty_id) {
        section.course.set_instructor_id(None);
    }
}

fn course_not_found(key: &CourseKey) -> AppError {
    AppError::not_found(format!("Course {key} not found"))
}

fn student_not_found(id: &StudentId) -> AppError {
    AppError::not_found(format!("Student {id} not found"))
}

fn faculty_not_found(id: &InstructorId) -> AppError {
    AppError::not_found(format!("Faculty {id} not found"))
}
