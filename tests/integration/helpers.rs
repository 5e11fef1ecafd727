//! Shared fixtures for integration tests.

use packsched::packsched_core::config::{AppConfig, LoggingConfig};
use packsched::packsched_core::telemetry::init_tracing;
use packsched::packsched_core::types::{InstructorId, StudentId};
use packsched::packsched_entity::course::{CourseKey, NewCourse};
use packsched::packsched_entity::user::{NewFaculty, NewStudent};
use packsched::{RegistrationManager, RequestContext};

/// A registration manager preloaded with a small catalog and student body.
pub struct TestApp {
    pub manager: RegistrationManager,
}

impl TestApp {
    /// Catalog of three non-conflicting sections and `students` students
    /// named `student0`, `student1`, ...
    pub fn new(students: usize) -> Self {
        Self::with_config(AppConfig::default(), students)
    }

    pub fn with_config(config: AppConfig, students: usize) -> Self {
        init_tracing(&LoggingConfig {
            level: "warn".to_string(),
            ..LoggingConfig::default()
        });
        let mut manager = RegistrationManager::new(config);
        for course in catalog() {
            manager.add_course(course).expect("Failed to add catalog course");
        }
        for i in 0..students {
            manager
                .add_student(student(&format!("student{i}")))
                .expect("Failed to add student");
        }
        Self { manager }
    }

    pub fn ctx(&self, index: usize) -> RequestContext {
        RequestContext::student(format!("student{index}"))
    }

    pub fn enroll(&mut self, index: usize, key: &CourseKey) -> bool {
        let ctx = self.ctx(index);
        self.manager
            .enroll_student_in_course(&ctx, key)
            .expect("Enrollment errored")
    }

    pub fn drop_course(&mut self, index: usize, key: &CourseKey) -> bool {
        let ctx = self.ctx(index);
        self.manager
            .drop_student_from_course(&ctx, key)
            .expect("Drop errored")
    }
}

pub fn student_id(index: usize) -> StudentId {
    StudentId::new(format!("student{index}")).expect("valid id")
}

pub fn csc216() -> CourseKey {
    CourseKey::new("CSC216", "001")
}

pub fn csc226() -> CourseKey {
    CourseKey::new("CSC226", "001")
}

pub fn csc299() -> CourseKey {
    CourseKey::new("CSC299", "001")
}

pub fn course(name: &str, days: &str, start: u16, end: u16, credits: u8) -> NewCourse {
    NewCourse {
        name: name.to_string(),
        title: format!("{name} title"),
        section: "001".to_string(),
        credits,
        instructor_id: None,
        enrollment_cap: 10,
        meeting_days: days.to_string(),
        start_time: start,
        end_time: end,
    }
}

pub fn faculty(id: &str, max_courses: usize) -> NewFaculty {
    NewFaculty {
        id: id.to_string(),
        first_name: "Test".to_string(),
        last_name: "Faculty".to_string(),
        email: format!("{id}@ncsu.edu"),
        max_courses,
    }
}

pub fn instructor_id(id: &str) -> InstructorId {
    InstructorId::new(id).expect("valid id")
}

pub fn student(id: &str) -> NewStudent {
    NewStudent {
        id: id.to_string(),
        first_name: "Test".to_string(),
        last_name: "Student".to_string(),
        email: format!("{id}@ncsu.edu"),
        max_credits: None,
    }
}

fn catalog() -> Vec<NewCourse> {
    vec![
        course("CSC216", "MW", 1330, 1445, 4),
        course("CSC226", "TH", 935, 1025, 3),
        course("CSC299", "A", 0, 0, 1),
    ]
}
