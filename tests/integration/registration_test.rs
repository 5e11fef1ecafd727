//! Enrollment, drop, promotion and reset through the registration manager.

use packsched::ErrorKind;
use packsched::RequestContext;
use packsched::packsched_entity::user::UserRole;
use packsched::packsched_service::EnrollmentStatus;

use crate::helpers::{self, TestApp, csc216, csc226, csc299, student_id};

#[test]
fn test_full_schedule_lifecycle() {
    let mut app = TestApp::new(1);
    assert!(app.enroll(0, &csc216()));
    assert!(app.enroll(0, &csc226()));
    assert!(app.enroll(0, &csc299()));

    let schedule = app.manager.schedule(&student_id(0)).unwrap();
    assert_eq!(schedule.total_credits(), 8);

    let rows = app.manager.schedule_rows(&app.ctx(0)).unwrap();
    let meetings: Vec<&str> = rows.iter().map(|row| row.meeting.as_str()).collect();
    assert_eq!(meetings, vec!["MW 1:30PM-2:45PM", "TH 9:35AM-10:25AM", "Arranged"]);
    assert!(rows.iter().all(|row| row.open_seats == 9));

    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json[0]["name"], "CSC216");
    assert_eq!(json[2]["open_seats"], 9);

    assert!(app.drop_course(0, &csc226()));
    assert_eq!(app.manager.open_seats(&csc226()), 10);
    assert_eq!(app.manager.schedule(&student_id(0)).unwrap().len(), 2);
}

#[test]
fn test_waitlist_promotion_updates_both_sides() {
    let mut app = TestApp::new(13);
    for i in 0..13 {
        assert!(app.enroll(i, &csc216()), "student{i} should be enrolled or waitlisted");
    }

    let roll = app.manager.roll(&csc216()).unwrap();
    assert_eq!(roll.open_seats(), 0);
    assert_eq!(roll.waitlist_count(), 3);
    assert_eq!(roll.status_of(&student_id(11)), EnrollmentStatus::Waitlisted);

    assert!(app.drop_course(0, &csc216()));
    assert!(app.drop_course(1, &csc216()));

    let roll = app.manager.roll(&csc216()).unwrap();
    assert_eq!(roll.status_of(&student_id(10)), EnrollmentStatus::Enrolled);
    assert_eq!(roll.status_of(&student_id(11)), EnrollmentStatus::Enrolled);
    assert_eq!(roll.status_of(&student_id(12)), EnrollmentStatus::Waitlisted);
    assert_eq!(roll.status_of(&student_id(0)), EnrollmentStatus::NotPresent);

    for promoted in [10, 11] {
        let schedule = app.manager.schedule(&student_id(promoted)).unwrap();
        assert!(schedule.contains(&csc216()));
    }
}

#[test]
fn test_waitlisted_student_can_leave_waitlist() {
    let mut app = TestApp::new(12);
    for i in 0..12 {
        app.enroll(i, &csc216());
    }
    assert!(app.drop_course(10, &csc216()));

    let roll = app.manager.roll(&csc216()).unwrap();
    let waiting: Vec<_> = roll.waitlist().cloned().collect();
    assert_eq!(waiting, vec![student_id(11)]);
    assert_eq!(roll.enrolled_count(), 10);
    assert!(!app.manager.schedule(&student_id(10)).unwrap().contains(&csc216()));
}

#[test]
fn test_reset_schedule_promotes_waiters() {
    let mut app = TestApp::new(11);
    for i in 0..11 {
        app.enroll(i, &csc216());
    }
    app.enroll(0, &csc226());

    let ctx = app.ctx(0);
    app.manager.reset_schedule(&ctx).unwrap();

    assert!(app.manager.schedule(&student_id(0)).unwrap().is_empty());
    assert_eq!(app.manager.open_seats(&csc226()), 10);
    let roll = app.manager.roll(&csc216()).unwrap();
    assert!(roll.is_enrolled(&student_id(10)));
    assert_eq!(roll.waitlist_count(), 0);
}

#[test]
fn test_conflicting_section_is_refused() {
    let mut app = TestApp::new(1);
    app.manager
        .add_course(helpers::course("CSC316", "W", 1400, 1515, 3))
        .unwrap();
    assert!(app.enroll(0, &csc216()));

    let clash = packsched::packsched_entity::course::CourseKey::new("CSC316", "001");
    assert!(!app.enroll(0, &clash));
    assert_eq!(app.manager.open_seats(&clash), 10);
}

#[test]
fn test_roles_other_than_student_are_refused() {
    let mut app = TestApp::new(1);
    for role in [UserRole::Faculty, UserRole::Registrar] {
        let ctx = RequestContext::new("student0", role);
        let err = app
            .manager
            .enroll_student_in_course(&ctx, &csc216())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        let err = app
            .manager
            .drop_student_from_course(&ctx, &csc216())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
    assert_eq!(app.manager.open_seats(&csc216()), 10);
}

#[test]
fn test_full_roll_and_waitlist_refuse_enrollment() {
    let mut app = TestApp::new(21);
    for i in 0..20 {
        assert!(app.enroll(i, &csc216()));
    }
    assert!(!app.enroll(20, &csc216()));
    assert!(!app.manager.schedule(&student_id(20)).unwrap().contains(&csc216()));
}
