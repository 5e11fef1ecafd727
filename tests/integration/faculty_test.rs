//! Faculty assignment through the registration manager.

use packsched::ErrorKind;
use packsched::RequestContext;
use packsched::packsched_entity::user::UserRole;

use crate::helpers::{TestApp, csc216, csc226, csc299, faculty, instructor_id};

fn registrar() -> RequestContext {
    RequestContext::new("registrar", UserRole::Registrar)
}

#[test]
fn test_faculty_teaching_lifecycle() {
    let mut app = TestApp::new(1);
    let awitt = app.manager.add_faculty(faculty("awitt", 2)).unwrap();
    let registrar = registrar();

    for key in [csc216(), csc226()] {
        assert!(app.manager.add_faculty_to_course(&registrar, &key, &awitt).unwrap());
    }
    assert!(!app.manager.is_faculty_overloaded(&awitt).unwrap());
    assert!(app.manager.add_faculty_to_course(&registrar, &csc299(), &awitt).unwrap());
    assert!(app.manager.is_faculty_overloaded(&awitt).unwrap());

    let taught: Vec<String> = app
        .manager
        .faculty_schedule(&awitt)
        .unwrap()
        .courses()
        .map(|course| course.name().to_string())
        .collect();
    assert_eq!(taught, vec!["CSC216", "CSC226", "CSC299"]);

    // Students still see and enroll in the assigned section.
    assert!(app.enroll(0, &csc216()));
    assert_eq!(app.manager.course(&csc216()).unwrap().instructor_id(), Some(&awitt));

    assert!(app.manager.remove_faculty_from_course(&registrar, &csc299(), &awitt).unwrap());
    assert!(!app.manager.is_faculty_overloaded(&awitt).unwrap());

    app.manager.reset_faculty_schedule(&registrar, &awitt).unwrap();
    assert!(app.manager.faculty_schedule(&awitt).unwrap().is_empty());
    for key in [csc216(), csc226(), csc299()] {
        assert!(app.manager.course(&key).unwrap().instructor_id().is_none());
    }
    assert_eq!(app.manager.open_seats(&csc216()), 9);
}

#[test]
fn test_only_registrar_assigns_faculty() {
    let mut app = TestApp::new(1);
    let awitt = app.manager.add_faculty(faculty("awitt", 1)).unwrap();

    for ctx in [app.ctx(0), RequestContext::new("awitt", UserRole::Faculty)] {
        let err = app
            .manager
            .add_faculty_to_course(&ctx, &csc216(), &awitt)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert_eq!(err.message, "Illegal Action");
        let err = app.manager.reset_faculty_schedule(&ctx, &awitt).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
    assert!(app.manager.faculty_schedule(&awitt).unwrap().is_empty());
}

#[test]
fn test_invalid_faculty_is_rejected() {
    let mut app = TestApp::new(0);
    let err = app.manager.add_faculty(faculty("heavy", 4)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidRange);
    assert_eq!(err.message, "Invalid max courses");
    assert!(app.manager.faculty(&instructor_id("heavy")).is_none());

    app.manager.add_faculty(faculty("awitt", 3)).unwrap();
    let err = app.manager.add_faculty(faculty("awitt", 1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateValue);
}
