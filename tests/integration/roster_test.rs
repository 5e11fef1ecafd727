//! Roll behavior driven directly, including configuration-driven bounds.

use packsched::packsched_core::config::{AppConfig, RosterConfig};
use packsched::packsched_entity::user::UserRole;
use packsched::packsched_service::{CourseRoll, Removal};
use packsched::{ErrorKind, RequestContext};

use crate::helpers::{TestApp, csc216};

#[test]
fn test_roll_drop_promotes_in_fifo_order() {
    let mut roll: CourseRoll<u32> = CourseRoll::new(10, &RosterConfig::default()).unwrap();
    for id in 0..14 {
        roll.enroll(id).unwrap();
    }

    let mut promoted = Vec::new();
    for seated in 0..4 {
        let outcome = roll
            .drop(&seated, &mut |next: &u32| promoted.push(*next))
            .unwrap();
        assert_eq!(outcome.removed, Removal::Enrolled);
    }
    assert_eq!(promoted, vec![10, 11, 12, 13]);
    assert_eq!(roll.waitlist_count(), 0);
    assert_eq!(roll.enrolled_count(), 10);
}

#[test]
fn test_configured_waitlist_capacity() {
    let config = AppConfig {
        roster: RosterConfig {
            waitlist_capacity: 2,
            ..RosterConfig::default()
        },
        ..AppConfig::default()
    };
    let mut app = TestApp::with_config(config, 13);
    for i in 0..12 {
        assert!(app.enroll(i, &csc216()));
    }
    assert!(!app.enroll(12, &csc216()));
    assert_eq!(app.manager.roll(&csc216()).unwrap().waitlist_count(), 2);
}

#[test]
fn test_registrar_capacity_changes() {
    let mut app = TestApp::new(12);
    for i in 0..12 {
        app.enroll(i, &csc216());
    }
    let registrar = RequestContext::new("registrar", UserRole::Registrar);

    let err = app
        .manager
        .set_enrollment_cap(&registrar, &csc216(), 5)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidRange);

    app.manager
        .set_enrollment_cap(&registrar, &csc216(), 12)
        .unwrap();
    let roll = app.manager.roll(&csc216()).unwrap();
    assert_eq!(roll.open_seats(), 2);
    assert_eq!(roll.waitlist_count(), 2);
}
