//! Catalog and configuration validation through the public facade.

use packsched::packsched_core::config::AppConfig;
use packsched::packsched_entity::course::{CourseNameValidator, MeetingDays};
use packsched::{ErrorKind, RegistrationManager};

use crate::helpers::course;

#[test]
fn test_catalog_rejects_invalid_sections() {
    let mut manager = RegistrationManager::new(AppConfig::default());

    let err = manager.add_course(course("CSC21", "MW", 1330, 1445, 4)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidTransition);

    let err = manager.add_course(course("CSC216", "MX", 1330, 1445, 4)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let mut small = course("CSC216", "MW", 1330, 1445, 4);
    small.enrollment_cap = 5;
    let err = manager.add_course(small).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidRange);

    assert!(manager.catalog().is_empty());
}

#[test]
fn test_catalog_listing_in_key_order() {
    let mut manager = RegistrationManager::new(AppConfig::default());
    manager.add_course(course("MA241", "MWF", 800, 850, 4)).unwrap();
    manager.add_course(course("CSC216", "MW", 1330, 1445, 4)).unwrap();

    let names: Vec<String> = manager.catalog().into_iter().map(|row| row.name).collect();
    assert_eq!(names, vec!["CSC216", "MA241"]);
}

#[test]
fn test_course_name_validator_is_restartable() {
    let validator = CourseNameValidator::new();
    assert!(!validator.is_valid("CSC2165"));
    assert!(validator.is_valid("CSC216"));
    assert!(validator.is_valid("HESF101A"));
}

#[test]
fn test_arranged_days_never_conflict() {
    let arranged: MeetingDays = "A".parse().unwrap();
    let weekdays: MeetingDays = "MTWHF".parse().unwrap();
    assert!(!arranged.shares_day_with(weekdays));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = AppConfig::default();
    config.roster.min_enrollment = 300;
    assert_eq!(config.validate().unwrap_err().kind, ErrorKind::Configuration);
}
