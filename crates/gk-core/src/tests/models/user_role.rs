use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Ultra.as_str(), "ultra");
    assert_eq!(UserRole::Super.as_str(), "super");
    assert_eq!(UserRole::Admin.as_str(), "admin");
    assert_eq!(UserRole::Student.as_str(), "student");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
    assert_eq!(UserRole::from_str("student").unwrap(), UserRole::Student);
    assert!(UserRole::from_str("invalid").is_err());
}

#[test]
fn test_user_role_default_is_lowest_tier() {
    assert_eq!(UserRole::default(), UserRole::Student);
}
