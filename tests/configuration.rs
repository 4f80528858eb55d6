mod common;

use common::test_settings;

#[test]
fn complete_settings_validate() {
    assert!(test_settings(8000).validate().is_ok());
}

#[test]
fn empty_fields_fail_validation_naming_the_field() {
    let mut settings = test_settings(8000);
    settings.database.password = "".to_string();

    let err = settings.validate().unwrap_err().to_string();
    assert!(err.contains("database.password"), "got: {}", err);
}

#[test]
fn placeholder_values_fail_validation() {
    let mut settings = test_settings(8000);
    settings.database.host = "your-project.example.com".to_string();
    let err = settings.validate().unwrap_err().to_string();
    assert!(err.contains("database.host"), "got: {}", err);

    let mut settings = test_settings(8000);
    settings.database.password = "CHANGEME".to_string();
    assert!(settings.validate().is_err());
}
