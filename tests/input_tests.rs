// Integration tests for array input: validation, files and share strings

use selection_studio::input::{
    self, load_file, random_array, share, validate, Bounds, DataSource, InputError,
    ValidationError,
};
use selection_studio::trace::generate;
use std::io::Write;
use std::path::Path;

#[test]
fn test_validate_default_bounds() {
    let values = validate("25, 41, 48, 3, 99, 1, 60, 7, 7, 12").unwrap();
    assert_eq!(values.len(), input::ARRAY_SIZE);
    assert_eq!(values[4], 99);
}

#[test]
fn test_validation_errors_display() {
    let err = validate("1 2 3").unwrap_err();
    assert_eq!(err.to_string(), "expected 10 numbers, got 3");

    let err = validate("1 2 3 4 5 6 7 8 9 abc").unwrap_err();
    assert_eq!(
        err.to_string(),
        "'abc' (number 10) is not an integer between 1 and 99"
    );
}

#[test]
fn test_too_many_values() {
    assert_eq!(
        validate("1 2 3 4 5 6 7 8 9 10 11"),
        Err(ValidationError::InvalidLength {
            expected: 10,
            got: 11
        })
    );
}

#[test]
fn test_load_file_csv() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "10,20,30,40,50").unwrap();
    writeln!(file, "60,70,80,90,99").unwrap();

    let values = load_file(file.path(), &Bounds::default()).unwrap();
    assert_eq!(values, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 99]);
}

#[test]
fn test_load_file_rejects_bad_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "1 2 3").unwrap();

    let err = load_file(file.path(), &Bounds::default()).unwrap_err();
    assert!(matches!(
        err,
        InputError::Validation(ValidationError::InvalidLength { got: 3, .. })
    ));
}

#[test]
fn test_load_file_missing() {
    let err = load_file(Path::new("/nonexistent/data.txt"), &Bounds::default()).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/data.txt"));
}

#[test]
fn test_share_round_trip_reproduces_trace() {
    let values = vec![25, 41, 48, 3, 99, 1, 60, 7, 7, 12];
    let query = share::share_query(&values);
    assert_eq!(query, "?data=25,41,48,3,99,1,60,7,7,12");

    let parsed = share::parse_query(&query, &Bounds::default()).unwrap();
    assert_eq!(parsed, values);
    assert_eq!(generate(&parsed), generate(&values));
}

#[test]
fn test_random_array_validates() {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..20 {
        let values = random_array(&mut rng, &Bounds::default());
        assert_eq!(validate(&share::encode(&values)), Ok(values));
    }
}

#[test]
fn test_data_source_prefers_data_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "10 20 30 40 50 60 70 80 90 99").unwrap();

    let source = DataSource {
        data: Some("1,2,3,4,5,6,7,8,9,10".to_string()),
        file: Some(file.path().to_path_buf()),
        seed: Some(3),
    };
    assert_eq!(
        source.resolve(&Bounds::default()).unwrap(),
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
    );

    let source = DataSource {
        data: None,
        ..source
    };
    assert_eq!(
        source.resolve(&Bounds::default()).unwrap(),
        vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 99]
    );
}

#[test]
fn test_data_source_accepts_share_queries() {
    let values = vec![25, 41, 48, 3, 99, 1, 60, 7, 7, 12];
    for text in [
        "?data=25,41,48,3,99,1,60,7,7,12".to_string(),
        "https://example.com/sort?lang=ja&data=25%2C41%2C48%2C3%2C99%2C1%2C60%2C7%2C7%2C12".to_string(),
    ] {
        let source = DataSource {
            data: Some(text),
            ..DataSource::default()
        };
        assert_eq!(source.resolve(&Bounds::default()).unwrap(), values);
    }

    let source = DataSource {
        data: Some("?data=1,2,3".to_string()),
        ..DataSource::default()
    };
    assert!(matches!(
        source.resolve(&Bounds::default()),
        Err(InputError::Validation(ValidationError::InvalidLength { got: 3, .. }))
    ));
}

#[test]
fn test_data_source_rejects_bad_list() {
    let source = DataSource {
        data: Some("1,2,x".to_string()),
        ..DataSource::default()
    };
    assert!(matches!(
        source.resolve(&Bounds::default()),
        Err(InputError::Validation(ValidationError::InvalidValue { .. }))
    ));
}

#[test]
fn test_data_source_seeded_random_is_fixed() {
    let source = DataSource {
        seed: Some(42),
        ..DataSource::default()
    };
    let first = source.resolve(&Bounds::default()).unwrap();
    let second = source.resolve(&Bounds::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(validate(&share::encode(&first)), Ok(first));
}
