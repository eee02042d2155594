use achiever::{Achieve, AchieverConfig, IntervalAchiever, RadiusAchiever, SubgoalError};
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn pinball_table_from_config() -> Result<()> {
    let achiever = AchieverConfig::load("tests/data/pinball.json")?;
    let vector = achiever.as_vector().expect("pinball is a vector achiever");
    assert_eq!(vector.n_obs(), 4);
    assert_eq!(vector.subgoal_count(), 3);

    // Velocity columns are blank, so only the position matters.
    assert!(vector.achieved(&[0.21, 0.88, 5.0, -5.0], 0)?);
    assert!(!vector.achieved(&[0.21, 0.88, 5.0, -5.0], 1)?);
    assert!(vector.achieved(&[0.5, 0.53, 0.0, 0.0], 1)?);
    assert!(vector.achieved(&[0.9, 0.2, 1.0, 1.0], 2)?);
    assert!(!vector.achieved(&[0.9, 0.2, 1.0, 1.0], 3)?);
    Ok(())
}

#[test]
fn rows_taken_from_the_table_are_achieved() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "a,b,c,d")?;
    writeln!(file, "0.1,-2.5,3,0.75")?;
    writeln!(file, "1e-3,0,-0,42")?;
    writeln!(file, "7,,8,")?;
    file.flush()?;

    let rows = [
        [0.1, -2.5, 3.0, 0.75],
        [1e-3, 0.0, -0.0, 42.0],
        [7.0, 123.0, 8.0, -9.0],
    ];
    let interval = IntervalAchiever::from_table(0.0, 4, file.path())?;
    let radius = RadiusAchiever::from_table(0.0, 4, file.path())?;
    for (i, row) in rows.iter().enumerate() {
        assert!(interval.achieved(row, i)?, "interval row {i}");
        assert!(radius.achieved(row, i)?, "radius row {i}");
    }
    Ok(())
}

#[test]
fn missing_table_is_a_configuration_error() {
    let err = IntervalAchiever::from_table(0.1, 2, "tests/data/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, SubgoalError::Table { .. }));
    assert!(err.is_configuration());
}

#[test]
fn table_width_must_match_n_obs() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "a,b,c")?;
    writeln!(file, "1,2,3")?;
    file.flush()?;

    let err = IntervalAchiever::from_table(0.1, 4, file.path()).unwrap_err();
    assert!(matches!(err, SubgoalError::Configuration(_)));
    Ok(())
}

#[test]
fn bad_parameters_fail_before_reading() {
    let err = IntervalAchiever::from_table(-0.5, 4, "tests/data/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, SubgoalError::Configuration(_)));
}

#[test]
fn values_beyond_f32_are_refused() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "a,b")?;
    writeln!(file, "0.5,1e39")?;
    file.flush()?;

    let err = RadiusAchiever::from_table(0.0, 2, file.path()).unwrap_err();
    assert!(matches!(err, SubgoalError::Cell { row: 0, column: 1, .. }), "{err}");
    assert!(err.is_configuration());
    Ok(())
}
