//! 문자열 경계(단위 코드 파싱, 값 검증) 테스트.
use approx::assert_relative_eq;
use length_unit_converter::conversion::{
    convert, convert_checked, parse_length_unit, validate_magnitude, ConversionError,
};
use length_unit_converter::units::LengthUnit;

#[test]
fn short_labels_parse_in_any_case() {
    for unit in LengthUnit::ALL {
        assert_eq!(parse_length_unit(unit.symbol()), Ok(unit));
        assert_eq!(parse_length_unit(unit.picker_label()), Ok(unit));
        assert_eq!(parse_length_unit(&format!("  {}\n", unit.symbol())), Ok(unit));
    }
    assert_eq!(parse_length_unit("Km"), Ok(LengthUnit::Kilometer));
}

#[test]
fn spelled_out_names_parse() {
    assert_eq!(parse_length_unit("feet"), Ok(LengthUnit::Foot));
    assert_eq!(parse_length_unit("Foot"), Ok(LengthUnit::Foot));
    assert_eq!(parse_length_unit("metres"), Ok(LengthUnit::Meter));
    assert_eq!(parse_length_unit("MILES"), Ok(LengthUnit::Mile));
    for unit in LengthUnit::ALL {
        assert_eq!(parse_length_unit(unit.name()), Ok(unit));
    }
}

#[test]
fn from_str_delegates_to_parser() {
    let unit: LengthUnit = "yd".parse().expect("yard");
    assert_eq!(unit, LengthUnit::Yard);
    assert!("inch".parse::<LengthUnit>().is_err());
}

#[test]
fn unknown_unit_keeps_original_text() {
    assert_eq!(
        parse_length_unit("furlong"),
        Err(ConversionError::UnknownUnit("furlong".to_string()))
    );
    assert_eq!(
        convert(1.0, "m", "in"),
        Err(ConversionError::UnknownUnit("in".to_string()))
    );
    assert_eq!(
        convert(1.0, "", "m"),
        Err(ConversionError::UnknownUnit(String::new()))
    );
}

#[test]
fn non_finite_magnitudes_are_rejected() {
    assert!(matches!(
        validate_magnitude(f64::NAN),
        Err(ConversionError::InvalidMagnitude(v)) if v.is_nan()
    ));
    assert_eq!(
        convert(f64::INFINITY, "m", "ft"),
        Err(ConversionError::InvalidMagnitude(f64::INFINITY))
    );
    assert_eq!(
        convert_checked(f64::NEG_INFINITY, LengthUnit::Mile, LengthUnit::Mile),
        Err(ConversionError::InvalidMagnitude(f64::NEG_INFINITY))
    );
    assert_eq!(validate_magnitude(-3.5), Ok(-3.5));
}

#[test]
fn unit_is_checked_before_magnitude() {
    assert_eq!(
        convert(f64::NAN, "parsec", "m"),
        Err(ConversionError::UnknownUnit("parsec".to_string()))
    );
}

#[test]
fn overflowing_result_is_reported_as_invalid_magnitude() {
    assert_eq!(
        convert_checked(1e308, LengthUnit::Mile, LengthUnit::Foot),
        Err(ConversionError::InvalidMagnitude(1e308))
    );
}

#[test]
fn string_boundary_converts() {
    assert_relative_eq!(convert(1.0, "FT", "m").expect("ft->m"), 0.3048);
    assert_eq!(convert(1.0, "mi", "ft"), Ok(5280.0));
    assert_eq!(convert(-2.0, "yd", "ft"), Ok(-6.0));
}

#[test]
fn error_messages_name_the_problem() {
    let msg = ConversionError::UnknownUnit("ly".into()).to_string();
    assert!(msg.contains("ly"));
    assert!(msg.contains("km"));
    let msg = ConversionError::InvalidMagnitude(f64::INFINITY).to_string();
    assert!(msg.contains("inf"));
}
