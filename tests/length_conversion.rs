//! 길이 변환 엔진의 성질(항등, 왕복, 추이성)과 기준 시나리오 회귀 테스트.
use approx::assert_relative_eq;
use length_unit_converter::quantity::Measurement;
use length_unit_converter::units::{
    convert_length, length_factor, length_factor_matrix, LengthUnit,
};

const MAGNITUDES: [f64; 7] = [1e-9, 0.5, 1.0, 3.7, 42.0, 12_345.678, 1e12];

#[test]
fn identity_returns_input_unchanged() {
    for unit in LengthUnit::ALL {
        for m in MAGNITUDES.iter().chain([0.0, -7.25, f64::MIN_POSITIVE].iter()) {
            assert_eq!(convert_length(*m, unit, unit), *m, "{unit}");
        }
    }
}

#[test]
fn round_trip_within_relative_tolerance() {
    for a in LengthUnit::ALL {
        for b in LengthUnit::ALL {
            for m in MAGNITUDES {
                let back = convert_length(convert_length(m, a, b), b, a);
                assert_relative_eq!(back, m, max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn conversion_through_any_intermediate_unit_agrees() {
    for a in LengthUnit::ALL {
        for b in LengthUnit::ALL {
            for c in LengthUnit::ALL {
                let direct = convert_length(42.0, a, c);
                let via = convert_length(convert_length(42.0, a, b), b, c);
                assert_relative_eq!(direct, via, max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn reference_scenarios() {
    assert_relative_eq!(
        convert_length(1.0, LengthUnit::Foot, LengthUnit::Meter),
        0.3048,
        max_relative = 1e-12
    );
    assert_eq!(convert_length(1.0, LengthUnit::Mile, LengthUnit::Foot), 5280.0);
    assert_eq!(convert_length(1.0, LengthUnit::Yard, LengthUnit::Foot), 3.0);
    assert_eq!(convert_length(0.0, LengthUnit::Mile, LengthUnit::Kilometer), 0.0);
    assert_relative_eq!(
        convert_length(100.0, LengthUnit::Meter, LengthUnit::Mile),
        0.0621371,
        max_relative = 1e-6
    );
}

#[test]
fn zero_stays_zero_for_every_pair() {
    for a in LengthUnit::ALL {
        for b in LengthUnit::ALL {
            assert_eq!(convert_length(0.0, a, b), 0.0);
        }
    }
}

#[test]
fn negative_values_scale_linearly() {
    for a in LengthUnit::ALL {
        for b in LengthUnit::ALL {
            let pos = convert_length(2.5, a, b);
            let neg = convert_length(-2.5, a, b);
            assert_eq!(neg, -pos);
        }
    }
}

#[test]
fn factor_matrix_matches_published_factors() {
    use LengthUnit::*;
    let expected = [
        (Meter, Kilometer, 0.001),
        (Meter, Foot, 3.280839895),
        (Meter, Yard, 1.0936132983),
        (Meter, Mile, 0.0006213712),
        (Kilometer, Meter, 1000.0),
        (Kilometer, Foot, 3280.839895),
        (Kilometer, Yard, 1093.6132983),
        (Kilometer, Mile, 0.6213711922),
        (Foot, Meter, 0.3048),
        (Foot, Kilometer, 0.0003048),
        (Foot, Yard, 0.3333333333),
        (Foot, Mile, 0.0001893939),
        (Yard, Meter, 0.9144),
        (Yard, Kilometer, 0.0009144),
        (Yard, Foot, 3.0),
        (Yard, Mile, 0.0005681818),
        (Mile, Meter, 1609.344),
        (Mile, Kilometer, 1.609344),
        (Mile, Foot, 5280.0),
        (Mile, Yard, 1760.0),
    ];
    let matrix = length_factor_matrix();
    for (from, to, factor) in expected {
        // 공개 값은 유효숫자 10자리 근처에서 잘려 있다
        assert_relative_eq!(matrix[from.index()][to.index()], factor, max_relative = 1e-6);
        assert_eq!(matrix[from.index()][to.index()], length_factor(from, to));
    }
    for unit in LengthUnit::ALL {
        assert_eq!(matrix[unit.index()][unit.index()], 1.0);
    }
}

#[test]
fn factors_are_reciprocal() {
    for a in LengthUnit::ALL {
        for b in LengthUnit::ALL {
            assert_relative_eq!(
                length_factor(a, b) * length_factor(b, a),
                1.0,
                max_relative = 1e-15
            );
        }
    }
}

#[test]
fn measurement_converts_and_displays() {
    let m = Measurement::new(3.0, LengthUnit::Yard);
    let feet = m.to(LengthUnit::Foot);
    assert_eq!(feet, Measurement::new(9.0, LengthUnit::Foot));
    assert_eq!(feet.to_string(), "9 feet");
    assert_eq!(
        Measurement::new(1.0, LengthUnit::Kilometer)
            .to(LengthUnit::Meter)
            .to_string(),
        "1000 meters"
    );
}
