use log::debug;

use crate::units::{convert_length, LengthUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// NaN/무한대 등 유한하지 않은 값
    InvalidMagnitude(f64),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => {
                write!(f, "알 수 없는 단위: {u} (m, km, ft, yd, mi 중 하나)")
            }
            ConversionError::InvalidMagnitude(v) => write!(f, "유한한 숫자가 아닙니다: {v}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한다. 대소문자와 앞뒤 공백은 무시한다.
///
/// 짧은 표기(`m`, `km`, `ft`, `yd`, `mi`) 외에 `meter`, `feet`, `miles` 같은
/// 단수/복수형 이름도 받는다.
pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meter),
        "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
            Ok(LengthUnit::Kilometer)
        }
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        "yd" | "yard" | "yards" => Ok(LengthUnit::Yard),
        "mi" | "mile" | "miles" => Ok(LengthUnit::Mile),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

impl std::str::FromStr for LengthUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_length_unit(s)
    }
}

/// 입력값이 유한한지 확인한다.
pub fn validate_magnitude(value: f64) -> Result<f64, ConversionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::InvalidMagnitude(value))
    }
}

/// 값 검증 후 길이를 변환한다. 결과가 f64 범위를 넘으면 입력값 오류로 돌려준다.
pub fn convert_checked(
    value: f64,
    from: LengthUnit,
    to: LengthUnit,
) -> Result<f64, ConversionError> {
    let value = validate_magnitude(value)?;
    let result = convert_length(value, from, to);
    if !result.is_finite() {
        return Err(ConversionError::InvalidMagnitude(value));
    }
    debug!("convert {value} {from} -> {result} {to}");
    Ok(result)
}

/// 문자열 단위명을 받아 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `m`, `KM`, `ft`, `yards`, `mile` 등을 사용할 수 있다.
pub fn convert(
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let from = parse_length_unit(from_unit_str)?;
    let to = parse_length_unit(to_unit_str)?;
    convert_checked(value, from, to)
}
