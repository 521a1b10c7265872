use crate::units::{convert_length, LengthUnit};

/// 값과 단위를 묶은 한 번의 측정값. 변환 요청마다 만들어지고 저장되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Measurement {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// 같은 길이를 다른 단위로 표현한다.
    pub fn to(self, unit: LengthUnit) -> Measurement {
        Measurement {
            value: convert_length(self.value, self.unit, unit),
            unit,
        }
    }

    /// `precision` 자리수로 "<값> <단위명>" 문자열을 만든다.
    pub fn display_with(&self, precision: Option<usize>) -> String {
        format!("{} {}", format_value(self.value, precision), self.unit.name())
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_with(None))
    }
}

/// 소수점 자리수 상한. f64 유효숫자는 17자리를 넘지 않는다.
pub const MAX_PRECISION: usize = 17;

/// 숫자를 출력용 문자열로 만든다. `None`이면 왕복 가능한 최단 표기를 쓴다.
/// 자리수는 `MAX_PRECISION`으로 잘린다.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => {
            let p = p.min(MAX_PRECISION);
            format!("{value:.p$}")
        }
        None => format!("{value}"),
    }
}
