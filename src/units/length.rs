use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Foot,
    Yard,
    Mile,
}

/// 미터를 0.1 mm 정수로 나타낸 값. 모든 단위가 정수 배로 떨어지므로
/// 두 단위 사이의 배율은 정수 나눗셈 한 번으로 정확히 반올림된다.
const BASE_PER_METER: u64 = 10_000;

impl LengthUnit {
    /// 화면 표시 순서 (m, km, ft, yd, mi).
    pub const ALL: [LengthUnit; 5] = [
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    /// 1 단위가 몇 개의 0.1 mm 인지.
    const fn base_count(self) -> u64 {
        match self {
            LengthUnit::Meter => BASE_PER_METER,
            LengthUnit::Kilometer => 1000 * BASE_PER_METER,
            LengthUnit::Foot => 3_048,
            LengthUnit::Yard => 9_144,
            LengthUnit::Mile => 16_093_440,
        }
    }

    /// 1 단위에 해당하는 미터 값.
    pub fn meters_per_unit(self) -> f64 {
        self.base_count() as f64 / BASE_PER_METER as f64
    }

    /// 짧은 표기 (m, km, ft, yd, mi).
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
        }
    }

    /// 결과 표시에 쓰는 복수형 이름.
    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Meter => "meters",
            LengthUnit::Kilometer => "kilometers",
            LengthUnit::Foot => "feet",
            LengthUnit::Yard => "yards",
            LengthUnit::Mile => "miles",
        }
    }

    /// 선택 메뉴용 대문자 라벨.
    pub fn picker_label(self) -> &'static str {
        match self {
            LengthUnit::Meter => "M",
            LengthUnit::Kilometer => "KM",
            LengthUnit::Foot => "FT",
            LengthUnit::Yard => "YD",
            LengthUnit::Mile => "MI",
        }
    }

    /// `ALL` 안에서의 위치.
    pub fn index(self) -> usize {
        match self {
            LengthUnit::Meter => 0,
            LengthUnit::Kilometer => 1,
            LengthUnit::Foot => 2,
            LengthUnit::Yard => 3,
            LengthUnit::Mile => 4,
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `from` 단위 값을 `to` 단위로 바꾸는 배율. 같은 단위면 1.0.
pub fn length_factor(from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return 1.0;
    }
    from.base_count() as f64 / to.base_count() as f64
}

/// 5×5 배율표. 행은 입력 단위, 열은 출력 단위이며 순서는 `LengthUnit::ALL`.
pub fn length_factor_matrix() -> [[f64; 5]; 5] {
    let mut table = [[1.0; 5]; 5];
    for from in LengthUnit::ALL {
        for to in LengthUnit::ALL {
            table[from.index()][to.index()] = length_factor(from, to);
        }
    }
    table
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * length_factor(from, to)
}
