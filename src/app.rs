use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::i18n::{self, keys, Translator};
use crate::quantity::{format_value, Measurement};
use crate::ui_cli::{self, FormState, MenuChoice, Terminal};
use crate::units::{length_factor_matrix, LengthUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 단위 변환 오류
    Conversion(ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Conversion(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 단발성 변환 결과를 출력용 한 줄로 만든다. `bare`이면 숫자만 남긴다.
pub fn convert_line(
    value: f64,
    from: &str,
    to: &str,
    precision: Option<usize>,
    bare: bool,
) -> Result<String, AppError> {
    let from = conversion::parse_length_unit(from)?;
    let to = conversion::parse_length_unit(to)?;
    let result = conversion::convert_checked(value, from, to)?;
    if bare {
        Ok(format_value(result, precision))
    } else {
        Ok(Measurement::new(result, to).display_with(precision))
    }
}

/// 지원 단위 목록을 만든다.
pub fn units_listing(tr: &Translator) -> String {
    let mut out = String::new();
    out.push_str(tr.t(keys::UNITS_HEADING));
    out.push('\n');
    for unit in LengthUnit::ALL {
        out.push_str(&format!(
            "{:<5} {:<11} {}\n",
            unit.symbol(),
            unit.name(),
            unit.meters_per_unit()
        ));
    }
    out
}

/// 5×5 배율표를 만든다.
pub fn factor_table(tr: &Translator, precision: Option<usize>) -> String {
    let matrix = length_factor_matrix();
    let mut out = String::new();
    out.push_str(tr.t(keys::TABLE_HEADING));
    out.push('\n');
    out.push_str(&format!("{:<4}", ""));
    for unit in LengthUnit::ALL {
        out.push_str(&format!("{:>24}", unit.symbol()));
    }
    out.push('\n');
    for from in LengthUnit::ALL {
        out.push_str(&format!("{:<4}", from.symbol()));
        for to in LengthUnit::ALL {
            let f = matrix[from.index()][to.index()];
            out.push_str(&format!("{:>24}", format_value(f, precision)));
        }
        out.push('\n');
    }
    out
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// `save_path`가 None이면 설정을 파일에 쓰지 않는다.
pub fn run<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    config: &mut Config,
    mut tr: Translator,
    save_path: Option<&Path>,
) -> Result<(), AppError> {
    let mut form = FormState::from_config(config);
    loop {
        match ui_cli::main_menu(term, &tr)? {
            MenuChoice::Convert => {
                ui_cli::handle_conversion(term, &tr, &mut form, config.precision)?
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(term, &tr, config)? {
                    let lang = i18n::resolve_language(None, Some(&config.language));
                    tr = Translator::new_with_pack(&lang, None);
                }
                match save_path {
                    Some(path) => {
                        config.save_to(path)?;
                        term.say(tr.t(keys::SETTINGS_SAVED))?;
                    }
                    None => term.say(tr.t(keys::SETTINGS_NOT_SAVED))?,
                }
            }
            MenuChoice::Exit => {
                if let Some(path) = save_path {
                    config.save_to(path)?;
                }
                term.say(tr.t(keys::APP_EXIT))?;
                break;
            }
        }
    }
    Ok(())
}
