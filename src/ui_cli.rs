use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::{format_value, Measurement, MAX_PRECISION};
use crate::units::LengthUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Settings,
    Exit,
}

/// 변환 폼의 현재 상태. 한 세션 동안 마지막 입력이 다음 기본값이 된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormState {
    pub value: f64,
    pub from: LengthUnit,
    pub to: LengthUnit,
}

impl FormState {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            value: cfg.default_value,
            from: cfg.default_from,
            to: cfg.default_to,
        }
    }
}

/// 프롬프트 입출력 묶음. 표준 입출력 또는 테스트용 버퍼를 감싼다.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 한 줄을 출력한다.
    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 None.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// 숫자를 읽는다. 빈 입력은 `current`를 유지한다.
    fn read_f64_or(
        &mut self,
        tr: &Translator,
        prompt: &str,
        current: f64,
    ) -> Result<Option<f64>, AppError> {
        loop {
            let Some(s) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if s.is_empty() {
                return Ok(Some(current));
            }
            match s.parse::<f64>() {
                Ok(v) if v.is_finite() => return Ok(Some(v)),
                _ => self.say(tr.t(keys::ERROR_INVALID_NUMBER))?,
            }
        }
    }

    /// 단위 선택기를 표시하고 번호(1~5) 또는 단위 표기를 읽는다.
    fn read_unit_or(
        &mut self,
        tr: &Translator,
        heading: &str,
        current: LengthUnit,
    ) -> Result<Option<LengthUnit>, AppError> {
        let picker = LengthUnit::ALL
            .iter()
            .enumerate()
            .map(|(i, u)| {
                if *u == current {
                    format!("{}) [{}]", i + 1, u.picker_label())
                } else {
                    format!("{}) {}", i + 1, u.picker_label())
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        self.say(&format!("{heading}: {picker}"))?;
        let prompt = format!("{}: ", tr.t(keys::CONVERT_PROMPT_UNIT));
        loop {
            let Some(s) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            if s.is_empty() {
                return Ok(Some(current));
            }
            if let Some(unit) = pick_unit(&s) {
                return Ok(Some(unit));
            }
            self.say(tr.t(keys::INVALID_SELECTION_RETRY))?;
        }
    }
}

/// 번호(1~5) 또는 단위 표기를 단위로 바꾼다.
fn pick_unit(s: &str) -> Option<LengthUnit> {
    if let Ok(n) = s.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| LengthUnit::ALL.get(i).copied());
    }
    conversion::parse_length_unit(s).ok()
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 본다.
pub fn main_menu<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    tr: &Translator,
) -> Result<MenuChoice, AppError> {
    term.say(tr.t(keys::MAIN_MENU_TITLE))?;
    term.say(tr.t(keys::MAIN_MENU_CONVERT))?;
    term.say(tr.t(keys::MAIN_MENU_SETTINGS))?;
    term.say(tr.t(keys::MAIN_MENU_EXIT))?;
    loop {
        let Some(sel) = term.read_line(tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.as_str() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => term.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 변환 폼을 처리한다. 값 → 입력 단위 → 변환 단위 순으로 묻고 결과를 보여준다.
pub fn handle_conversion<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    tr: &Translator,
    form: &mut FormState,
    precision: Option<usize>,
) -> Result<(), AppError> {
    term.say(tr.t(keys::CONVERT_HEADING))?;
    let prompt = format!(
        "{} [{}] {}: ",
        tr.t(keys::CONVERT_PROMPT_VALUE),
        format_value(form.value, None),
        tr.t(keys::CONVERT_KEEP_HINT)
    );
    let Some(value) = term.read_f64_or(tr, &prompt, form.value)? else {
        return Ok(());
    };
    let Some(from) = term.read_unit_or(tr, tr.t(keys::CONVERT_FROM_UNIT), form.from)? else {
        return Ok(());
    };
    let Some(to) = term.read_unit_or(tr, tr.t(keys::CONVERT_TO_UNIT), form.to)? else {
        return Ok(());
    };
    let result = match conversion::convert_checked(value, from, to) {
        Ok(v) => v,
        Err(e) => {
            term.say(&format!("{}: {e}", tr.t(keys::ERROR_PREFIX)))?;
            return Ok(());
        }
    };
    *form = FormState { value, from, to };
    let line = format!(
        "{} {}",
        tr.t(keys::CONVERT_RESULT),
        Measurement::new(result, to).display_with(precision)
    );
    term.say(&line)?;
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌었으면 true를 반환한다.
pub fn handle_settings<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    tr: &Translator,
    cfg: &mut Config,
) -> Result<bool, AppError> {
    term.say(tr.t(keys::SETTINGS_HEADING))?;
    term.say(&format!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    ))?;
    let precision = match cfg.precision {
        Some(p) => p.to_string(),
        None => tr.t(keys::SETTINGS_PRECISION_SHORTEST).to_string(),
    };
    term.say(&format!(
        "{} {precision}",
        tr.t(keys::SETTINGS_CURRENT_PRECISION)
    ))?;

    let mut language_changed = false;
    let Some(lang) = term.read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))? else {
        return Ok(false);
    };
    match lang.to_lowercase().as_str() {
        "" => {}
        code @ ("auto" | "ko" | "en") => {
            language_changed = code != cfg.language;
            cfg.language = code.to_string();
        }
        _ => term.say(tr.t(keys::SETTINGS_INVALID))?,
    }

    let Some(p) = term.read_line(tr.t(keys::SETTINGS_PROMPT_PRECISION))? else {
        return Ok(language_changed);
    };
    match p.as_str() {
        "" => {}
        "-" => cfg.precision = None,
        other => match other.parse::<usize>() {
            Ok(n) if n <= MAX_PRECISION => cfg.precision = Some(n),
            _ => term.say(tr.t(keys::SETTINGS_INVALID))?,
        },
    }
    Ok(language_changed)
}
