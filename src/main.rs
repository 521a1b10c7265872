use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use length_unit_converter::app::{self, AppError};
use length_unit_converter::config::{self, Config};
use length_unit_converter::i18n::{self, keys, Translator};
use length_unit_converter::quantity::MAX_PRECISION;
use length_unit_converter::ui_cli::Terminal;

#[derive(Parser, Debug)]
#[command(
    name = "length_unit_converter",
    version,
    about = "m, km, ft, yd, mi 사이의 길이 단위 변환기"
)]
struct Cli {
    /// 언어 (auto/ko/en)
    #[arg(short = 'L', long = "lang")]
    lang: Option<String>,

    /// 설정 파일 경로
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 하위 명령이 없으면 대화형 변환 폼을 실행한다
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 값 하나를 변환해 출력한다
    Convert {
        /// 변환할 값
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// 입력 단위 (m, km, ft, yd, mi)
        from: String,
        /// 변환 단위 (m, km, ft, yd, mi)
        to: String,
        /// 단위명 없이 숫자만 출력
        #[arg(long)]
        bare: bool,
        /// 소수점 자리수 0~17 (설정값보다 우선)
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u64).range(0..=MAX_PRECISION as u64)
        )]
        precision: Option<u64>,
    },
    /// 지원 단위 목록
    Units,
    /// 5×5 배율표
    Table,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령 또는 대화형 폼을 실행한다.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let loaded = config::load_or_fallback(&cli.config);
    let mut cfg = loaded.config;
    let save_path = loaded.writable.then_some(cli.config.as_path());
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, None);

    if let Err(err) = try_run(cli.command, &mut cfg, &tr, save_path) {
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(
    command: Option<Command>,
    cfg: &mut Config,
    tr: &Translator,
    save_path: Option<&Path>,
) -> Result<(), AppError> {
    match command {
        Some(Command::Convert {
            value,
            from,
            to,
            bare,
            precision,
        }) => {
            let precision = precision.map(|p| p as usize).or(cfg.precision);
            let line = app::convert_line(value, &from, &to, precision, bare)?;
            println!("{line}");
        }
        Some(Command::Units) => print!("{}", app::units_listing(tr)),
        Some(Command::Table) => print!("{}", app::factor_table(tr, cfg.precision)),
        None => {
            let mut term = Terminal::stdio();
            app::run(&mut term, cfg, tr.clone(), save_path)?;
        }
    }
    Ok(())
}
