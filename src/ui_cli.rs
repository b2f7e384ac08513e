use std::io::{self, Write};

use crate::app::AppError;
use crate::explosion::LbvReport;
use crate::i18n::Translator;

/// 결과 보고서를 지정한 출력으로 쓴다. 제목 한 줄 + 방법별 한 줄.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &LbvReport,
    tr: &Translator,
) -> io::Result<()> {
    for line in report.lines(tr) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// 결과 보고서를 표준출력에 인쇄한다.
pub fn print_report(report: &LbvReport, tr: &Translator) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, report, tr)?;
    lock.flush()?;
    Ok(())
}
