//! 콘솔 리포터 포트 구현 어댑터.

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
/// 상태 라인은 stdout으로, 안내 출력은 stderr로 내보낸다.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn notice(&self, text: &str) {
        eprintln!("{text}");
    }
}
