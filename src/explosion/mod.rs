//! 밀폐 용기 폭발 시험 데이터로부터 층류 연소속도(LBV)를 구하는 계산 모듈 모음.

pub mod lbv_methods;
pub mod lbv_report;
pub mod scenario;

pub use lbv_methods::*;
pub use lbv_report::*;
pub use scenario::*;
