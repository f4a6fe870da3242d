//! 두벌식 니모닉 <-> 한글 변환 코어

pub mod converter;
pub mod decomposer;
pub mod parser;
pub mod session;
pub mod tables;
pub mod unicode;
