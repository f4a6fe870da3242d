pub mod config;
pub mod core;

pub use crate::core::converter::{to_hangul, to_hangul_with, to_jamo_sequence, to_mnemonic};
pub use crate::core::decomposer::OutputMode;
pub use crate::core::session::{InputMode, InputSession};
pub use crate::core::tables::{tables, MnemonicTables, PhonemeClass, TableError};
