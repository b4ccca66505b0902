// Models module for data structures
pub mod explanation;
pub mod tafsir;
pub mod verse;
