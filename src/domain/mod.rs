pub mod audio;
pub mod enrichment;
pub mod kanji;
