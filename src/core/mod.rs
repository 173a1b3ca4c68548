pub mod kana;
pub mod mora_table;
pub mod transliterator;
pub mod unicode;
