mod chunk_helpers;
mod parse_good;
