//! Password evaluation sections
//!
//! Each section scores one criterion and yields exactly one feedback line.

mod blacklist;
mod length;
mod variety;

pub use blacklist::commonality_section;
pub use length::length_section;
pub use variety::{
    lowercase_section, numbers_section, special_section, uppercase_section, SPECIAL_CHARS,
};

