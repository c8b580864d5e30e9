mod company;
mod keywords;

pub use company::{extract_company, UNKNOWN_COMPANY};
pub use keywords::{categorize, Category, KEYWORDS};
