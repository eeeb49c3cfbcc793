pub mod logger;
pub mod stdin;
