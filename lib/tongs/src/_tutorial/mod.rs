//! # Tutorial: Testing HTTP APIs with tongs
//!
//! Learn to declare an API once and test it fluently, step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first endpoint and assertion
//! 2. [Parameters][chapter_1] - Path, query, headers, bodies and files
//! 3. [Result Pipeline][chapter_2] - Matchers, handlers and transforms
//! 4. [Configuration][chapter_3] - Templates, properties and the registry
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
pub mod chapter_3;
