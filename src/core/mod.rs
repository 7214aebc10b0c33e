//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Report model (WordCount, Report) and the frequency ordering
//! - Error types for the statistics core
//! - Rendering functions for different output formats
//! - Path normalization utilities
//! - Input reading strategies
//! - Splitting text into raw words

pub mod error;
pub mod model;
pub mod paths;
pub mod reader;
pub mod render;
pub mod tokenizer;
