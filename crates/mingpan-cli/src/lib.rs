//! Mingpan — terminal host.
//!
//! Drives the wizard from the command line: the birth-data form is filled
//! from flags, questions are answered on stdin or from a YAML file, and the
//! result region is written out as markup.

pub mod answers;
pub mod args;
pub mod error;
pub mod run;
pub mod terminal;
