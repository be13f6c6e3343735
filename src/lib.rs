#![allow(dead_code)]

use crate::grid::error::GridError;
use crate::plan::error::PlanError;

pub mod config;
pub mod engine;
pub mod grid;
pub mod motion;
pub mod oracle;
pub mod plan;
pub mod reach;
pub mod util;

#[derive(Debug)]
pub enum Error {
    Grid(GridError),
    Plan(PlanError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Grid(e) => write!(f, "{e}"),
            Error::Plan(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
