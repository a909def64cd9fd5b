mod arg_parse;
mod config;
mod data_types;
mod error;
mod fetcher;
mod render;

pub mod prelude {
    pub use super::super::common::prelude::*;
    pub use super::arg_parse::*;
    pub use super::config::*;
    pub use super::data_types::*;
    pub use super::error::*;
    pub use super::fetcher::*;
    pub use super::render::*;
}
