#![warn(clippy::all)]
#![doc = include_str!("../README.md")]

// Modules that make up the Moves View library.
mod args;
mod data_source;
mod dataset;
mod error;
mod file_dialog;
mod filter;
mod filter_bar;
mod layout;
mod move_category;
mod move_record;
mod move_type;
mod sort;
mod summary;
mod table;
mod traits;
mod view;

// Publicly expose the contents of these modules.
pub use self::{
    args::Arguments,
    data_source::*,
    dataset::*,
    error::*,
    file_dialog::*,
    filter::*,
    filter_bar::*,
    layout::*,
    move_category::*,
    move_record::*,
    move_type::*,
    sort::*,
    summary::*,
    table::*,
    traits::*,
    view::*,
};
