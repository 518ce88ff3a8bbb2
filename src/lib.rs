#![doc = include_str!("../README.md")]

mod business;
mod combiner;
pub mod kana;
mod parser;
mod reading;
mod resources;
mod segmentation;
mod solution;
pub mod solvers;
mod special;
mod tables;

pub use self::{
    business::FuriganaBusinessLogic,
    combiner::{combine_reading_choices, combine_readings, Combination},
    parser::{SolutionParseError, ASSOCIATION_SEPARATOR, MULTI_VALUE_SEPARATOR, RANGE_SEPARATOR},
    reading::potential_kanji_readings,
    resources::{
        FuriganaResourceSet, FuriganaResourceSetBuilder, Kanji, ResourceError, SpecialExpression,
        SpecialReading,
    },
    solution::{FuriganaPart, FuriganaSolution, FuriganaSolutionSet, Outcome, VocabEntry},
    solvers::FuriganaSolver,
    special::potential_special_readings,
};
