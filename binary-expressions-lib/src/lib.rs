#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

pub mod notation;
