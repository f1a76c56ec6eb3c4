//! This module contains various weld end to end tests

#[cfg(test)]
mod utils;

#[cfg(test)]
mod resolution;


#[cfg(test)]
mod emission;

#[cfg(test)]
mod manifest;
