//! rat is a boilerplate manager for project scaffolding.
//! It copies a named template directory out of a template root into a new
//! project directory, optionally letting an external interactive filter pick
//! the template.

/// Command-line interface module for the rat application
pub mod cli;

/// Template root and selector settings
pub mod config;

/// Error types and handling for the rat application
pub mod error;

/// Listing of the boilerplates under the template root
pub mod catalog;

/// Picking a boilerplate through an external selector command
pub mod selector;

/// Boilerplate directory lookup
pub mod loader;

/// Recursive tree copy into the project directory
pub mod copier;

/// Combines all components into the list and materialize operations
pub mod processor;

pub mod logger;
