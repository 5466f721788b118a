//! Live object model for motion-control firmware: schema tables, selector
//! evaluation, and tolerant JSON status reports.

/// Tagged values, schema tables, exploration context, and the path evaluator.
pub mod model;

/// Machine subsystems that publish into the object model, and their snapshot loader.
pub mod machine;
