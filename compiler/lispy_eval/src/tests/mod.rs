//! Unit tests for the evaluator, run against hand-built trees.
