mod helpers;

mod shape_operations;
mod undo;
