mod common;
mod priority;
mod schedule;
