mod common;
mod service;
mod statistics;
