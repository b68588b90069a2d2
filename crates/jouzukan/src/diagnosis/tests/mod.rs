mod catalog_rules;
mod common;
mod routing;
mod scoring;
