pub mod aggregator;

#[cfg(test)]
mod aggregator_test;
